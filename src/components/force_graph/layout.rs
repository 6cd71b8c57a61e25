//! Per-frame layout snapshot read by the SVG view.

use std::collections::HashMap;

use super::geometry::{LineSegment, Point, adjust_line_position};
use super::transform::ViewTransform;
use super::types::GraphLink;

/// Where everything is this frame, keyed by node id and link key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	/// View transform of the zoom layer.
	pub transform: ViewTransform,
	pub(super) positions: HashMap<String, Point>,
	pub(super) node_opacity: HashMap<String, f64>,
	pub(super) link_opacity: HashMap<String, f64>,
}

impl Layout {
	/// World position of node `id` this frame.
	pub fn position(&self, id: &str) -> Option<Point> {
		self.positions.get(id).copied()
	}

	/// `transform` attribute for a node group; nodes without a position sit at the origin.
	pub fn node_transform(&self, id: &str) -> String {
		let p = self.position(id).unwrap_or_default();
		format!("translate({}, {})", p.x, p.y)
	}

	/// Opacity of node `id`; 1 when unknown.
	pub fn node_opacity(&self, id: &str) -> f64 {
		self.node_opacity.get(id).copied().unwrap_or(1.0)
	}

	/// Link endpoints trimmed to the icon boundary of both nodes.
	pub fn link_segment(&self, link: &GraphLink, radius: f64) -> Option<LineSegment> {
		let source = self.position(&link.source)?;
		let target = self.position(&link.target)?;
		adjust_line_position(source, target, radius)
	}

	/// Opacity of `link`; 1 when unknown.
	pub fn link_opacity(&self, link: &GraphLink) -> f64 {
		self.link_opacity.get(&link.key()).copied().unwrap_or(1.0)
	}
}
