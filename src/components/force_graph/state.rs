//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with the node and link lists,
//! the pan/zoom transform, pointer interaction and hover emphasis. The
//! simulation only steps while it is "hot": every change to the graph
//! reheats it and it cools down on its own, like a d3 force simulation.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::{debug, error};

use super::config::GraphConfig;
use super::data::{IconPicker, child_nodes};
use super::emphasis::Emphasis;
use super::error::GraphError;
use super::geometry::{Point, centering_transform};
use super::layout::Layout;
use super::transform::{ViewTransform, ViewTransition};
use super::types::{GraphData, GraphLink, GraphNode};

/// Simulation stops stepping below this heat.
pub const ALPHA_MIN: f64 = 0.001;
/// Heat kept up while a node is being dragged.
const DRAG_ALPHA: f64 = 0.3;
/// Pointer travel (screen pixels) below which a press on a node counts as a click.
pub const CLICK_SLOP: f64 = 3.0;
/// Radius of the ring the first batch of nodes starts on.
const LOAD_RING: f64 = 100.0;

/// Per-step heat decay; cools from 1 to `ALPHA_MIN` in 300 steps.
fn alpha_decay() -> f64 {
	1.0 - ALPHA_MIN.powf(1.0 / 300.0)
}

/// Metadata attached to each simulation node: its slot in the node list.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Index into the node list.
	pub slot: usize,
}

/// A press on a node that may turn into a drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Node under the press, if any.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Screen position of the press.
	pub start_x: f64,
	/// Screen position of the press.
	pub start_y: f64,
	/// World position of the node when pressed.
	pub node_start_x: f32,
	/// World position of the node when pressed.
	pub node_start_y: f32,
	/// Pointer left the click slop; the node is now pinned where it is dropped.
	pub moved: bool,
}

/// Tracks an in-progress background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// A background press is being dragged.
	pub active: bool,
	/// Screen position of the press.
	pub start_x: f64,
	/// Screen position of the press.
	pub start_y: f64,
	/// View translation when the pan started.
	pub transform_start_x: f64,
	/// View translation when the pan started.
	pub transform_start_y: f64,
}

/// Everything the graph view knows: nodes, links, physics, view transform and pointer state.
pub struct ForceGraphState {
	/// Physics simulation.
	pub graph: ForceGraph<NodeInfo, ()>,
	pub config: GraphConfig,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Hover fade levels.
	pub emphasis: Emphasis,
	/// Id of the last clicked node.
	pub selected: Option<String>,
	/// Viewport size the center force aims at.
	pub width: f64,
	/// Viewport size the center force aims at.
	pub height: f64,
	nodes: Vec<GraphNode>,
	links: Vec<GraphLink>,
	index: HashMap<String, DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	children: HashMap<String, usize>,
	transition: Option<ViewTransition>,
	alpha: f64,
}

impl ForceGraphState {
	/// Empty graph with a cold simulation.
	pub fn new(config: GraphConfig) -> Self {
		let graph = ForceGraph::new((&config.simulation).into());
		Self {
			graph,
			width: config.width,
			height: config.height,
			config,
			transform: ViewTransform::IDENTITY,
			drag: DragState::default(),
			pan: PanState::default(),
			emphasis: Emphasis::default(),
			selected: None,
			nodes: Vec::new(),
			links: Vec::new(),
			index: HashMap::new(),
			edges: Vec::new(),
			children: HashMap::new(),
			transition: None,
			alpha: 0.0,
		}
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Links in insertion order.
	pub fn links(&self) -> &[GraphLink] {
		&self.links
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		let idx = *self.index.get(id)?;
		self.node_at(idx)
	}

	/// Node data for a simulation index.
	pub fn node_at(&self, idx: DefaultNodeIdx) -> Option<&GraphNode> {
		let mut slot = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				slot = Some(node.data.user_data.slot);
			}
		});
		slot.and_then(|s| self.nodes.get(s))
	}

	/// World position of node `id`.
	pub fn position(&self, id: &str) -> Option<Point> {
		let idx = *self.index.get(id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(Point::new(node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// World-space point the center force pulls the graph towards.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Add `node` at world point `at`; ids must be unique.
	pub fn add_node(&mut self, node: GraphNode, at: Point) -> Result<DefaultNodeIdx, GraphError> {
		if self.index.contains_key(&node.id) {
			return Err(GraphError::DuplicateNode(node.id));
		}
		let idx = self.graph.add_node(NodeData {
			x: at.x as f32,
			y: at.y as f32,
			mass: self.config.simulation.node_mass,
			is_anchor: false,
			user_data: NodeInfo {
				slot: self.nodes.len(),
			},
		});
		self.index.insert(node.id.clone(), idx);
		self.nodes.push(node);
		Ok(idx)
	}

	/// Link two existing nodes.
	pub fn add_link(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
		let src = *self
			.index
			.get(source)
			.ok_or_else(|| GraphError::UnknownNode(source.to_string()))?;
		let tgt = *self
			.index
			.get(target)
			.ok_or_else(|| GraphError::UnknownNode(target.to_string()))?;
		self.graph.add_edge(src, tgt, EdgeData::default());
		self.edges.push((src, tgt));
		self.links.push(GraphLink {
			source: source.to_string(),
			target: target.to_string(),
		});
		Ok(())
	}

	/// Add the provider's initial nodes on a ring around the center and start the layout.
	pub fn load(&mut self, nodes: Vec<GraphNode>) -> Result<(), GraphError> {
		let center = self.center();
		let count = nodes.len().max(1) as f64;
		for (i, node) in nodes.into_iter().enumerate() {
			let angle = i as f64 * 2.0 * PI / count;
			let at = Point::new(
				center.x + LOAD_RING * angle.cos(),
				center.y + LOAD_RING * angle.sin(),
			);
			self.add_node(node, at)?;
		}
		self.reheat();
		Ok(())
	}

	/// Append children to `parent_id`, link them to it and restart the layout.
	///
	/// Children start on a small ring around the parent. Repeated expansion of
	/// the same node keeps numbering where the last one stopped.
	pub fn expand(
		&mut self,
		parent_id: &str,
		picker: &mut IconPicker,
	) -> Result<GraphData, GraphError> {
		let origin = self
			.position(parent_id)
			.ok_or_else(|| GraphError::UnknownNode(parent_id.to_string()))?;
		let first = self.children.get(parent_id).copied().unwrap_or(0);
		let count = self.config.children_per_expansion;
		let kids = child_nodes(parent_id, first, count, picker);
		let ring = self.config.icon_radius * 2.0;
		let offset = first as f64 * 0.5;

		let mut added = GraphData::default();
		for (i, kid) in kids.into_iter().enumerate() {
			let angle = offset + i as f64 * 2.0 * PI / count.max(1) as f64;
			let at = Point::new(origin.x + ring * angle.cos(), origin.y + ring * angle.sin());
			let id = kid.id.clone();
			self.add_node(kid.clone(), at)?;
			self.add_link(parent_id, &id)?;
			added.links.push(GraphLink {
				source: parent_id.to_string(),
				target: id,
			});
			added.nodes.push(kid);
		}
		self.children.insert(parent_id.to_string(), first + count);
		debug!(
			"icon-graph: expanded {} with {} children ({} nodes total)",
			parent_id,
			count,
			self.nodes.len()
		);
		self.reheat();
		Ok(added)
	}

	/// Restart the layout at full heat.
	pub fn reheat(&mut self) {
		self.alpha = 1.0;
	}

	/// Current simulation heat.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn is_settled(&self) -> bool {
		self.alpha < ALPHA_MIN
	}

	/// Advance physics (while hot), hover emphasis and any view transition by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		if !self.is_settled() {
			self.graph.update(dt);
			self.pull_to_center();
			self.alpha -= self.alpha * alpha_decay();
		}
		self.emphasis.tick(dt as f64);
		if let Some(transition) = self.transition.as_mut() {
			self.transform = transition.step(dt as f64);
			if transition.is_finished() {
				self.transition = None;
			}
		}
	}

	/// Shift free nodes so the centroid of all nodes sits on the center point.
	fn pull_to_center(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			return;
		}
		let center = self.center();
		let (dx, dy) = (
			(center.x - sx / n as f64) as f32,
			(center.y - sy / n as f64) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		self.transform.invert(sx, sy)
	}

	/// Node under screen point `(sx, sy)`, within `hit_radius`.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let radius = self.config.hit_radius;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Move hover emphasis to `node`.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.emphasis.focus(node, &self.edges);
	}

	pub fn hovered_node(&self) -> Option<&GraphNode> {
		self.emphasis.hovered.and_then(|idx| self.node_at(idx))
	}

	/// Mark `id` as selected.
	pub fn select(&mut self, id: &str) -> Result<(), GraphError> {
		if !self.index.contains_key(id) {
			return Err(GraphError::UnknownNode(id.to_string()));
		}
		self.selected = Some(id.to_string());
		Ok(())
	}

	/// Start an animated move that brings `id` to the middle of a `width` x `height` viewport.
	pub fn center_on(&mut self, id: &str, width: f64, height: f64) -> Result<(), GraphError> {
		if !(width > 0.0 && height > 0.0) {
			return Err(GraphError::InvalidViewport { width, height });
		}
		let point = self
			.position(id)
			.ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
		let target = centering_transform(point, width, height, self.config.center_scale);
		self.transition = Some(ViewTransition::new(
			self.transform,
			target,
			self.config.center_duration(),
		));
		debug!("icon-graph: centering on {} ({}, {})", id, point.x, point.y);
		Ok(())
	}

	pub fn is_transitioning(&self) -> bool {
		self.transition.is_some()
	}

	/// Handle a click on `id`: select it and center the view on it.
	///
	/// `viewport` is the SVG size, or the error from looking it up. A missing or
	/// unusable SVG is logged and only skips centering; the node is still
	/// selected so the caller can go on to expand it.
	pub fn activate(
		&mut self,
		id: &str,
		viewport: Result<(f64, f64), GraphError>,
	) -> Result<(), GraphError> {
		self.select(id)?;
		if let Err(e) = viewport.and_then(|(w, h)| self.center_on(id, w, h)) {
			error!("icon-graph: cannot center on {}: {}", id, e);
		}
		Ok(())
	}

	/// Nothing will move or fade on the next tick unless an input arrives.
	pub fn is_idle(&self) -> bool {
		self.is_settled() && !self.is_transitioning() && self.emphasis.is_idle()
	}

	/// Pointer went down at screen `(x, y)`: grab the node under it, else start panning.
	pub fn press(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			let mut start = (0.0, 0.0);
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					start = (node.x(), node.y());
				}
			});
			self.drag = DragState {
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: start.0,
				node_start_y: start.1,
				moved: false,
			};
		} else {
			self.transition = None;
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	/// Pointer moved to screen `(x, y)`: update hover, drag or pan.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.drag.node_idx {
			let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved && (dx * dx + dy * dy).sqrt() <= CLICK_SLOP {
				return;
			}
			self.drag.moved = true;
			let (nx, ny) = (
				self.drag.node_start_x + (dx / self.transform.k) as f32,
				self.drag.node_start_y + (dy / self.transform.k) as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
			self.alpha = self.alpha.max(DRAG_ALPHA);
			return;
		}

		let hovered = self.node_at_position(x, y);
		self.set_hover(hovered);

		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Pointer released. Returns the node id when the press was a click on a node.
	pub fn release(&mut self) -> Option<String> {
		let clicked = match self.drag.node_idx {
			Some(idx) if !self.drag.moved => self.node_at(idx).map(|n| n.id.clone()),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	/// Pointer left the view: abandon any gesture and clear hover.
	pub fn leave(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.set_hover(None);
	}

	/// Wheel at screen `(x, y)`: zoom in for negative `delta_y`, out otherwise.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.transition = None;
		self.transform = self
			.transform
			.zoom_about(x, y, factor, &self.config.zoom_extent);
	}

	/// New viewport size; moves the center and reheats.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.reheat();
	}

	/// Positions, opacities and transform for the view.
	pub fn snapshot(&self) -> Layout {
		let mut layout = Layout {
			transform: self.transform,
			..Layout::default()
		};
		self.graph.visit_nodes(|node| {
			if let Some(n) = self.nodes.get(node.data.user_data.slot) {
				layout.positions.insert(
					n.id.clone(),
					Point::new(node.x() as f64, node.y() as f64),
				);
				layout
					.node_opacity
					.insert(n.id.clone(), self.emphasis.node_opacity(node.index()));
			}
		});
		for (link, &(a, b)) in self.links.iter().zip(&self.edges) {
			layout
				.link_opacity
				.insert(link.key(), self.emphasis.link_opacity(a, b));
		}
		layout
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::data::mock_nodes;

	fn loaded() -> (ForceGraphState, IconPicker) {
		let mut picker = IconPicker::new(11);
		let mut state = ForceGraphState::new(GraphConfig::default());
		state.load(mock_nodes(5, &mut picker)).unwrap();
		(state, picker)
	}

	fn settle(state: &mut ForceGraphState) {
		for _ in 0..400 {
			state.tick(0.016);
		}
		assert!(state.is_settled());
	}

	fn screen_pos(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let p = state.position(id).unwrap();
		state.transform.apply(p.x, p.y)
	}

	#[test]
	fn load_places_nodes_without_links() {
		let (state, _) = loaded();
		assert_eq!(state.nodes().len(), 5);
		assert!(state.links().is_empty());
		assert_eq!(state.alpha(), 1.0);
		let p = state.position("Node 0").unwrap();
		assert!((p.x - 550.0).abs() < 1e-3 && (p.y - 300.0).abs() < 1e-3);
	}

	#[test]
	fn expansion_adds_children_and_links() {
		let (mut state, mut picker) = loaded();
		let added = state.expand("Node 2", &mut picker).unwrap();
		let ids: Vec<&str> = added.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["Node 2.0", "Node 2.1", "Node 2.2", "Node 2.3", "Node 2.4"]);
		assert_eq!(state.nodes().len(), 10);
		assert_eq!(state.links().len(), 5);
		assert!(added.links.iter().all(|l| l.source == "Node 2"));
		for link in state.links() {
			assert!(state.node(&link.source).is_some());
			assert!(state.node(&link.target).is_some());
		}
	}

	#[test]
	fn repeated_expansion_keeps_ids_unique() {
		let (mut state, mut picker) = loaded();
		state.expand("Node 1", &mut picker).unwrap();
		let again = state.expand("Node 1", &mut picker).unwrap();
		assert_eq!(again.nodes[0].id, "Node 1.5");
		let grand = state.expand("Node 1.5", &mut picker).unwrap();
		assert_eq!(grand.nodes[4].id, "Node 1.5.4");

		let mut ids: Vec<&str> = state.nodes().iter().map(|n| n.id.as_str()).collect();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), state.nodes().len());
	}

	#[test]
	fn expanding_unknown_node_fails() {
		let (mut state, mut picker) = loaded();
		let err = state.expand("Node 99", &mut picker).unwrap_err();
		assert!(matches!(err, GraphError::UnknownNode(id) if id == "Node 99"));
		assert_eq!(state.nodes().len(), 5);
	}

	#[test]
	fn links_and_ids_are_validated() {
		let (mut state, mut picker) = loaded();
		assert!(matches!(
			state.add_link("Node 0", "ghost"),
			Err(GraphError::UnknownNode(_))
		));
		let dup = mock_nodes(1, &mut picker).remove(0);
		assert!(matches!(
			state.add_node(dup, Point::default()),
			Err(GraphError::DuplicateNode(_))
		));
	}

	#[test]
	fn simulation_cools_and_expansion_reheats() {
		let (mut state, mut picker) = loaded();
		settle(&mut state);
		let frozen = state.snapshot();
		state.tick(0.016);
		assert_eq!(state.snapshot().position("Node 3"), frozen.position("Node 3"));

		state.expand("Node 0", &mut picker).unwrap();
		assert_eq!(state.alpha(), 1.0);
		assert!(!state.is_settled());
	}

	#[test]
	fn center_force_keeps_centroid_in_middle() {
		let (mut state, _) = loaded();
		for _ in 0..30 {
			state.tick(0.016);
		}
		let (mut sx, mut sy) = (0.0, 0.0);
		for node in state.nodes() {
			let p = state.position(&node.id).unwrap();
			sx += p.x;
			sy += p.y;
		}
		let n = state.nodes().len() as f64;
		assert!((sx / n - 450.0).abs() < 0.05);
		assert!((sy / n - 300.0).abs() < 0.05);
	}

	#[test]
	fn hit_testing_respects_transform() {
		let (mut state, _) = loaded();
		state.transform = ViewTransform {
			x: -100.0,
			y: 40.0,
			k: 2.0,
		};
		let (sx, sy) = screen_pos(&state, "Node 0");
		let idx = state.node_at_position(sx, sy).unwrap();
		assert_eq!(state.node_at(idx).unwrap().id, "Node 0");
		assert!(state.node_at_position(sx + 200.0, sy + 200.0).is_none());
	}

	#[test]
	fn centering_animates_node_to_viewport_middle() {
		let (mut state, _) = loaded();
		settle(&mut state);
		state.center_on("Node 4", 900.0, 600.0).unwrap();
		assert!(state.is_transitioning());
		for _ in 0..60 {
			state.tick(0.016);
		}
		assert!(!state.is_transitioning());
		let (sx, sy) = screen_pos(&state, "Node 4");
		assert!((sx - 450.0).abs() < 1e-3 && (sy - 300.0).abs() < 1e-3);
		assert_eq!(state.transform.k, 1.5);
	}

	#[test]
	fn centering_rejects_bad_viewport_and_unknown_node() {
		let (mut state, _) = loaded();
		assert!(matches!(
			state.center_on("Node 0", 0.0, 600.0),
			Err(GraphError::InvalidViewport { .. })
		));
		assert!(matches!(
			state.center_on("nope", 900.0, 600.0),
			Err(GraphError::UnknownNode(_))
		));
		assert!(!state.is_transitioning());
	}

	#[test]
	fn click_without_svg_skips_centering_but_expands() {
		let (mut state, mut picker) = loaded();
		state.activate("Node 2", Err(GraphError::SvgMissing)).unwrap();
		assert_eq!(state.selected.as_deref(), Some("Node 2"));
		assert!(!state.is_transitioning());
		assert_eq!(state.transform, ViewTransform::IDENTITY);

		let added = state.expand("Node 2", &mut picker).unwrap();
		assert_eq!(added.nodes.len(), 5);
		assert_eq!(state.nodes().len(), 10);
	}

	#[test]
	fn click_with_viewport_centers() {
		let (mut state, _) = loaded();
		state.activate("Node 0", Ok((900.0, 600.0))).unwrap();
		assert!(state.is_transitioning());
		assert!(matches!(
			state.activate("ghost", Ok((900.0, 600.0))),
			Err(GraphError::UnknownNode(_))
		));
	}

	#[test]
	fn idle_once_settled_and_faded() {
		let (mut state, _) = loaded();
		assert!(!state.is_idle());
		settle(&mut state);
		assert!(state.is_idle());

		let (sx, sy) = screen_pos(&state, "Node 0");
		state.pointer_move(sx, sy);
		state.tick(0.016);
		assert!(!state.is_idle());
		state.leave();
		for _ in 0..200 {
			state.tick(0.016);
		}
		assert!(state.is_idle());

		state.center_on("Node 0", 900.0, 600.0).unwrap();
		assert!(!state.is_idle());
	}

	#[test]
	fn press_and_release_on_node_is_a_click() {
		let (mut state, _) = loaded();
		let (sx, sy) = screen_pos(&state, "Node 1");
		state.press(sx, sy);
		state.pointer_move(sx + 1.0, sy + 1.0);
		assert_eq!(state.release().as_deref(), Some("Node 1"));
	}

	#[test]
	fn dragging_pins_node_and_is_not_a_click() {
		let (mut state, _) = loaded();
		let (sx, sy) = screen_pos(&state, "Node 1");
		let before = state.position("Node 1").unwrap();
		state.press(sx, sy);
		state.pointer_move(sx + 40.0, sy);
		assert_eq!(state.release(), None);
		let after = state.position("Node 1").unwrap();
		assert!((after.x - before.x - 40.0).abs() < 1e-3);

		let mut pinned = false;
		state.graph.visit_nodes(|node| {
			if state.node_at(node.index()).map(|n| n.id.as_str()) == Some("Node 1") {
				pinned = node.data.is_anchor;
			}
		});
		assert!(pinned);
	}

	#[test]
	fn background_drag_pans() {
		let (mut state, _) = loaded();
		state.press(5.0, 5.0);
		state.pointer_move(25.0, -5.0);
		assert_eq!((state.transform.x, state.transform.y), (20.0, -10.0));
		assert_eq!(state.release(), None);
		state.pointer_move(100.0, 100.0);
		assert_eq!((state.transform.x, state.transform.y), (20.0, -10.0));
	}

	#[test]
	fn wheel_zoom_clamps_and_interrupts_centering() {
		let (mut state, _) = loaded();
		state.center_on("Node 0", 900.0, 600.0).unwrap();
		state.zoom_at(450.0, 300.0, -1.0);
		assert!(!state.is_transitioning());
		assert!((state.transform.k - 1.1).abs() < 1e-9);
		for _ in 0..40 {
			state.zoom_at(450.0, 300.0, 1.0);
		}
		assert_eq!(state.transform.k, 0.5);
	}

	#[test]
	fn hover_tracks_node_under_pointer() {
		let (mut state, mut picker) = loaded();
		state.expand("Node 0", &mut picker).unwrap();
		let (sx, sy) = screen_pos(&state, "Node 0");
		state.pointer_move(sx, sy);
		assert_eq!(state.hovered_node().map(|n| n.id.as_str()), Some("Node 0"));
		state.leave();
		assert!(state.hovered_node().is_none());
	}

	#[test]
	fn selection_requires_known_node() {
		let (mut state, _) = loaded();
		state.select("Node 2").unwrap();
		assert_eq!(state.selected.as_deref(), Some("Node 2"));
		assert!(state.select("Node 9").is_err());
		assert_eq!(state.selected.as_deref(), Some("Node 2"));
	}

	#[test]
	fn snapshot_covers_every_node_and_link() {
		let (mut state, mut picker) = loaded();
		state.expand("Node 3", &mut picker).unwrap();
		let layout = state.snapshot();
		for node in state.nodes() {
			assert!(layout.position(&node.id).is_some());
		}
		for link in state.links() {
			assert!(layout.link_segment(link, 30.0).is_some());
		}
	}
}
