//! Errors raised by graph state operations and DOM lookups.

use thiserror::Error;

/// Failure of a graph operation.
#[derive(Error, Debug)]
pub enum GraphError {
	/// The `#graph` SVG element is not in the document.
	#[error("SVG element #graph is missing")]
	SvgMissing,

	/// The SVG has a zero, negative or unparsable width or height.
	#[error("SVG viewport has unusable size {width}x{height}")]
	InvalidViewport {
		/// Width read from the SVG.
		width: f64,
		/// Height read from the SVG.
		height: f64,
	},

	/// No node with this id is in the graph.
	#[error("unknown node: {0}")]
	UnknownNode(String),

	/// A node with this id is already in the graph.
	#[error("duplicate node id: {0}")]
	DuplicateNode(String),

	/// The config document is not valid JSON for [`GraphConfig`](super::GraphConfig).
	#[error("invalid graph config: {0}")]
	InvalidConfig(#[from] serde_json::Error),

	/// The config document parsed but holds an unusable value.
	#[error("invalid graph config: {0}")]
	InvalidSetting(String),
}
