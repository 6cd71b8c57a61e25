//! Graph data structures shared by the provider, the simulation state and the view.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// FontAwesome glyph drawn in place of a node circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
	User,
	Users,
	University,
	Server,
	AddressCard,
	MapMarker,
	NetworkWired,
}

impl Icon {
	/// Every glyph the random picker may choose from.
	pub const ALL: [Icon; 7] = [
		Icon::User,
		Icon::Users,
		Icon::University,
		Icon::Server,
		Icon::AddressCard,
		Icon::MapMarker,
		Icon::NetworkWired,
	];

	/// Private-use code point in the FontAwesome font.
	pub const fn glyph(self) -> char {
		match self {
			Icon::User => '\u{f007}',
			Icon::Users => '\u{f0c0}',
			Icon::University => '\u{f19c}',
			Icon::Server => '\u{f233}',
			Icon::AddressCard => '\u{f2bb}',
			Icon::MapMarker => '\u{f3c5}',
			Icon::NetworkWired => '\u{f6d9}',
		}
	}
}

impl fmt::Display for Icon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.glyph())
	}
}

/// What a node stands for. Loaded nodes are servers, expanded children databases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
	Server,
	Database,
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeKind::Server => f.write_str("Server"),
			NodeKind::Database => f.write_str("Database"),
		}
	}
}

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique identifier, the dotted expansion path (e.g. "Node 3.2").
	pub id: String,
	pub icon: Icon,
	#[serde(rename = "type")]
	pub kind: NodeKind,
	/// Creation date shown in the info panel.
	pub created: NaiveDate,
	pub owner: String,
}

/// An edge from a parent node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

impl GraphLink {
	/// Stable key used to match links to their SVG elements across updates.
	pub fn key(&self) -> String {
		format!("{}-{}", self.source, self.target)
	}
}

/// A batch of nodes and links, either a full graph or the part added by one expansion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
