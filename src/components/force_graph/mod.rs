//! Expandable force-directed graph rendered to SVG.
//!
//! - Physics-based node positioning via the `force_graph` simulation
//! - Click to expand a node into children, with the view re-centered on it
//! - Pan, zoom and node dragging
//! - Hover emphasis of a node and its neighbors
//! - Links trimmed to the icon boundary of their endpoints
//!
//! # Example
//!
//! ```ignore
//! use icon_graph::{GraphConfig, IconGraph};
//!
//! let hovered = RwSignal::new(None);
//! view! { <IconGraph config=GraphConfig::default() hovered=hovered /> }
//! ```

mod component;
pub mod config;
pub mod data;
pub mod emphasis;
mod error;
pub mod geometry;
pub mod layout;
mod render;
pub mod state;
pub mod transform;
mod types;

pub use component::{GRAPH_ID, IconGraph};
pub use config::GraphConfig;
pub use error::GraphError;
pub use types::{GraphData, GraphLink, GraphNode, Icon, NodeKind};
