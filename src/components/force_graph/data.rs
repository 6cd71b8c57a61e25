//! Mock data provider.
//!
//! Stands in for a backend: produces a fixed number of nodes with random
//! icons and delivers them after a delay. Expansion children come from here
//! too so that every node is built the same way.

use std::time::Duration;

use chrono::NaiveDate;
use leptos::prelude::set_timeout;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::types::{GraphNode, Icon, NodeKind};

/// Random icon source. Seeded explicitly so tests are reproducible.
pub struct IconPicker {
	rng: StdRng,
}

impl IconPicker {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Uniformly random icon.
	pub fn pick(&mut self) -> Icon {
		*Icon::ALL.choose(&mut self.rng).unwrap_or(&Icon::Server)
	}
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Nodes as delivered by the provider: "Node 0" .. "Node {count-1}".
pub fn mock_nodes(count: usize, picker: &mut IconPicker) -> Vec<GraphNode> {
	(0..count)
		.map(|i| GraphNode {
			id: format!("Node {i}"),
			icon: picker.pick(),
			kind: NodeKind::Server,
			created: date(2023, 5, 12),
			owner: "Admin".into(),
		})
		.collect()
}

/// Children appended when `parent` is expanded, numbered from `first_index`.
pub fn child_nodes(
	parent: &str,
	first_index: usize,
	count: usize,
	picker: &mut IconPicker,
) -> Vec<GraphNode> {
	(first_index..first_index + count)
		.map(|i| GraphNode {
			id: format!("{parent}.{i}"),
			icon: picker.pick(),
			kind: NodeKind::Database,
			created: date(2024, 1, 1),
			owner: "User".into(),
		})
		.collect()
}

/// Deliver `count` mock nodes to `on_ready` after `delay`.
pub fn fetch_data(
	count: usize,
	delay: Duration,
	seed: u64,
	on_ready: impl FnOnce(Vec<GraphNode>) + 'static,
) {
	debug!("icon-graph: fetching {} nodes in {:?}", count, delay);
	set_timeout(
		move || {
			let mut picker = IconPicker::new(seed);
			on_ready(mock_nodes(count, &mut picker));
		},
		delay,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mock_nodes_are_numbered_servers() {
		let mut picker = IconPicker::new(7);
		let nodes = mock_nodes(5, &mut picker);
		let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["Node 0", "Node 1", "Node 2", "Node 3", "Node 4"]);
		assert!(nodes.iter().all(|n| n.kind == NodeKind::Server && n.owner == "Admin"));
		assert_eq!(nodes[0].created.to_string(), "2023-05-12");
	}

	#[test]
	fn children_use_dotted_ids() {
		let mut picker = IconPicker::new(1);
		let kids = child_nodes("Node 3", 5, 3, &mut picker);
		let ids: Vec<&str> = kids.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["Node 3.5", "Node 3.6", "Node 3.7"]);
		assert!(kids.iter().all(|n| n.kind == NodeKind::Database && n.owner == "User"));
		assert_eq!(kids[0].created.to_string(), "2024-01-01");
	}

	#[test]
	fn same_seed_same_icons() {
		let a: Vec<Icon> = mock_nodes(20, &mut IconPicker::new(42))
			.into_iter()
			.map(|n| n.icon)
			.collect();
		let b: Vec<Icon> = mock_nodes(20, &mut IconPicker::new(42))
			.into_iter()
			.map(|n| n.icon)
			.collect();
		assert_eq!(a, b);
	}

	#[test]
	fn picker_covers_the_icon_set() {
		let mut picker = IconPicker::new(3);
		let seen: std::collections::HashSet<Icon> = (0..500).map(|_| picker.pick()).collect();
		assert_eq!(seen.len(), Icon::ALL.len());
	}
}
