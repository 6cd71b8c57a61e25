//! Hover emphasis: the hovered node and its neighbors fade in, everything else dims.
//!
//! Each node carries its own level in `0.0..=1.0`, eased with exponential
//! smoothing towards 1 while it is in the focus set and towards 0 afterwards.
//! A short hold keeps a level up when the pointer only grazes a node.

use std::collections::{HashMap, HashSet};

use force_graph::DefaultNodeIdx;

const FADE_IN_RATE: f64 = 6.0;
const FADE_OUT_RATE: f64 = 4.0;
const HOLD: f64 = 0.12;
const VISIBLE: f64 = 0.005;
/// Opacity lost by unfocused elements at full emphasis.
const DIM: f64 = 0.7;

/// Per-node emphasis levels driven by the hovered node.
#[derive(Clone, Debug, Default)]
pub struct Emphasis {
	/// Node under the pointer.
	pub hovered: Option<DefaultNodeIdx>,
	focus: HashSet<DefaultNodeIdx>,
	levels: HashMap<DefaultNodeIdx, f64>,
	holds: HashMap<DefaultNodeIdx, f64>,
	peak: f64,
}

impl Emphasis {
	/// Focus `node` and its neighbors along `edges`, or clear focus with `None`.
	pub fn focus(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.focus.clear();
		let Some(idx) = node else {
			return;
		};
		self.focus.insert(idx);
		self.focus.extend(edges.iter().filter_map(|&(a, b)| {
			if a == idx {
				Some(b)
			} else if b == idx {
				Some(a)
			} else {
				None
			}
		}));
		for &n in &self.focus {
			self.holds.insert(n, HOLD);
		}
	}

	/// Advance fades and holds by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		let rise = 1.0 - (-FADE_IN_RATE * dt).exp();
		let decay = (-FADE_OUT_RATE * dt).exp();

		for &idx in &self.focus {
			let level = self.levels.entry(idx).or_insert(0.0);
			*level += (1.0 - *level) * rise;
		}

		let focus = &self.focus;
		self.holds.retain(|idx, hold| {
			if focus.contains(idx) {
				return true;
			}
			*hold -= dt;
			*hold > 0.0
		});

		let holds = &self.holds;
		let mut peak: f64 = 0.0;
		self.levels.retain(|idx, level| {
			if !focus.contains(idx) && !holds.contains_key(idx) {
				*level *= decay;
			}
			peak = peak.max(*level);
			*level > VISIBLE
		});
		self.peak = peak;
	}

	/// Current level of `idx`, 0 when it has faded out.
	pub fn level(&self, idx: DefaultNodeIdx) -> f64 {
		self.levels.get(&idx).copied().unwrap_or(0.0)
	}

	/// Highest level of any node; drives how much unfocused elements dim.
	pub fn peak(&self) -> f64 {
		self.peak
	}

	/// Opacity for a node, or for a link when given the geometric mean of its ends.
	pub fn opacity_for(&self, level: f64) -> f64 {
		let base = 1.0 - DIM * smooth_step(self.peak);
		base + (1.0 - base) * smooth_step(level)
	}

	/// No focus and every level faded out.
	pub fn is_idle(&self) -> bool {
		self.focus.is_empty() && self.levels.is_empty()
	}

	pub fn node_opacity(&self, idx: DefaultNodeIdx) -> f64 {
		self.opacity_for(self.level(idx))
	}

	pub fn link_opacity(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		self.opacity_for((self.level(a) * self.level(b)).sqrt())
	}
}

fn smooth_step(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
	use force_graph::{ForceGraph, NodeData};

	use super::*;
	use crate::components::force_graph::config::SimulationConfig;

	fn three_nodes() -> (Vec<DefaultNodeIdx>, Vec<(DefaultNodeIdx, DefaultNodeIdx)>) {
		let mut graph: ForceGraph<(), ()> =
			ForceGraph::new((&SimulationConfig::default()).into());
		let idx: Vec<DefaultNodeIdx> = (0..3)
			.map(|i| {
				graph.add_node(NodeData {
					x: i as f32,
					y: 0.0,
					mass: 10.0,
					is_anchor: false,
					user_data: (),
				})
			})
			.collect();
		let edges = vec![(idx[0], idx[1])];
		(idx, edges)
	}

	#[test]
	fn hovered_node_and_neighbor_brighten() {
		let (idx, edges) = three_nodes();
		let mut e = Emphasis::default();
		e.focus(Some(idx[0]), &edges);
		for _ in 0..60 {
			e.tick(0.016);
		}
		assert!(e.level(idx[0]) > 0.95);
		assert!(e.level(idx[1]) > 0.95);
		assert_eq!(e.level(idx[2]), 0.0);
		assert!(e.node_opacity(idx[0]) > 0.99);
		assert!(e.node_opacity(idx[2]) < 0.35);
		assert!(e.link_opacity(idx[0], idx[1]) > 0.99);
	}

	#[test]
	fn levels_fade_after_hover_ends() {
		let (idx, edges) = three_nodes();
		let mut e = Emphasis::default();
		e.focus(Some(idx[0]), &edges);
		for _ in 0..30 {
			e.tick(0.016);
		}
		e.focus(None, &edges);
		// still held right after leaving
		e.tick(0.016);
		assert!(e.level(idx[0]) > 0.5);
		for _ in 0..200 {
			e.tick(0.016);
		}
		assert_eq!(e.level(idx[0]), 0.0);
		assert_eq!(e.peak(), 0.0);
		assert_eq!(e.node_opacity(idx[2]), 1.0);
		assert!(e.is_idle());
	}

	#[test]
	fn no_focus_means_full_opacity() {
		let (idx, _) = three_nodes();
		let e = Emphasis::default();
		assert_eq!(e.node_opacity(idx[1]), 1.0);
		assert_eq!(e.link_opacity(idx[0], idx[1]), 1.0);
	}
}
