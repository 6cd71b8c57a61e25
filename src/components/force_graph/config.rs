//! Tunable parameters for the graph view, layout and mock data provider.
//!
//! Every field has a default, so a config document only needs to name the
//! values it overrides:
//!
//! ```json
//! { "children_per_expansion": 3, "zoom_extent": { "min": 0.25, "max": 4.0 } }
//! ```

use std::time::Duration;

use force_graph::SimulationParameters;
use serde::Deserialize;

use super::error::GraphError;

/// Lower and upper bound for the zoom factor.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomExtent {
	/// Smallest zoom factor; must be positive.
	pub min: f64,
	/// Largest zoom factor; must not be below `min`.
	pub max: f64,
}

impl ZoomExtent {
	/// Clamp `k` into `min..=max`.
	pub fn clamp(&self, k: f64) -> f64 {
		k.clamp(self.min, self.max)
	}

	/// Whether `k` lies inside the extent.
	pub fn contains(&self, k: f64) -> bool {
		(self.min..=self.max).contains(&k)
	}
}

impl Default for ZoomExtent {
	fn default() -> Self {
		Self { min: 0.5, max: 3.0 }
	}
}

/// Physics parameters handed to the `force_graph` simulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
	/// Node repulsion strength.
	pub charge: f32,
	/// Link attraction strength.
	pub spring: f32,
	/// Upper bound on the force applied to a node per step.
	pub max_force: f32,
	/// Velocity cap per step.
	pub node_speed: f32,
	/// Velocity kept per step, in `0.0..1.0`.
	pub damping: f32,
	/// Mass given to every node.
	pub node_mass: f32,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			charge: 900.0,
			spring: 0.04,
			max_force: 120.0,
			node_speed: 3000.0,
			damping: 0.9,
			node_mass: 10.0,
		}
	}
}

impl From<&SimulationConfig> for SimulationParameters {
	fn from(config: &SimulationConfig) -> Self {
		SimulationParameters {
			force_charge: config.charge,
			force_spring: config.spring,
			force_max: config.max_force,
			node_speed: config.node_speed,
			damping_factor: config.damping,
		}
	}
}

/// Complete configuration for the graph component.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// SVG width in pixels (ignored when `fullscreen`).
	pub width: f64,
	/// SVG height in pixels (ignored when `fullscreen`).
	pub height: f64,
	/// Size the SVG to the window and follow resizes.
	pub fullscreen: bool,
	/// Distance from a node center at which links stop.
	pub icon_radius: f64,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	/// Number of nodes returned by the mock provider.
	pub initial_nodes: usize,
	/// Number of children appended per expansion click.
	pub children_per_expansion: usize,
	/// Delay before the mock provider delivers the first nodes.
	pub load_delay_ms: u64,
	/// Delay between a click and the appended children.
	pub expand_delay_ms: u64,
	/// Bounds for wheel zoom.
	pub zoom_extent: ZoomExtent,
	/// Zoom factor applied when centering on a clicked node.
	pub center_scale: f64,
	/// Length of the centering animation.
	pub center_duration_ms: u64,
	pub simulation: SimulationConfig,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			width: 900.0,
			height: 600.0,
			fullscreen: false,
			icon_radius: 30.0,
			hit_radius: 18.0,
			initial_nodes: 5,
			children_per_expansion: 5,
			load_delay_ms: 500,
			expand_delay_ms: 200,
			zoom_extent: ZoomExtent::default(),
			center_scale: 1.5,
			center_duration_ms: 800,
			simulation: SimulationConfig::default(),
		}
	}
}

impl GraphConfig {
	/// Parse a JSON config document; missing fields keep their defaults.
	///
	/// Values that parse but cannot drive the view (an inverted zoom extent,
	/// a centering zoom outside it, negative radii) are rejected.
	pub fn from_json(text: &str) -> Result<Self, GraphError> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Check the values the view divides or clamps by.
	pub fn validate(&self) -> Result<(), GraphError> {
		let ZoomExtent { min, max } = self.zoom_extent;
		if !(min.is_finite() && max.is_finite() && min > 0.0) {
			return Err(invalid(format!("zoom_extent.min must be positive, got {min}")));
		}
		if min > max {
			return Err(invalid(format!("zoom_extent is inverted: {min} > {max}")));
		}
		if !(self.center_scale.is_finite() && self.zoom_extent.contains(self.center_scale)) {
			return Err(invalid(format!(
				"center_scale {} is outside zoom_extent {min}..={max}",
				self.center_scale
			)));
		}
		let radii = [("icon_radius", self.icon_radius), ("hit_radius", self.hit_radius)];
		for (name, radius) in radii {
			if !(radius.is_finite() && radius >= 0.0) {
				return Err(invalid(format!("{name} must be non-negative, got {radius}")));
			}
		}
		Ok(())
	}

	/// Delay before the first nodes arrive.
	pub fn load_delay(&self) -> Duration {
		Duration::from_millis(self.load_delay_ms)
	}

	/// Delay before an expansion's children arrive.
	pub fn expand_delay(&self) -> Duration {
		Duration::from_millis(self.expand_delay_ms)
	}

	/// Centering transition length in seconds.
	pub fn center_duration(&self) -> f64 {
		self.center_duration_ms as f64 / 1000.0
	}
}

fn invalid(reason: String) -> GraphError {
	GraphError::InvalidSetting(reason)
}
