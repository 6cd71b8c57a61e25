//! Pan/zoom transform and animated transitions between transforms.

use super::config::ZoomExtent;

/// Pan and zoom applied to the whole graph layer: `screen = world * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl ViewTransform {
	/// No pan, zoom 1.
	pub const IDENTITY: Self = Self {
		x: 0.0,
		y: 0.0,
		k: 1.0,
	};

	/// World to screen.
	pub fn apply(&self, wx: f64, wy: f64) -> (f64, f64) {
		(wx * self.k + self.x, wy * self.k + self.y)
	}

	/// Screen to world.
	pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Value for the SVG `transform` attribute.
	pub fn to_svg(&self) -> String {
		format!("translate({}, {}) scale({})", self.x, self.y, self.k)
	}

	/// Multiply the zoom by `factor`, keeping the screen point `(px, py)` fixed.
	pub fn zoom_about(&self, px: f64, py: f64, factor: f64, extent: &ZoomExtent) -> Self {
		let k = extent.clamp(self.k * factor);
		let ratio = k / self.k;
		Self {
			x: px - (px - self.x) * ratio,
			y: py - (py - self.y) * ratio,
			k,
		}
	}

	fn lerp(&self, other: &Self, t: f64) -> Self {
		Self {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
			k: self.k + (other.k - self.k) * t,
		}
	}
}

fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// An in-flight animation of the view transform.
#[derive(Clone, Debug)]
pub struct ViewTransition {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl ViewTransition {
	/// Animate from `from` to `to` over `duration` seconds.
	pub fn new(from: ViewTransform, to: ViewTransform, duration: f64) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration,
		}
	}

	/// Advance by `dt` seconds and return the transform for this frame.
	pub fn step(&mut self, dt: f64) -> ViewTransform {
		self.elapsed += dt;
		if self.is_finished() {
			return self.to;
		}
		let t = ease_in_out_cubic(self.elapsed / self.duration);
		self.from.lerp(&self.to, t)
	}

	/// The target has been reached.
	pub fn is_finished(&self) -> bool {
		self.duration <= 0.0 || self.elapsed >= self.duration
	}
}
