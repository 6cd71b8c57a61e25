//! Line trimming and view centering math.

use super::transform::ViewTransform;

/// A point in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Endpoints of a drawn link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

/// Shortens the line between two node centers by `radius` at both ends so it
/// stops at the icon boundary. Returns `None` when the centers coincide.
pub fn adjust_line_position(source: Point, target: Point, radius: f64) -> Option<LineSegment> {
	let (dx, dy) = (target.x - source.x, target.y - source.y);
	let distance = (dx * dx + dy * dy).sqrt();
	if distance < 1e-6 {
		return None;
	}
	let (ox, oy) = (dx / distance * radius, dy / distance * radius);
	Some(LineSegment {
		x1: source.x + ox,
		y1: source.y + oy,
		x2: target.x - ox,
		y2: target.y - oy,
	})
}

/// Transform that shows `point` in the middle of a `width` x `height` viewport at zoom `scale`.
pub fn centering_transform(point: Point, width: f64, height: f64, scale: f64) -> ViewTransform {
	ViewTransform {
		x: width / 2.0 - point.x * scale,
		y: height / 2.0 - point.y * scale,
		k: scale,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trims_both_ends_by_radius() {
		let seg = adjust_line_position(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 30.0).unwrap();
		assert_eq!(
			seg,
			LineSegment {
				x1: 30.0,
				y1: 0.0,
				x2: 70.0,
				y2: 0.0
			}
		);
	}

	#[test]
	fn trims_along_diagonal() {
		let seg = adjust_line_position(Point::new(10.0, 10.0), Point::new(40.0, 50.0), 5.0).unwrap();
		// 3-4-5 direction
		assert!((seg.x1 - 13.0).abs() < 1e-9 && (seg.y1 - 14.0).abs() < 1e-9);
		assert!((seg.x2 - 37.0).abs() < 1e-9 && (seg.y2 - 46.0).abs() < 1e-9);
	}

	#[test]
	fn coincident_centers_have_no_line() {
		assert!(adjust_line_position(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 30.0).is_none());
	}

	#[test]
	fn centering_puts_point_mid_viewport() {
		let p = Point::new(120.0, -40.0);
		let t = centering_transform(p, 900.0, 600.0, 1.5);
		let (sx, sy) = t.apply(p.x, p.y);
		assert!((sx - 450.0).abs() < 1e-9);
		assert!((sy - 300.0).abs() < 1e-9);
		assert_eq!(t.k, 1.5);
	}
}
