//! Axis-aligned rectangle in camera space.

use glam::DVec2;

/// Double-precision axis-aligned rectangle.
///
/// Used for the visible viewport and for the generation and comfort zones
/// derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
	/// Minimum corner (inclusive).
	pub min: DVec2,
	/// Maximum corner (inclusive).
	pub max: DVec2,
}

impl Aabb2 {
	/// Create a new rectangle from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on both axes.
	pub fn new(min: DVec2, max: DVec2) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y,
			"Aabb2 min must be <= max on both axes"
		);
		Self { min, max }
	}

	/// Create a new rectangle from center and half-extents.
	pub fn from_center_half_extents(center: DVec2, half_extents: DVec2) -> Self {
		Self {
			min: center - half_extents,
			max: center + half_extents,
		}
	}

	/// Grow the half-extents by `fraction` on each axis, keeping the center.
	///
	/// `expanded(0.3)` turns a 10×6 rectangle into 13×7.8.
	#[inline]
	pub fn expanded(&self, fraction: f64) -> Self {
		Self::from_center_half_extents(self.center(), self.half_extents() * (1.0 + fraction))
	}

	/// Check if this rectangle contains a point (boundaries count).
	#[inline]
	pub fn contains_point(&self, point: DVec2) -> bool {
		point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
	}

	/// Check if `other` lies entirely inside this rectangle.
	#[inline]
	pub fn contains(&self, other: &Aabb2) -> bool {
		other.min.x >= self.min.x
			&& other.max.x <= self.max.x
			&& other.min.y >= self.min.y
			&& other.max.y <= self.max.y
	}

	/// Get the size (max - min).
	#[inline]
	pub fn size(&self) -> DVec2 {
		self.max - self.min
	}

	/// Get half of the size.
	#[inline]
	pub fn half_extents(&self) -> DVec2 {
		self.size() * 0.5
	}

	/// Get the center.
	#[inline]
	pub fn center(&self) -> DVec2 {
		(self.min + self.max) * 0.5
	}

	/// Largest distance from the origin to any corner.
	#[inline]
	pub fn max_corner_distance(&self) -> f64 {
		let far = self.min.abs().max(self.max.abs());
		far.length()
	}
}
