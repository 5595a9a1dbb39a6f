//! Viewport-driven generation and comfort zones.
//!
//! ```text
//! ┌──────────────────────────────────────┐  generation = viewport × 1.30
//! │   ┌──────────────────────────────┐   │
//! │   │  ┌────────────────────────┐  │   │  comfort    = viewport × 1.15
//! │   │  │                        │  │   │
//! │   │  │        viewport        │  │   │  viewport half-height = 3 / zoom
//! │   │  │                        │  │   │  viewport half-width  = half-height × aspect
//! │   │  └────────────────────────┘  │   │
//! │   └──────────────────────────────┘   │
//! └──────────────────────────────────────┘
//! ```
//!
//! Tiles are generated for the outer zone. The camera may pan freely while
//! the viewport stays inside the comfort zone; once it leaves, a new
//! generation is requested. Because comfort sits strictly inside generation,
//! panning within comfort never exposes ungenerated area.

use glam::DVec2;

use crate::constants::{COMFORT_MARGIN, GENERATION_MARGIN, VIEWPORT_HALF_HEIGHT};
use crate::geometry::Aabb2;

/// Camera state supplied by the render driver each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
	/// Camera center in camera space.
	pub position: DVec2,
	/// Zoom factor (> 0). Larger values show less of the plane.
	pub zoom: f64,
	/// Viewport width / height.
	pub aspect: f64,
}

impl CameraState {
	/// Create a camera state.
	pub fn new(x: f64, y: f64, zoom: f64, aspect: f64) -> Self {
		debug_assert!(zoom > 0.0, "zoom must be positive");
		Self {
			position: DVec2::new(x, y),
			zoom,
			aspect,
		}
	}

	/// Visible rectangle.
	pub fn viewport(&self) -> Aabb2 {
		let half_height = VIEWPORT_HALF_HEIGHT / self.zoom;
		let half_width = half_height * self.aspect;
		Aabb2::from_center_half_extents(self.position, DVec2::new(half_width, half_height))
	}
}

/// Zones derived from one camera state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zones {
	/// Visible rectangle.
	pub viewport: Aabb2,
	/// Region tiles are generated for.
	pub generation: Aabb2,
	/// Region the viewport may move within before regenerating.
	pub comfort: Aabb2,
}

/// Derives zones from camera state and decides when to regenerate.
#[derive(Clone, Debug)]
pub struct ViewportZoneManager {
	generation_margin: f64,
	comfort_margin: f64,
	current: Option<Zones>,
}

impl ViewportZoneManager {
	/// Create a manager with explicit margins.
	///
	/// # Panics
	/// Debug-asserts `0 <= comfort_margin < generation_margin`.
	pub fn new(generation_margin: f64, comfort_margin: f64) -> Self {
		debug_assert!(
			comfort_margin >= 0.0 && comfort_margin < generation_margin,
			"comfort margin must be non-negative and below the generation margin"
		);
		Self {
			generation_margin,
			comfort_margin,
			current: None,
		}
	}

	/// Zones for `camera` without storing them.
	pub fn zones_for(&self, camera: &CameraState) -> Zones {
		let viewport = camera.viewport();
		Zones {
			viewport,
			generation: viewport.expanded(self.generation_margin),
			comfort: viewport.expanded(self.comfort_margin),
		}
	}

	/// Compute and store the zones for `camera`.
	pub fn compute_zones(&mut self, camera: &CameraState) -> Zones {
		let zones = self.zones_for(camera);
		self.current = Some(zones);
		zones
	}

	/// True if nothing has been computed yet, or the viewport for `camera`
	/// crosses any edge of the stored comfort zone.
	pub fn needs_regeneration(&self, camera: &CameraState) -> bool {
		match &self.current {
			None => true,
			Some(zones) => !zones.comfort.contains(&camera.viewport()),
		}
	}

	/// Forget the stored zones so the next check regenerates.
	pub fn invalidate(&mut self) {
		self.current = None;
	}

	/// Most recently computed zones.
	pub fn current(&self) -> Option<&Zones> {
		self.current.as_ref()
	}
}

impl Default for ViewportZoneManager {
	fn default() -> Self {
		Self::new(GENERATION_MARGIN, COMFORT_MARGIN)
	}
}

#[cfg(test)]
#[path = "zones_test.rs"]
mod zones_test;
