//! Ribbon-space ↔ camera-space conversion.
//!
//! ```text
//! camera = (ribbon - shift) / 2.5
//! ribbon = camera * 2.5 + shift
//! shift  = Σ ζ_k·γ_k
//! ```

use glam::DVec2;

use crate::constants::{RIBBON_SCALE, ZETA};
use crate::types::Gamma;

/// Ribbon-space offset introduced by the gamma vector.
pub fn shift_offset(gamma: &Gamma) -> DVec2 {
	ZETA.iter()
		.zip(gamma.iter())
		.fold(DVec2::ZERO, |acc, (zeta, g)| acc + *zeta * *g)
}

/// Affine map between ribbon and camera space for one gamma vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonTransform {
	shift: DVec2,
}

impl RibbonTransform {
	/// Build the transform for a gamma vector.
	pub fn new(gamma: &Gamma) -> Self {
		Self {
			shift: shift_offset(gamma),
		}
	}

	/// The ribbon-space shift subtracted before scaling.
	#[inline]
	pub fn shift(&self) -> DVec2 {
		self.shift
	}

	/// Convert a ribbon-space vertex to camera space.
	#[inline]
	pub fn ribbon_to_camera(&self, ribbon: DVec2) -> DVec2 {
		(ribbon - self.shift) / RIBBON_SCALE
	}

	/// Convert a camera-space point to ribbon space.
	#[inline]
	pub fn camera_to_ribbon(&self, camera: DVec2) -> DVec2 {
		camera * RIBBON_SCALE + self.shift
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::{round_point, VERTEX_SCALE};

	#[test]
	fn test_uniform_gamma_has_no_shift() {
		// Σ ζ_k = 0, so equal offsets cancel.
		let shift = shift_offset(&[0.2; 5]);
		assert!(shift.length() < 1e-12);
	}

	#[test]
	fn test_single_family_shift() {
		let shift = shift_offset(&[0.0, 0.5, 0.0, 0.0, 0.0]);
		assert!((shift - ZETA[1] * 0.5).length() < 1e-15);
	}

	#[test]
	fn test_roundtrip_within_tolerance() {
		let gamma = [0.1, 0.25, -0.15, 0.3, -0.5];
		let transform = RibbonTransform::new(&gamma);

		for v in [
			DVec2::new(0.0, 0.0),
			DVec2::new(1.30902, -0.95106),
			DVec2::new(-12.5, 40.25),
		] {
			let back = transform.camera_to_ribbon(transform.ribbon_to_camera(v));
			assert_eq!(round_point(back, VERTEX_SCALE), round_point(v, VERTEX_SCALE));
		}
	}

	#[test]
	fn test_scale_factor() {
		let transform = RibbonTransform::new(&[0.0; 5]);
		assert_eq!(transform.ribbon_to_camera(DVec2::new(2.5, -5.0)), DVec2::new(1.0, -2.0));
	}
}
