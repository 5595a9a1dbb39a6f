//! TilingConfig - gamma, colors, zone margins and worker limits.

use std::time::Duration;

use crate::constants::{COMFORT_MARGIN, GENERATION_MARGIN};
use crate::error::ConfigError;
use crate::types::Gamma;

/// Gamma used when none is supplied.
///
/// Equal offsets summing to 1 give the classic Penrose tiling.
pub const DEFAULT_GAMMA: Gamma = [0.2; 5];

/// How long `shutdown` waits for the worker thread by default.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// Kite and dart colors forwarded to the shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePalette {
	/// Thick rhombus RGB.
	pub kite: [f32; 3],
	/// Thin rhombus RGB.
	pub dart: [f32; 3],
}

impl TilePalette {
	pub const DEFAULT: Self = Self {
		kite: [0.95, 0.76, 0.30],
		dart: [0.20, 0.38, 0.62],
	};

	/// Two RGBA rows (kite, then dart) with alpha 1.
	pub fn uniforms(&self) -> [f32; 8] {
		let [kr, kg, kb] = self.kite;
		let [dr, dg, db] = self.dart;
		[kr, kg, kb, 1.0, dr, dg, db, 1.0]
	}
}

impl Default for TilePalette {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Configuration for a [`TilingManager`](crate::TilingManager).
#[derive(Clone, Debug, PartialEq)]
pub struct TilingConfig {
	/// Per-family grid offsets.
	pub gamma: Gamma,
	/// Tile colors.
	pub palette: TilePalette,
	/// Viewport expansion for generation (0.30 = 30% per axis).
	pub generation_margin: f64,
	/// Viewport expansion the camera may pan within before regenerating.
	/// Must be below `generation_margin`.
	pub comfort_margin: f64,
	/// Upper bound on the shutdown join.
	pub shutdown_timeout: Duration,
}

impl TilingConfig {
	/// Check every field, returning the first problem found.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if let Some((index, &value)) = self.gamma.iter().enumerate().find(|(_, g)| !g.is_finite()) {
			return Err(ConfigError::NonFiniteGamma { index, value });
		}
		for (name, value) in [
			("generation_margin", self.generation_margin),
			("comfort_margin", self.comfort_margin),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::NegativeMargin { name, value });
			}
		}
		if self.comfort_margin >= self.generation_margin {
			return Err(ConfigError::MisorderedMargins {
				comfort: self.comfort_margin,
				generation: self.generation_margin,
			});
		}
		if self.shutdown_timeout.is_zero() {
			return Err(ConfigError::ZeroShutdownTimeout);
		}
		Ok(())
	}
}

impl Default for TilingConfig {
	fn default() -> Self {
		Self {
			gamma: DEFAULT_GAMMA,
			palette: TilePalette::DEFAULT,
			generation_margin: GENERATION_MARGIN,
			comfort_margin: COMFORT_MARGIN,
			shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
		}
	}
}
