//! Numeric conventions for pentagrid generation, adjacency and pattern search.
//!
//! # Coordinate Spaces
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        COORDINATE SPACES                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Grid space     intersection points z0 of the five line families        │
//! │                                                                         │
//! │  Ribbon space   tile vertices Σ k_j·ζ_j  (edge length 1)                │
//! │                 ≈ 2.5·z0 + shift                                        │
//! │                                                                         │
//! │  Camera space   p = (ribbon - shift) / 2.5   (edge length 0.4)          │
//! │                 tracks grid space to within ~1.3 units                  │
//! │                                                                         │
//! │  shift = Σ ζ_k·γ_k                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Rounding
//!
//! Vertices are rounded to 5 decimals as soon as they are computed so that
//! the same physical edge hashes identically from both tiles touching it.
//! Pattern search uses a coarser 3-decimal index. Both are expressed as
//! fixed-point integer keys (`coordinate * scale`, rounded) rather than float
//! keys.

use glam::DVec2;

/// Number of grid-line families in a pentagrid.
pub const GRID_FAMILIES: usize = 5;

/// The five fifth roots of unity, ζ_k = exp(2πik/5), as (re, im).
///
/// Written out instead of computed with `sin`/`cos` so conjugate pairs are
/// bit-exact mirrors on every platform.
pub const ZETA: [DVec2; GRID_FAMILIES] = [
	DVec2::new(1.0, 0.0),
	DVec2::new(0.309_016_994_374_947_45, 0.951_056_516_295_153_5),
	DVec2::new(-0.809_016_994_374_947_5, 0.587_785_252_292_473_1),
	DVec2::new(-0.809_016_994_374_947_5, -0.587_785_252_292_473_1),
	DVec2::new(0.309_016_994_374_947_45, -0.951_056_516_295_153_5),
];

/// Decimal places kept on generated ribbon-space vertices.
pub const VERTEX_DECIMALS: u32 = 5;

/// Fixed-point scale, `10^VERTEX_DECIMALS`.
pub const VERTEX_SCALE: f64 = 100_000.0;

/// Decimal places used by the pattern-search vertex index.
pub const INDEX_DECIMALS: u32 = 3;

/// Fixed-point scale, `10^INDEX_DECIMALS`.
pub const INDEX_SCALE: f64 = 1_000.0;

/// Ribbon-space units per camera-space unit.
pub const RIBBON_SCALE: f64 = 2.5;

/// Extra line indices generated past the farthest bounds corner.
///
/// Covers the gap between an intersection point and its tile's vertices.
pub const INDEX_PADDING: f64 = 2.0;

/// Viewport half-height at zoom 1.0, in camera units.
pub const VIEWPORT_HALF_HEIGHT: f64 = 3.0;

/// Default expansion of the viewport used for generation (per axis).
pub const GENERATION_MARGIN: f64 = 0.30;

/// Default expansion of the viewport that may be panned freely before
/// regeneration (per axis). Must stay below [`GENERATION_MARGIN`].
pub const COMFORT_MARGIN: f64 = 0.15;

/// Kites around a star vertex.
pub const STAR_SIZE: usize = 5;

/// Darts around a starburst vertex.
pub const STARBURST_SIZE: usize = 10;

/// Dart neighbors a tile must have to take part in either pattern.
pub const PATTERN_DART_NEIGHBORS: usize = 2;

/// Blend factor assigned to star members.
pub const STAR_BLEND: f32 = 0.3;

/// Blend factor assigned to starburst members.
pub const STARBURST_BLEND: f32 = 0.7;

/// Blend factor of a normal tile without neighbors.
pub const ISOLATED_BLEND: f32 = 0.5;

/// `f32` values per tile in the packed vertex buffer (4 corners × xy).
pub const VERTEX_FLOATS_PER_TILE: usize = 8;

/// `f32` values per tile in the packed attribute buffer.
pub const ATTRIBUTE_FLOATS_PER_TILE: usize = 8;

/// Attribute slot layout inside one tile's attribute block.
pub mod attribute_slot {
	pub const IS_KITE: usize = 0;
	pub const PATTERN: usize = 1;
	pub const BLEND: usize = 2;
	pub const SELECTED: usize = 3;
	pub const HOVERED: usize = 4;
	pub const ANIMATION_PHASE: usize = 5;
	pub const ANIMATION_KIND: usize = 6;
	pub const PSEUDO_ID: usize = 7;
}

/// Round a coordinate to the fixed-point grid defined by `scale`.
#[inline]
pub fn round_to_scale(value: f64, scale: f64) -> f64 {
	(value * scale).round() / scale
}

/// Round both components of a point to the fixed-point grid defined by
/// `scale`.
#[inline]
pub fn round_point(point: DVec2, scale: f64) -> DVec2 {
	DVec2::new(round_to_scale(point.x, scale), round_to_scale(point.y, scale))
}

/// Fixed-point integer value of a coordinate at `scale`.
#[inline]
pub fn quantize(value: f64, scale: f64) -> i64 {
	(value * scale).round() as i64
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
