//! Core data types for pentagrid tiles.

use glam::DVec2;
use smallvec::SmallVec;

use crate::constants::{quantize, GRID_FAMILIES, INDEX_SCALE, VERTEX_SCALE};

/// Per-family grid offsets controlling the tiling phase.
pub type Gamma = [f64; GRID_FAMILIES];

/// Index of a tile inside its owning [`TileSet`](crate::TileSet) arena.
pub type TileIndex = usize;

/// Grid-index identity of a tile.
///
/// `(r, s)` pick two of the five line families (`r < s`), `(kr, ks)` the
/// line within each. Given a fixed gamma the key determines the geometry
/// exactly. The derived ordering is the canonical tile order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TileKey {
	/// First grid family (0..5).
	pub r: u8,
	/// Second grid family, always greater than `r`.
	pub s: u8,
	/// Line index within family `r`.
	pub kr: i32,
	/// Line index within family `s`.
	pub ks: i32,
}

impl TileKey {
	/// Create a new key.
	pub fn new(r: u8, s: u8, kr: i32, ks: i32) -> Self {
		debug_assert!(r < s && (s as usize) < GRID_FAMILIES, "tile families must satisfy r < s < 5");
		Self { r, s, kr, ks }
	}

	/// True when the two families are cyclically adjacent (`s - r` is 1 or 4).
	///
	/// Adjacent families cross at 72°, giving the thick rhombus.
	#[inline]
	pub fn is_kite(&self) -> bool {
		matches!((self.s as i32 - self.r as i32).rem_euclid(GRID_FAMILIES as i32), 1 | 4)
	}

	/// Stable pseudo-random identifier in `[0, 1)`.
	///
	/// Depends only on the key, so the same tile gets the same id in every
	/// generation and on every platform.
	pub fn pseudo_id(&self) -> f32 {
		let lines = ((self.kr as u32 as u64) << 32) | self.ks as u32 as u64;
		let families = (self.r as u64) * GRID_FAMILIES as u64 + self.s as u64;
		let hash = splitmix64(splitmix64(lines) ^ families);
		// 24 bits fit an f32 mantissa exactly, so the result never rounds up to 1.0.
		(hash >> 40) as f32 / (1u32 << 24) as f32
	}
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
	x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
	x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
	x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
	x ^ (x >> 31)
}

/// Fixed-point vertex identity used for hashing.
///
/// Float coordinates are never used as map keys directly; they are scaled
/// and rounded to integers first so equality is exact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexKey {
	pub x: i64,
	pub y: i64,
}

impl VertexKey {
	/// Quantize a point at the given fixed-point scale.
	#[inline]
	pub fn from_point(point: DVec2, scale: f64) -> Self {
		Self {
			x: quantize(point.x, scale),
			y: quantize(point.y, scale),
		}
	}

	/// Key at generation precision (edge hashing).
	#[inline]
	pub fn edge(point: DVec2) -> Self {
		Self::from_point(point, VERTEX_SCALE)
	}

	/// Key at pattern-index precision.
	#[inline]
	pub fn index(point: DVec2) -> Self {
		Self::from_point(point, INDEX_SCALE)
	}

	/// Point represented by this key at the given scale.
	#[inline]
	pub fn to_point(self, scale: f64) -> DVec2 {
		DVec2::new(self.x as f64 / scale, self.y as f64 / scale)
	}
}

/// Pattern classification of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatternType {
	/// Not part of any detected group.
	#[default]
	Normal,
	/// Member of a five-kite star.
	Star,
	/// Member of a ten-dart starburst.
	Starburst,
}

impl PatternType {
	/// Numeric code written into the attribute buffer.
	#[inline]
	pub fn code(self) -> f32 {
		match self {
			PatternType::Normal => 0.0,
			PatternType::Star => 1.0,
			PatternType::Starburst => 2.0,
		}
	}
}

/// Animation currently applied to a tile by the interaction layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationKind {
	#[default]
	None,
	Pulse,
	Flip,
	Ripple,
}

impl AnimationKind {
	/// Numeric code written into the attribute buffer.
	#[inline]
	pub fn code(self) -> f32 {
		match self {
			AnimationKind::None => 0.0,
			AnimationKind::Pulse => 1.0,
			AnimationKind::Flip => 2.0,
			AnimationKind::Ripple => 3.0,
		}
	}
}

/// Interaction state owned by the input layer, not by generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileInteraction {
	pub selected: bool,
	pub hovered: bool,
	/// Animation progress, nominally in `[0, 1]`.
	pub animation_phase: f32,
	pub animation: AnimationKind,
}

/// A single rhombus of the tiling.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
	/// Grid identity.
	pub key: TileKey,
	/// Ribbon-space corners in winding order, rounded to 5 decimals.
	pub vertices: [DVec2; 4],
	/// Thick rhombus flag, derived from the key.
	pub is_kite: bool,
	/// Edge-sharing neighbors, filled by the neighbor graph builder.
	pub neighbors: SmallVec<[TileIndex; 4]>,
	/// Pattern classification, filled by the pattern detector.
	pub pattern: PatternType,
	/// Shading blend factor in `[0, 1]`, filled by the pattern detector.
	pub blend_factor: f32,
}

impl Tile {
	/// Create an unlinked, unclassified tile.
	pub fn new(key: TileKey, vertices: [DVec2; 4]) -> Self {
		Self {
			key,
			vertices,
			is_kite: key.is_kite(),
			neighbors: SmallVec::new(),
			pattern: PatternType::Normal,
			blend_factor: 0.0,
		}
	}

	/// Ribbon-space centroid (mean of the four corners).
	#[inline]
	pub fn centroid(&self) -> DVec2 {
		(self.vertices[0] + self.vertices[1] + self.vertices[2] + self.vertices[3]) * 0.25
	}

	/// Edges as `(start, end)` corner pairs, in winding order.
	#[inline]
	pub fn edges(&self) -> [(DVec2, DVec2); 4] {
		let v = &self.vertices;
		[(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
	}

	/// Corner keys at pattern-index precision.
	#[inline]
	pub fn index_keys(&self) -> [VertexKey; 4] {
		self.vertices.map(VertexKey::index)
	}
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
