//! Flat GPU-ready arrays for a published [`TileSet`].
//!
//! # Layout
//!
//! ```text
//! vertices   [x0 y0 x1 y1 x2 y2 x3 y3] per tile   camera space, f32
//! attributes [kite pattern blend selected hovered phase anim id] per tile
//! ```
//!
//! A full repack happens once per published set. Interaction changes
//! rewrite only slots 3..=6 of one tile and widen the dirty range.

use std::ops::Range;

use glam::DVec2;

use crate::config::TilePalette;
use crate::constants::{attribute_slot, ATTRIBUTE_FLOATS_PER_TILE, VERTEX_FLOATS_PER_TILE};
use crate::tile_set::TileSet;
use crate::types::{TileIndex, TileInteraction};

/// Portion of the attribute array changed since the last upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirtyRegion {
	/// Both arrays must be re-uploaded.
	Full,
	/// Only these attribute elements (f32 indices) changed.
	Range(Range<usize>),
}

impl DirtyRegion {
	/// Smallest region covering both.
	pub fn union(self, other: DirtyRegion) -> DirtyRegion {
		match (self, other) {
			(DirtyRegion::Range(a), DirtyRegion::Range(b)) => DirtyRegion::Range(a.start.min(b.start)..a.end.max(b.end)),
			_ => DirtyRegion::Full,
		}
	}
}

/// Packed vertex and attribute arrays plus per-tile interaction state.
#[derive(Clone, Debug, Default)]
pub struct TileBuffers {
	vertices: Vec<f32>,
	attributes: Vec<f32>,
	interactions: Vec<TileInteraction>,
	palette: TilePalette,
	dirty: Option<DirtyRegion>,
}

impl TileBuffers {
	pub fn new(palette: TilePalette) -> Self {
		Self {
			palette,
			..Default::default()
		}
	}

	/// Rewrite both arrays for `set` and reset interaction state.
	#[tracing::instrument(skip_all, name = "buffers::pack", fields(tiles = set.len()))]
	pub fn pack(&mut self, set: &TileSet) {
		let transform = set.transform();

		self.vertices.clear();
		self.vertices.reserve(set.len() * VERTEX_FLOATS_PER_TILE);
		self.attributes.clear();
		self.attributes.reserve(set.len() * ATTRIBUTE_FLOATS_PER_TILE);
		self.interactions.clear();
		self.interactions.resize(set.len(), TileInteraction::default());

		for tile in set.tiles() {
			for vertex in tile.vertices {
				let camera = transform.ribbon_to_camera(vertex);
				self.vertices.push(camera.x as f32);
				self.vertices.push(camera.y as f32);
			}

			let mut block = [0.0f32; ATTRIBUTE_FLOATS_PER_TILE];
			block[attribute_slot::IS_KITE] = flag(tile.is_kite);
			block[attribute_slot::PATTERN] = tile.pattern.code();
			block[attribute_slot::BLEND] = tile.blend_factor;
			block[attribute_slot::PSEUDO_ID] = tile.key.pseudo_id();
			write_interaction(&mut block, &TileInteraction::default());
			self.attributes.extend_from_slice(&block);
		}

		self.dirty = Some(DirtyRegion::Full);
	}

	/// Rewrite the interaction slots of one tile.
	///
	/// Returns `false` if `index` is out of range.
	pub fn update_interaction(&mut self, index: TileIndex, interaction: TileInteraction) -> bool {
		let Some(state) = self.interactions.get_mut(index) else {
			return false;
		};
		*state = interaction;

		let base = index * ATTRIBUTE_FLOATS_PER_TILE;
		let block = &mut self.attributes[base..base + ATTRIBUTE_FLOATS_PER_TILE];
		write_interaction(block, &interaction);

		let range = DirtyRegion::Range(base + attribute_slot::SELECTED..base + attribute_slot::ANIMATION_KIND + 1);
		self.dirty = Some(match self.dirty.take() {
			Some(existing) => existing.union(range),
			None => range,
		});
		true
	}

	/// Current interaction state of a tile.
	pub fn interaction(&self, index: TileIndex) -> Option<&TileInteraction> {
		self.interactions.get(index)
	}

	/// Number of packed tiles.
	#[inline]
	pub fn tile_count(&self) -> usize {
		self.interactions.len()
	}

	#[inline]
	pub fn vertices(&self) -> &[f32] {
		&self.vertices
	}

	#[inline]
	pub fn attributes(&self) -> &[f32] {
		&self.attributes
	}

	/// Vertex array as raw bytes for upload.
	#[inline]
	pub fn vertex_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.vertices)
	}

	/// Attribute array as raw bytes for upload.
	#[inline]
	pub fn attribute_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.attributes)
	}

	#[inline]
	pub fn is_dirty(&self) -> bool {
		self.dirty.is_some()
	}

	/// Take the pending dirty region, leaving the buffers clean.
	#[inline]
	pub fn take_dirty(&mut self) -> Option<DirtyRegion> {
		self.dirty.take()
	}

	#[inline]
	pub fn palette(&self) -> &TilePalette {
		&self.palette
	}

	pub fn set_palette(&mut self, palette: TilePalette) {
		self.palette = palette;
	}

	/// Kite and dart colors as two RGBA rows.
	#[inline]
	pub fn palette_uniforms(&self) -> [f32; 8] {
		self.palette.uniforms()
	}
}

#[inline]
fn flag(value: bool) -> f32 {
	if value {
		1.0
	} else {
		0.0
	}
}

fn write_interaction(block: &mut [f32], interaction: &TileInteraction) {
	block[attribute_slot::SELECTED] = flag(interaction.selected);
	block[attribute_slot::HOVERED] = flag(interaction.hovered);
	block[attribute_slot::ANIMATION_PHASE] = interaction.animation_phase;
	block[attribute_slot::ANIMATION_KIND] = interaction.animation.code();
}

/// First tile (in tile order) whose camera-space quad contains `point`.
///
/// Points on an edge count as inside.
pub fn hit_test(set: &TileSet, point: DVec2) -> Option<TileIndex> {
	let transform = set.transform();
	set.tiles()
		.iter()
		.position(|tile| quad_contains(&tile.vertices.map(|v| transform.ribbon_to_camera(v)), point))
}

/// Convex-quad containment: the edge cross products never change sign.
fn quad_contains(quad: &[DVec2; 4], point: DVec2) -> bool {
	let mut positive = false;
	let mut negative = false;
	for i in 0..4 {
		let a = quad[i];
		let b = quad[(i + 1) % 4];
		let cross = (b - a).perp_dot(point - a);
		positive |= cross > 0.0;
		negative |= cross < 0.0;
	}
	!(positive && negative)
}

#[cfg(test)]
#[path = "buffers_test.rs"]
mod buffers_test;
