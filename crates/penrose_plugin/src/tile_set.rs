//! TileSet - immutable snapshot of one generation pass.

use std::collections::HashMap;

use crate::geometry::{Aabb2, RibbonTransform};
use crate::patterns::{PatternGroup, PatternReport};
use crate::pipeline::GenerationStats;
use crate::types::{Gamma, Tile, TileIndex, TileKey};
use crate::zones::Zones;

/// Tiles, adjacency and patterns produced for one set of zones.
///
/// Built wholesale on the worker thread and never mutated after being
/// published. Tiles are stored in ascending key order; neighbor lists and
/// pattern groups refer to positions in that order.
#[derive(Debug)]
pub struct TileSet {
	tiles: Vec<Tile>,
	lookup: HashMap<TileKey, TileIndex>,
	zones: Zones,
	gamma: Gamma,
	transform: RibbonTransform,
	patterns: PatternReport,
	stats: GenerationStats,
	epoch: u64,
}

impl TileSet {
	pub(crate) fn new(
		tiles: Vec<Tile>,
		zones: Zones,
		gamma: Gamma,
		patterns: PatternReport,
		stats: GenerationStats,
		epoch: u64,
	) -> Self {
		let lookup = tiles.iter().enumerate().map(|(index, tile)| (tile.key, index)).collect();
		Self {
			tiles,
			lookup,
			zones,
			gamma,
			transform: RibbonTransform::new(&gamma),
			patterns,
			stats,
			epoch,
		}
	}

	/// Tiles in ascending key order.
	#[inline]
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.tiles.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	/// Position of the tile with `key`, if generated.
	#[inline]
	pub fn index_of(&self, key: &TileKey) -> Option<TileIndex> {
		self.lookup.get(key).copied()
	}

	/// Tile with `key`, if generated.
	#[inline]
	pub fn get(&self, key: &TileKey) -> Option<&Tile> {
		self.index_of(key).map(|index| &self.tiles[index])
	}

	/// Zones this set was generated for.
	#[inline]
	pub fn zones(&self) -> &Zones {
		&self.zones
	}

	/// Region tiles were generated for.
	#[inline]
	pub fn generation_bounds(&self) -> Aabb2 {
		self.zones.generation
	}

	/// Region the viewport could move within when this set was requested.
	#[inline]
	pub fn comfort_bounds(&self) -> Aabb2 {
		self.zones.comfort
	}

	#[inline]
	pub fn gamma(&self) -> &Gamma {
		&self.gamma
	}

	/// Ribbon ↔ camera mapping for this set's gamma.
	#[inline]
	pub fn transform(&self) -> &RibbonTransform {
		&self.transform
	}

	/// Detected stars and starbursts.
	#[inline]
	pub fn pattern_groups(&self) -> &[PatternGroup] {
		&self.patterns.groups
	}

	#[inline]
	pub fn star_count(&self) -> usize {
		self.patterns.star_count
	}

	#[inline]
	pub fn starburst_count(&self) -> usize {
		self.patterns.starburst_count
	}

	/// Counts and timings from the pass that built this set.
	#[inline]
	pub fn stats(&self) -> &GenerationStats {
		&self.stats
	}

	/// Request epoch, increasing with every accepted request.
	#[inline]
	pub fn epoch(&self) -> u64 {
		self.epoch
	}
}
