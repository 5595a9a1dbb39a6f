//! Star and starburst detection.
//!
//! ```text
//!   STAR: 5 kites (72°) around a vertex     STARBURST: 10 darts (36°) around a vertex
//!
//!            ╱╲                                      ╲  ╱
//!         ╲ ╱  ╲ ╱                                 ╲  ╲╱  ╱
//!          ●────●                                ────  ●  ────
//!         ╱ ╲  ╱ ╲                                 ╱  ╱╲  ╲
//!            ╲╱                                      ╱  ╲
//! ```
//!
//! A tile qualifies for a group when it has exactly two dart neighbors:
//! for a star kite these are its outer neighbors, for a starburst dart its
//! two neighbors inside the fan.
//!
//! Groups are claimed greedily in tile order (ascending key), so the result
//! is reproducible for a given tile set.

use glam::DVec2;
use smallvec::SmallVec;

use super::spatial_index::VertexIndex;
use crate::constants::{
	INDEX_SCALE, ISOLATED_BLEND, PATTERN_DART_NEIGHBORS, STARBURST_BLEND, STARBURST_SIZE, STAR_BLEND, STAR_SIZE,
};
use crate::types::{PatternType, Tile, TileIndex, VertexKey};

/// One detected star or starburst.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternGroup {
	/// `Star` or `Starburst`.
	pub kind: PatternType,
	/// Member tiles in tile order.
	pub members: SmallVec<[TileIndex; 10]>,
	/// Shared vertex in ribbon space (index precision).
	pub center: DVec2,
}

/// Everything the detector found in one tile set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternReport {
	/// Groups in discovery order: stars first, then starbursts.
	pub groups: Vec<PatternGroup>,
	/// Number of star groups.
	pub star_count: usize,
	/// Number of starburst groups.
	pub starburst_count: usize,
}

/// Detect stars and starbursts, then assign every tile its pattern type and
/// blend factor.
///
/// Requires neighbor lists to be built.
#[tracing::instrument(skip_all, name = "patterns::detect", fields(tiles = tiles.len()))]
pub fn detect_patterns(tiles: &mut [Tile]) -> PatternReport {
	let index = VertexIndex::build(tiles);
	let mut search = Search::new(tiles);

	let mut report = PatternReport::default();
	for start in 0..tiles.len() {
		if let Some(group) = search.find_star(tiles, &index, start) {
			report.star_count += 1;
			report.groups.push(group);
		}
	}
	for start in 0..tiles.len() {
		if let Some(group) = search.find_starburst(tiles, &index, start) {
			report.starburst_count += 1;
			report.groups.push(group);
		}
	}

	apply_classification(tiles, &report);
	report
}

/// Per-run qualification flags and claims.
struct Search {
	star_ok: Vec<bool>,
	burst_ok: Vec<bool>,
	claimed: Vec<bool>,
}

impl Search {
	fn new(tiles: &[Tile]) -> Self {
		let dart_neighbors: Vec<usize> = tiles
			.iter()
			.map(|tile| tile.neighbors.iter().filter(|&&n| !tiles[n].is_kite).count())
			.collect();

		Self {
			star_ok: tiles
				.iter()
				.zip(&dart_neighbors)
				.map(|(tile, &darts)| tile.is_kite && darts == PATTERN_DART_NEIGHBORS)
				.collect(),
			burst_ok: tiles
				.iter()
				.zip(&dart_neighbors)
				.map(|(tile, &darts)| !tile.is_kite && darts == PATTERN_DART_NEIGHBORS)
				.collect(),
			claimed: vec![false; tiles.len()],
		}
	}

	#[inline]
	fn star_candidate(&self, index: TileIndex) -> bool {
		self.star_ok[index] && !self.claimed[index]
	}

	#[inline]
	fn burst_candidate(&self, index: TileIndex) -> bool {
		self.burst_ok[index] && !self.claimed[index]
	}

	/// Try to grow a star from `start` by pairing it with two of its
	/// qualifying kite neighbors.
	fn find_star(&mut self, tiles: &[Tile], index: &VertexIndex, start: TileIndex) -> Option<PatternGroup> {
		if !self.star_candidate(start) {
			return None;
		}

		let mates: SmallVec<[TileIndex; 4]> = tiles[start]
			.neighbors
			.iter()
			.copied()
			.filter(|&n| self.star_candidate(n))
			.collect();

		for (i, &first) in mates.iter().enumerate() {
			for &second in &mates[i + 1..] {
				let Some(center) = common_vertex(tiles, &[start, first, second]) else {
					continue;
				};
				let members: SmallVec<[TileIndex; 10]> = index
					.tiles_at(center)
					.iter()
					.copied()
					.filter(|&t| self.star_candidate(t))
					.collect();
				if members.len() == STAR_SIZE {
					return Some(self.claim(PatternType::Star, members, center));
				}
			}
		}

		None
	}

	/// Try to grow a starburst from `start` and all of its qualifying dart
	/// neighbors.
	fn find_starburst(&mut self, tiles: &[Tile], index: &VertexIndex, start: TileIndex) -> Option<PatternGroup> {
		if !self.burst_candidate(start) {
			return None;
		}

		let mut candidates: SmallVec<[TileIndex; 5]> = SmallVec::new();
		candidates.push(start);
		candidates.extend(tiles[start].neighbors.iter().copied().filter(|&n| self.burst_candidate(n)));
		if candidates.len() < 3 {
			return None;
		}

		let center = common_vertex(tiles, &candidates)?;
		let members: SmallVec<[TileIndex; 10]> = index
			.tiles_at(center)
			.iter()
			.copied()
			.filter(|&t| self.burst_candidate(t))
			.collect();
		if members.len() == STARBURST_SIZE {
			return Some(self.claim(PatternType::Starburst, members, center));
		}

		None
	}

	fn claim(&mut self, kind: PatternType, members: SmallVec<[TileIndex; 10]>, center: VertexKey) -> PatternGroup {
		for &member in &members {
			self.claimed[member] = true;
		}
		PatternGroup {
			kind,
			members,
			center: center.to_point(INDEX_SCALE),
		}
	}
}

/// First corner of `group[0]` (in winding order) that every other tile in
/// `group` also has, at index precision.
fn common_vertex(tiles: &[Tile], group: &[TileIndex]) -> Option<VertexKey> {
	let (&first, rest) = group.split_first()?;
	let others: SmallVec<[[VertexKey; 4]; 4]> = rest.iter().map(|&t| tiles[t].index_keys()).collect();

	tiles[first]
		.index_keys()
		.into_iter()
		.find(|key| others.iter().all(|keys| keys.contains(key)))
}

/// Write pattern type and blend factor onto every tile.
fn apply_classification(tiles: &mut [Tile], report: &PatternReport) {
	let mut membership = vec![PatternType::Normal; tiles.len()];
	for group in &report.groups {
		for &member in &group.members {
			membership[member] = group.kind;
		}
	}

	let blends: Vec<f32> = tiles
		.iter()
		.zip(&membership)
		.map(|(tile, kind)| match kind {
			PatternType::Star => STAR_BLEND,
			PatternType::Starburst => STARBURST_BLEND,
			PatternType::Normal => neighbor_blend(tiles, tile),
		})
		.collect();

	for ((tile, kind), blend) in tiles.iter_mut().zip(membership).zip(blends) {
		tile.pattern = kind;
		tile.blend_factor = blend;
	}
}

/// Share of kite neighbors, or [`ISOLATED_BLEND`] without neighbors.
fn neighbor_blend(tiles: &[Tile], tile: &Tile) -> f32 {
	if tile.neighbors.is_empty() {
		return ISOLATED_BLEND;
	}
	let kites = tile.neighbors.iter().filter(|&&n| tiles[n].is_kite).count();
	kites as f32 / tile.neighbors.len() as f32
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod detector_test;
