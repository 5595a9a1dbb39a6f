//! Vertex → tiles lookup for pattern search.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::types::{Tile, TileIndex, VertexKey};

/// Maps each corner (at 3-decimal precision) to the tiles touching it.
///
/// The coarser precision tolerates rounding drift between tiles that were
/// computed from different grid crossings.
#[derive(Debug, Default)]
pub struct VertexIndex {
	buckets: HashMap<VertexKey, SmallVec<[TileIndex; 10]>>,
}

impl VertexIndex {
	/// Index every corner of every tile. Bucket order follows tile order.
	pub fn build(tiles: &[Tile]) -> Self {
		let mut buckets: HashMap<VertexKey, SmallVec<[TileIndex; 10]>> = HashMap::with_capacity(tiles.len());
		for (index, tile) in tiles.iter().enumerate() {
			for key in tile.index_keys() {
				let bucket = buckets.entry(key).or_default();
				if bucket.last() != Some(&index) {
					bucket.push(index);
				}
			}
		}
		Self { buckets }
	}

	/// Tiles touching the vertex, empty if none.
	#[inline]
	pub fn tiles_at(&self, key: VertexKey) -> &[TileIndex] {
		match self.buckets.get(&key) {
			Some(bucket) => bucket.as_slice(),
			None => &[],
		}
	}

	/// Number of distinct vertices.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	/// True when no tiles were indexed.
	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}
}
