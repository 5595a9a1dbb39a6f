//! Edge-sharing adjacency between generated tiles.
//!
//! Every tile contributes four edges. An edge is keyed by its two corners in
//! fixed-point form, ordered lexicographically, so the same physical edge
//! produces the same key from either side regardless of winding.
//!
//! ```text
//!   touching tiles │ meaning
//!   ───────────────┼──────────────────────────────────
//!          1       │ boundary of the generated region
//!          2       │ the two tiles become neighbors
//!         >2       │ anomaly: logged, left unlinked
//! ```

use std::collections::HashMap;

use glam::DVec2;
use smallvec::SmallVec;

use crate::types::{Tile, TileIndex, VertexKey};

/// Direction-independent edge identity.
pub type EdgeKey = (VertexKey, VertexKey);

/// Edge counts observed while linking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborStats {
	/// Edges touched by exactly two tiles.
	pub shared_edges: usize,
	/// Edges touched by a single tile.
	pub boundary_edges: usize,
	/// Edges touched by more than two tiles.
	pub anomalous_edges: usize,
}

/// Canonical key for the edge between `a` and `b`.
#[inline]
pub fn edge_key(a: DVec2, b: DVec2) -> EdgeKey {
	let ka = VertexKey::edge(a);
	let kb = VertexKey::edge(b);
	if ka <= kb {
		(ka, kb)
	} else {
		(kb, ka)
	}
}

/// Canonical keys for all four edges of a tile, in winding order.
#[inline]
pub fn tile_edge_keys(tile: &Tile) -> [EdgeKey; 4] {
	tile.edges().map(|(a, b)| edge_key(a, b))
}

/// Link tiles that share an edge, replacing any existing neighbor lists.
///
/// Neighbor order follows tile order and then edge order, so it does not
/// depend on hash iteration.
#[tracing::instrument(skip_all, name = "neighbors::build", fields(tiles = tiles.len()))]
pub fn build_neighbor_graph(tiles: &mut [Tile]) -> NeighborStats {
	let edge_keys: Vec<[EdgeKey; 4]> = tiles.iter().map(tile_edge_keys).collect();

	let mut touching: HashMap<EdgeKey, SmallVec<[TileIndex; 2]>> = HashMap::with_capacity(tiles.len() * 2);
	for (index, keys) in edge_keys.iter().enumerate() {
		for key in keys {
			touching.entry(*key).or_default().push(index);
		}
	}

	let mut stats = NeighborStats::default();
	for (key, owners) in &touching {
		match owners.len() {
			1 => stats.boundary_edges += 1,
			2 => stats.shared_edges += 1,
			count => {
				stats.anomalous_edges += 1;
				tracing::warn!(
					edge = ?key,
					count,
					tiles = ?owners.iter().map(|&i| tiles[i].key).collect::<Vec<_>>(),
					"edge shared by more than two tiles; leaving it unlinked"
				);
			}
		}
	}

	for (index, keys) in edge_keys.iter().enumerate() {
		let tile = &mut tiles[index];
		tile.neighbors.clear();
		for key in keys {
			let Some(owners) = touching.get(key) else {
				continue;
			};
			if owners.len() != 2 {
				continue;
			}
			let other = if owners[0] == index { owners[1] } else { owners[0] };
			if other != index && !tile.neighbors.contains(&other) {
				tile.neighbors.push(other);
			}
		}
	}

	stats
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
