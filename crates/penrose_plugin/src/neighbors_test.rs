use std::sync::atomic::AtomicBool;

use super::*;
use crate::geometry::Aabb2;
use crate::pentagrid::generate;
use crate::types::TileKey;

fn quad(key: TileKey, corners: [(f64, f64); 4]) -> Tile {
	Tile::new(key, corners.map(|(x, y)| DVec2::new(x, y)))
}

fn generated_tiles(gamma: [f64; 5]) -> Vec<Tile> {
	let bounds = Aabb2::new(DVec2::splat(-2.0), DVec2::splat(2.0));
	generate(&bounds, &gamma, &AtomicBool::new(false))
		.tiles
		.into_values()
		.collect()
}

#[test]
fn test_edge_key_ignores_direction() {
	let a = DVec2::new(0.30902, 0.95106);
	let b = DVec2::new(-0.5, 1.25);
	assert_eq!(edge_key(a, b), edge_key(b, a));
}

#[test]
fn test_edge_key_absorbs_float_noise() {
	let a = DVec2::new(0.30902, 0.95106);
	let b = DVec2::new(1.30902, 0.95106);
	assert_eq!(edge_key(a, b), edge_key(a + DVec2::splat(1e-12), b - DVec2::splat(1e-12)));
}

/// Two squares sharing the x = 1 edge, wound in opposite directions.
#[test]
fn test_shared_edge_links_both_ways() {
	let mut tiles = vec![
		quad(TileKey::new(0, 1, 0, 0), [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
		quad(TileKey::new(0, 1, 1, 0), [(1.0, 1.0), (2.0, 1.0), (2.0, 0.0), (1.0, 0.0)]),
	];

	let stats = build_neighbor_graph(&mut tiles);

	assert_eq!(tiles[0].neighbors.as_slice(), &[1]);
	assert_eq!(tiles[1].neighbors.as_slice(), &[0]);
	assert_eq!(stats.shared_edges, 1);
	assert_eq!(stats.boundary_edges, 6);
	assert_eq!(stats.anomalous_edges, 0);
}

#[test]
fn test_isolated_tile_has_no_neighbors() {
	let mut tiles = vec![quad(
		TileKey::new(0, 2, 0, 0),
		[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
	)];

	let stats = build_neighbor_graph(&mut tiles);

	assert!(tiles[0].neighbors.is_empty());
	assert_eq!(stats.boundary_edges, 4);
}

/// An edge claimed by three tiles is reported and left unlinked.
#[test]
fn test_overshared_edge_is_not_linked() {
	let mut tiles = vec![
		quad(TileKey::new(0, 1, 0, 0), [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
		quad(TileKey::new(0, 1, 1, 0), [(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]),
		quad(TileKey::new(0, 1, 2, 0), [(1.0, 1.0), (1.5, 2.0), (1.5, 0.5), (1.0, 0.0)]),
	];

	let stats = build_neighbor_graph(&mut tiles);

	assert_eq!(stats.anomalous_edges, 1);
	assert!(tiles.iter().all(|t| t.neighbors.is_empty()));
}

#[test]
fn test_rebuild_replaces_previous_links() {
	let mut tiles = vec![
		quad(TileKey::new(0, 1, 0, 0), [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
		quad(TileKey::new(0, 1, 1, 0), [(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]),
	];

	build_neighbor_graph(&mut tiles);
	build_neighbor_graph(&mut tiles);

	assert_eq!(tiles[0].neighbors.len(), 1);
	assert_eq!(tiles[1].neighbors.len(), 1);
}

#[test]
fn test_generated_neighbors_symmetric_and_bounded() {
	let mut tiles = generated_tiles([0.1, 0.25, -0.15, 0.3, -0.5]);
	let stats = build_neighbor_graph(&mut tiles);

	assert!(stats.shared_edges > 0);
	assert_eq!(stats.anomalous_edges, 0);

	for (index, tile) in tiles.iter().enumerate() {
		assert!(tile.neighbors.len() <= 4);
		for &other in &tile.neighbors {
			assert_ne!(other, index);
			assert!(
				tiles[other].neighbors.contains(&index),
				"{:?} lists {:?} but not vice versa",
				tile.key,
				tiles[other].key
			);
		}
	}
}

#[test]
fn test_generated_interior_tiles_fully_linked() {
	let mut tiles = generated_tiles([0.2; 5]);
	build_neighbor_graph(&mut tiles);

	let fully_linked = tiles.iter().filter(|t| t.neighbors.len() == 4).count();
	assert!(fully_linked > tiles.len() / 2);
}
