use super::*;

#[test]
fn test_is_kite_from_family_difference() {
	for r in 0..5u8 {
		for s in (r + 1)..5u8 {
			let key = TileKey::new(r, s, 0, 0);
			let expected = matches!(s - r, 1 | 4);
			assert_eq!(key.is_kite(), expected, "r={} s={}", r, s);
		}
	}
}

#[test]
fn test_is_kite_ignores_line_indices() {
	assert!(TileKey::new(0, 1, -7, 3).is_kite());
	assert!(TileKey::new(0, 4, 12, -12).is_kite());
	assert!(!TileKey::new(0, 2, 5, 5).is_kite());
	assert!(!TileKey::new(1, 4, -1, 0).is_kite());
}

#[test]
fn test_key_order_is_family_major() {
	let mut keys = vec![
		TileKey::new(1, 2, -3, 0),
		TileKey::new(0, 3, 5, 5),
		TileKey::new(0, 1, 2, -1),
		TileKey::new(0, 1, -2, 4),
	];
	keys.sort();
	assert_eq!(keys[0], TileKey::new(0, 1, -2, 4));
	assert_eq!(keys[1], TileKey::new(0, 1, 2, -1));
	assert_eq!(keys[2], TileKey::new(0, 3, 5, 5));
	assert_eq!(keys[3], TileKey::new(1, 2, -3, 0));
}

#[test]
fn test_pseudo_id_in_unit_range() {
	for r in 0..5u8 {
		for s in (r + 1)..5u8 {
			for kr in -20..20 {
				for ks in [-50, -1, 0, 1, 50] {
					let id = TileKey::new(r, s, kr, ks).pseudo_id();
					assert!((0.0..1.0).contains(&id), "pseudo id {} out of range", id);
				}
			}
		}
	}
}

#[test]
fn test_pseudo_id_stable_and_distinct() {
	let a = TileKey::new(0, 2, 3, -4);
	let b = TileKey::new(0, 2, -4, 3);
	let c = TileKey::new(1, 2, 3, -4);

	assert_eq!(a.pseudo_id(), TileKey::new(0, 2, 3, -4).pseudo_id());
	assert_ne!(a.pseudo_id(), b.pseudo_id());
	assert_ne!(a.pseudo_id(), c.pseudo_id());
}

#[test]
fn test_vertex_key_absorbs_rounding_noise() {
	let p = DVec2::new(0.309_016_994_374_947_45, -1.118_033_988_749_895);
	let q = p + DVec2::splat(1e-9);
	assert_eq!(VertexKey::edge(p), VertexKey::edge(q));
	assert_eq!(VertexKey::index(p), VertexKey::index(q));
}

#[test]
fn test_vertex_key_roundtrip_point() {
	let key = VertexKey::edge(DVec2::new(1.234_56, -0.5));
	let back = key.to_point(VERTEX_SCALE);
	assert!((back - DVec2::new(1.234_56, -0.5)).length() < 1e-9);
}

#[test]
fn test_tile_new_derives_kite() {
	let tile = Tile::new(TileKey::new(2, 3, 0, 0), [DVec2::ZERO; 4]);
	assert!(tile.is_kite);
	assert!(tile.neighbors.is_empty());
	assert_eq!(tile.pattern, PatternType::Normal);
}

#[test]
fn test_tile_centroid_and_edges() {
	let tile = Tile::new(
		TileKey::new(0, 2, 0, 0),
		[
			DVec2::new(0.0, 0.0),
			DVec2::new(2.0, 0.0),
			DVec2::new(2.0, 2.0),
			DVec2::new(0.0, 2.0),
		],
	);
	assert_eq!(tile.centroid(), DVec2::new(1.0, 1.0));

	let edges = tile.edges();
	assert_eq!(edges[0], (DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)));
	assert_eq!(edges[3], (DVec2::new(0.0, 2.0), DVec2::new(0.0, 0.0)));
}

#[test]
fn test_codes_are_distinct() {
	assert_eq!(PatternType::Normal.code(), 0.0);
	assert_eq!(PatternType::Star.code(), 1.0);
	assert_eq!(PatternType::Starburst.code(), 2.0);
	assert_eq!(AnimationKind::None.code(), 0.0);
	assert_eq!(AnimationKind::Ripple.code(), 3.0);
}
