use super::*;

#[test]
fn test_zeta_on_unit_circle() {
	for (k, z) in ZETA.iter().enumerate() {
		assert!(
			(z.length() - 1.0).abs() < 1e-12,
			"zeta[{}] should have unit length",
			k
		);
	}
}

#[test]
fn test_zeta_matches_trigonometry() {
	for (k, z) in ZETA.iter().enumerate() {
		let angle = std::f64::consts::TAU * k as f64 / 5.0;
		assert!((z.x - angle.cos()).abs() < 1e-12);
		assert!((z.y - angle.sin()).abs() < 1e-12);
	}
}

#[test]
fn test_zeta_sums_to_zero() {
	let sum = ZETA.iter().fold(DVec2::ZERO, |acc, z| acc + *z);
	assert!(sum.length() < 1e-12);
}

/// The intersection denominator Im(ζ_{s-r}) is non-zero for every r < s.
#[test]
fn test_intersection_denominator_nonzero() {
	for diff in 1..GRID_FAMILIES {
		assert!(ZETA[diff].y.abs() > 0.5);
	}
}

#[test]
fn test_comfort_inside_generation() {
	assert!(COMFORT_MARGIN < GENERATION_MARGIN);
}

#[test]
fn test_round_to_scale() {
	assert_eq!(round_to_scale(0.123_456_7, VERTEX_SCALE), 0.123_46);
	assert_eq!(round_to_scale(-0.123_454, VERTEX_SCALE), -0.123_45);
	assert_eq!(round_to_scale(1.000_4, INDEX_SCALE), 1.0);
}

#[test]
fn test_quantize_agrees_with_rounding() {
	let a = 0.309_016_994;
	let b = round_to_scale(a, VERTEX_SCALE);
	assert_eq!(quantize(a, VERTEX_SCALE), quantize(b, VERTEX_SCALE));
	assert_eq!(quantize(a, VERTEX_SCALE), 30_902);
}

#[test]
fn test_attribute_slots_fit_block() {
	assert!(attribute_slot::PSEUDO_ID < ATTRIBUTE_FLOATS_PER_TILE);
}

#[test]
fn test_scales_match_decimals() {
	assert_eq!(VERTEX_SCALE, 10f64.powi(VERTEX_DECIMALS as i32));
	assert_eq!(INDEX_SCALE, 10f64.powi(INDEX_DECIMALS as i32));
}
