//! Pentagrid (de Bruijn) tile generation.
//!
//! Five families of parallel lines, family `k` running perpendicular to ζ_k
//! and offset by γ_k:
//!
//! ```text
//!   family k:  { z : Re(z·conj(ζ_k)) + γ_k = n },  n ∈ ℤ
//! ```
//!
//! Every crossing of a line from family `r` with a line from family `s`
//! becomes one rhombus. Its corners are lattice points `Σ k_j·ζ_j`, where
//! `k_j` counts how many family-`j` lines lie below the crossing, with the
//! two crossing families stepped through `(kr, ks) … (kr+1, ks+1)`.
//!
//! ```text
//!        v3 ──────── v2          v0 = (kr,   ks)
//!       ╱           ╱            v1 = (kr+1, ks)
//!      ╱  (r,s)    ╱             v2 = (kr+1, ks+1)
//!    v0 ──────── v1              v3 = (kr,   ks+1)
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::DVec2;
use rayon::prelude::*;

use crate::constants::{round_point, GRID_FAMILIES, INDEX_PADDING, VERTEX_SCALE, ZETA};
use crate::geometry::{Aabb2, RibbonTransform};
use crate::types::{Gamma, Tile, TileKey};

/// Result of one [`generate`] call.
#[derive(Debug, Default)]
pub struct PentagridOutput {
	/// Tiles with at least one corner inside the bounds, in key order.
	pub tiles: BTreeMap<TileKey, Tile>,
	/// True if the cancellation flag stopped the scan early.
	pub cancelled: bool,
	/// Number of grid crossings evaluated.
	pub examined: usize,
}

/// Unordered family pairs `(r, s)` with `r < s`, in key order.
pub fn family_pairs() -> impl Iterator<Item = (usize, usize)> {
	(0..GRID_FAMILIES).flat_map(|r| ((r + 1)..GRID_FAMILIES).map(move |s| (r, s)))
}

/// Ribbon-space corners of the rhombus at the crossing of line `kr` of
/// family `r` with line `ks` of family `s`.
///
/// Requires `r < s < 5`, which keeps the denominator Im(ζ_{s-r}) away from
/// zero. Coordinates are rounded to 5 decimals.
pub fn rhombus_vertices(gamma: &Gamma, r: usize, s: usize, kr: i32, ks: i32) -> [DVec2; 4] {
	debug_assert!(r < s && s < GRID_FAMILIES, "family pair must satisfy r < s < 5");

	let zr = ZETA[r];
	let zs = ZETA[s];
	let w = zr * (ks as f64 - gamma[s]) - zs * (kr as f64 - gamma[r]);
	// Multiply by i, then divide by the real denominator.
	let crossing = DVec2::new(-w.y, w.x) / ZETA[s - r].y;

	let mut index = [0i64; GRID_FAMILIES];
	for (j, slot) in index.iter_mut().enumerate() {
		*slot = (crossing.dot(ZETA[j]) + gamma[j]).ceil() as i64;
	}

	let corners = [(kr, ks), (kr + 1, ks), (kr + 1, ks + 1), (kr, ks + 1)];
	let mut vertices = [DVec2::ZERO; 4];
	for (vertex, (a, b)) in vertices.iter_mut().zip(corners) {
		index[r] = a as i64;
		index[s] = b as i64;
		*vertex = round_point(lattice_point(&index), VERTEX_SCALE);
	}
	vertices
}

/// Ribbon-space point `Σ k_j·ζ_j`, summed in family order.
#[inline]
fn lattice_point(index: &[i64; GRID_FAMILIES]) -> DVec2 {
	index
		.iter()
		.zip(ZETA.iter())
		.fold(DVec2::ZERO, |acc, (k, zeta)| acc + *zeta * *k as f64)
}

/// Half-width of the symmetric line-index range needed to cover `bounds`.
///
/// Camera space tracks grid space to within about 1.3 units, so lines past
/// the farthest corner (plus the largest offset and a padding) cannot
/// contribute a corner inside the bounds.
pub fn index_extent(bounds: &Aabb2, gamma: &Gamma) -> i32 {
	let max_gamma = gamma.iter().fold(0.0f64, |acc, g| acc.max(g.abs()));
	(bounds.max_corner_distance() + max_gamma + INDEX_PADDING).ceil() as i32
}

/// Generate every tile with at least one camera-space corner inside
/// `bounds`.
///
/// The ten family pairs are scanned in parallel; the result is keyed, so
/// its order does not depend on scheduling. `cancel` is checked for every
/// crossing; once set, the scan stops and the partial map is returned with
/// `cancelled = true`.
pub fn generate(bounds: &Aabb2, gamma: &Gamma, cancel: &AtomicBool) -> PentagridOutput {
	let extent = index_extent(bounds, gamma);
	let transform = RibbonTransform::new(gamma);
	let pairs: Vec<(usize, usize)> = family_pairs().collect();

	let scans: Vec<FamilyScan> = pairs
		.into_par_iter()
		.map(|(r, s)| scan_family_pair(bounds, gamma, &transform, r, s, extent, cancel))
		.collect();

	let mut output = PentagridOutput::default();
	for scan in scans {
		output.cancelled |= scan.cancelled;
		output.examined += scan.examined;
		for tile in scan.tiles {
			// Keys are unique per pair, and pairs are disjoint.
			output.tiles.entry(tile.key).or_insert(tile);
		}
	}
	output
}

struct FamilyScan {
	tiles: Vec<Tile>,
	cancelled: bool,
	examined: usize,
}

fn scan_family_pair(
	bounds: &Aabb2,
	gamma: &Gamma,
	transform: &RibbonTransform,
	r: usize,
	s: usize,
	extent: i32,
	cancel: &AtomicBool,
) -> FamilyScan {
	let mut scan = FamilyScan {
		tiles: Vec::new(),
		cancelled: false,
		examined: 0,
	};

	'lines: for kr in -extent..=extent {
		for ks in -extent..=extent {
			if cancel.load(Ordering::Relaxed) {
				scan.cancelled = true;
				break 'lines;
			}
			scan.examined += 1;

			let vertices = rhombus_vertices(gamma, r, s, kr, ks);
			let visible = vertices
				.iter()
				.any(|v| bounds.contains_point(transform.ribbon_to_camera(*v)));
			if visible {
				scan.tiles.push(Tile::new(TileKey::new(r as u8, s as u8, kr, ks), vertices));
			}
		}
	}

	scan
}

#[cfg(test)]
#[path = "pentagrid_test.rs"]
mod pentagrid_test;
