//! Generation pipeline: pentagrid → neighbors → patterns.
//!
//! Runs on the worker thread and builds every structure locally; nothing is
//! shared with the consumer until the finished [`TileSet`] is sent.

use std::sync::atomic::{AtomicBool, Ordering};

use web_time::Instant;

use crate::error::GenerationError;
use crate::neighbors::{build_neighbor_graph, NeighborStats};
use crate::patterns::detect_patterns;
use crate::pentagrid;
use crate::tile_set::TileSet;
use crate::types::{Gamma, Tile};
use crate::zones::Zones;

/// Everything one generation pass needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRequest {
	/// Zones captured when the request was accepted.
	pub zones: Zones,
	/// Grid offsets.
	pub gamma: Gamma,
	/// Request epoch.
	pub epoch: u64,
}

/// Statistics from one generation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
	/// Number of tiles generated.
	pub tiles: usize,
	/// Grid crossings evaluated.
	pub examined: usize,
	/// Edge counts from linking.
	pub edges: NeighborStats,
	/// Pentagrid time in microseconds.
	pub pentagrid_us: u64,
	/// Neighbor graph time in microseconds.
	pub neighbors_us: u64,
	/// Pattern detection time in microseconds.
	pub patterns_us: u64,
}

impl GenerationStats {
	/// Sum of the stage timings.
	pub fn total_us(&self) -> u64 {
		self.pentagrid_us + self.neighbors_us + self.patterns_us
	}
}

/// Run the full pipeline for `request`.
///
/// `cancel` is honored inside the pentagrid scan and between stages; a
/// cancelled pass never yields a partial [`TileSet`].
#[tracing::instrument(skip_all, name = "pipeline::run_generation", fields(epoch = request.epoch))]
pub fn run_generation(request: &GenerationRequest, cancel: &AtomicBool) -> Result<TileSet, GenerationError> {
	let mut stats = GenerationStats::default();

	// Stage 1: pentagrid
	let pentagrid_start = Instant::now();
	let output = {
		let _span = tracing::info_span!("pentagrid_stage").entered();
		pentagrid::generate(&request.zones.generation, &request.gamma, cancel)
	};
	stats.pentagrid_us = pentagrid_start.elapsed().as_micros() as u64;
	stats.examined = output.examined;
	if output.cancelled {
		return Err(GenerationError::Cancelled {
			examined: output.examined,
		});
	}

	// BTreeMap values come out in key order.
	let mut tiles: Vec<Tile> = output.tiles.into_values().collect();
	stats.tiles = tiles.len();
	check_cancelled(cancel, stats.examined)?;

	// Stage 2: adjacency
	let neighbors_start = Instant::now();
	stats.edges = {
		let _span = tracing::info_span!("neighbor_stage").entered();
		build_neighbor_graph(&mut tiles)
	};
	stats.neighbors_us = neighbors_start.elapsed().as_micros() as u64;
	check_cancelled(cancel, stats.examined)?;

	// Stage 3: patterns
	let patterns_start = Instant::now();
	let patterns = {
		let _span = tracing::info_span!("pattern_stage").entered();
		detect_patterns(&mut tiles)
	};
	stats.patterns_us = patterns_start.elapsed().as_micros() as u64;
	check_cancelled(cancel, stats.examined)?;

	tracing::debug!(
		epoch = request.epoch,
		tiles = stats.tiles,
		stars = patterns.star_count,
		starbursts = patterns.starburst_count,
		total_us = stats.total_us(),
		"generation finished"
	);

	Ok(TileSet::new(tiles, request.zones, request.gamma, patterns, stats, request.epoch))
}

#[inline]
fn check_cancelled(cancel: &AtomicBool, examined: usize) -> Result<(), GenerationError> {
	if cancel.load(Ordering::Relaxed) {
		Err(GenerationError::Cancelled { examined })
	} else {
		Ok(())
	}
}

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;
