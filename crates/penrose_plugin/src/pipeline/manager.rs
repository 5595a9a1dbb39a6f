//! TilingManager - per-frame façade over zones, worker and buffers.
//!
//! # Usage
//!
//! ```ignore
//! let mut tiling = TilingManager::new(TilingConfig::default())?;
//!
//! // Each frame
//! let camera = CameraState::new(x, y, zoom, width / height);
//! tiling.update(&camera);
//! if let Some(region) = tiling.take_dirty() {
//!     upload(region, tiling.buffers().vertex_bytes(), tiling.buffers().attribute_bytes());
//! }
//!
//! // Input
//! if let Some(index) = tiling.hit_test(cursor) {
//!     tiling.set_hovered(index, true);
//! }
//! ```

use std::sync::Arc;

use glam::DVec2;

use super::worker::GenerationWorker;
use crate::buffers::{hit_test, DirtyRegion, TileBuffers};
use crate::config::{TilePalette, TilingConfig};
use crate::error::{ConfigError, GenerationError};
use crate::tile_set::TileSet;
use crate::types::{AnimationKind, Gamma, TileIndex, TileInteraction};
use crate::zones::{CameraState, ViewportZoneManager};

/// Owns the active [`TileSet`], its packed buffers and the background worker.
pub struct TilingManager {
	config: TilingConfig,
	zones: ViewportZoneManager,
	worker: GenerationWorker,
	active: Option<Arc<TileSet>>,
	buffers: TileBuffers,
}

impl TilingManager {
	/// Create a manager. Nothing is generated until the first [`update`](Self::update).
	pub fn new(config: TilingConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			zones: ViewportZoneManager::new(config.generation_margin, config.comfort_margin),
			worker: GenerationWorker::new(config.shutdown_timeout),
			active: None,
			buffers: TileBuffers::new(config.palette),
			config,
		})
	}

	#[inline]
	pub fn config(&self) -> &TilingConfig {
		&self.config
	}

	/// Per-frame entry point.
	///
	/// Swaps in a finished tile set if one is ready, then requests a new
	/// generation when the viewport has left the comfort zone and the worker
	/// is idle. Returns `true` if a new tile set was swapped in.
	pub fn update(&mut self, camera: &CameraState) -> bool {
		let swapped = self.poll_results();
		if !self.worker.is_busy() && self.zones.needs_regeneration(camera) {
			self.request_generation(camera);
		}
		swapped
	}

	/// Start generating for `camera` unless the worker is busy or shut down.
	///
	/// Zones are committed only when the request is accepted.
	pub fn request_generation(&mut self, camera: &CameraState) -> bool {
		let zones = self.zones.zones_for(camera);
		if !self.worker.request_generation(zones, self.config.gamma) {
			return false;
		}
		self.zones.compute_zones(camera);
		true
	}

	/// Take a finished tile set if one is ready, repacking the buffers.
	///
	/// Results generated for a gamma that has since changed are discarded.
	/// A failed pass with nothing published yet forgets the zones, so the
	/// next update retries without waiting for the camera to move.
	pub fn poll_results(&mut self) -> bool {
		let set = match self.worker.poll() {
			None => return false,
			Some(Ok(set)) => set,
			Some(Err(GenerationError::Cancelled { .. })) => return false,
			Some(Err(_)) => {
				if self.active.is_none() {
					self.zones.invalidate();
				}
				return false;
			}
		};
		if set.gamma() != &self.config.gamma {
			tracing::debug!(epoch = set.epoch(), "discarding tile set generated for a previous gamma");
			return false;
		}

		self.buffers.pack(&set);
		tracing::debug!(
			epoch = set.epoch(),
			tiles = set.len(),
			stars = set.star_count(),
			starbursts = set.starburst_count(),
			"tile set published"
		);
		self.active = Some(Arc::new(set));
		true
	}

	/// Change the grid offsets. The current tiles stay visible until the
	/// regenerated set arrives.
	pub fn set_gamma(&mut self, gamma: Gamma) -> Result<(), ConfigError> {
		if let Some((index, &value)) = gamma.iter().enumerate().find(|(_, g)| !g.is_finite()) {
			return Err(ConfigError::NonFiniteGamma { index, value });
		}
		if gamma != self.config.gamma {
			self.config.gamma = gamma;
			self.zones.invalidate();
		}
		Ok(())
	}

	/// Change the tile colors. Does not regenerate.
	pub fn set_palette(&mut self, palette: TilePalette) {
		self.config.palette = palette;
		self.buffers.set_palette(palette);
	}

	/// Currently published tile set.
	#[inline]
	pub fn active(&self) -> Option<&Arc<TileSet>> {
		self.active.as_ref()
	}

	#[inline]
	pub fn buffers(&self) -> &TileBuffers {
		&self.buffers
	}

	/// Take the pending dirty region for upload.
	#[inline]
	pub fn take_dirty(&mut self) -> Option<DirtyRegion> {
		self.buffers.take_dirty()
	}

	/// Check if a generation is in flight.
	#[inline]
	pub fn is_generating(&self) -> bool {
		self.worker.is_busy()
	}

	/// Tile under a camera-space point.
	pub fn hit_test(&self, point: DVec2) -> Option<TileIndex> {
		self.active.as_deref().and_then(|set| hit_test(set, point))
	}

	pub fn set_selected(&mut self, index: TileIndex, selected: bool) -> bool {
		self.modify_interaction(index, |state| state.selected = selected)
	}

	pub fn set_hovered(&mut self, index: TileIndex, hovered: bool) -> bool {
		self.modify_interaction(index, |state| state.hovered = hovered)
	}

	/// Set a tile's animation kind and progress.
	pub fn set_animation(&mut self, index: TileIndex, animation: AnimationKind, phase: f32) -> bool {
		self.modify_interaction(index, |state| {
			state.animation = animation;
			state.animation_phase = phase;
		})
	}

	fn modify_interaction(&mut self, index: TileIndex, change: impl FnOnce(&mut TileInteraction)) -> bool {
		let Some(mut state) = self.buffers.interaction(index).copied() else {
			return false;
		};
		change(&mut state);
		self.buffers.update_interaction(index, state)
	}

	pub fn star_count(&self) -> usize {
		self.active.as_ref().map_or(0, |set| set.star_count())
	}

	pub fn starburst_count(&self) -> usize {
		self.active.as_ref().map_or(0, |set| set.starburst_count())
	}

	/// Cancel generation and wait up to the configured timeout for the
	/// worker to exit. The active tile set stays readable.
	pub fn shutdown(&mut self) -> bool {
		self.worker.shutdown(self.config.shutdown_timeout)
	}
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;
