use std::time::Duration;

use super::*;
use crate::types::PatternType;

fn camera(x: f64, y: f64) -> CameraState {
	CameraState::new(x, y, 2.0, 16.0 / 9.0)
}

/// Call `update` until a tile set is swapped in, or give up after ~5s.
fn update_until_swapped(manager: &mut TilingManager, camera: &CameraState) -> bool {
	for _ in 0..5000 {
		if manager.update(camera) {
			return true;
		}
		std::thread::sleep(Duration::from_millis(1));
	}
	false
}

#[test]
fn test_rejects_invalid_config() {
	let config = TilingConfig {
		comfort_margin: 0.5,
		..Default::default()
	};
	assert!(TilingManager::new(config).is_err());
}

#[test]
fn test_first_update_generates_and_packs() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	let cam = camera(0.0, 0.0);

	assert!(!manager.update(&cam));
	assert!(manager.is_generating());
	assert!(manager.active().is_none());
	assert_eq!(manager.hit_test(DVec2::ZERO), None);

	assert!(update_until_swapped(&mut manager, &cam));

	let set = Arc::clone(manager.active().unwrap());
	assert!(!set.is_empty());
	assert_eq!(set.generation_bounds(), cam.viewport().expanded(0.30));
	assert_eq!(manager.buffers().tile_count(), set.len());
	assert_eq!(manager.take_dirty(), Some(DirtyRegion::Full));
	assert_eq!(manager.star_count(), set.star_count());
}

#[test]
fn test_small_pan_does_not_regenerate() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &camera(0.0, 0.0)));

	// Comfort slack at zoom 2 is 0.15 * 1.5 = 0.225 vertically.
	manager.update(&camera(0.0, 0.1));
	assert!(!manager.is_generating());
}

#[test]
fn test_pan_out_of_comfort_regenerates() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &camera(0.0, 0.0)));
	let first_epoch = manager.active().unwrap().epoch();

	let moved = camera(5.0, 0.0);
	assert!(update_until_swapped(&mut manager, &moved));

	let set = manager.active().unwrap();
	assert!(set.epoch() > first_epoch);
	assert!(set.comfort_bounds().contains(&moved.viewport()));
}

#[test]
fn test_gamma_change_regenerates_with_new_gamma() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	let cam = camera(0.0, 0.0);
	manager.update(&cam);

	// Change gamma while the first request may still be in flight; a stale
	// result must never be published.
	let gamma = [0.1, 0.25, -0.15, 0.3, -0.5];
	manager.set_gamma(gamma).unwrap();

	assert!(update_until_swapped(&mut manager, &cam));
	assert_eq!(manager.active().unwrap().gamma(), &gamma);
}

#[test]
fn test_set_gamma_rejects_nan() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	let result = manager.set_gamma([0.2, f64::NAN, 0.2, 0.2, 0.2]);

	assert!(matches!(result, Err(ConfigError::NonFiniteGamma { index: 1, .. })));
	assert_eq!(manager.config().gamma, [0.2; 5]);
}

#[test]
fn test_interaction_updates_buffers() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &camera(0.0, 0.0)));
	manager.take_dirty();

	assert!(manager.set_selected(1, true));
	assert!(manager.set_animation(1, AnimationKind::Ripple, 0.5));
	assert!(manager.set_hovered(1, true));

	let state = manager.buffers().interaction(1).copied().unwrap();
	assert!(state.selected && state.hovered);
	assert_eq!(state.animation, AnimationKind::Ripple);
	assert_eq!(state.animation_phase, 0.5);
	assert!(matches!(manager.take_dirty(), Some(DirtyRegion::Range(_))));

	let len = manager.active().unwrap().len();
	assert!(!manager.set_selected(len, true));
}

#[test]
fn test_hit_test_through_manager() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &camera(0.0, 0.0)));

	let set = Arc::clone(manager.active().unwrap());
	let tile = &set.tiles()[0];
	let centroid = set.transform().ribbon_to_camera(tile.centroid());
	assert_eq!(manager.hit_test(centroid), Some(0));
}

#[test]
fn test_counts_match_pattern_groups() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &CameraState::new(0.0, 0.0, 1.0, 16.0 / 9.0)));

	let set = manager.active().unwrap();
	let stars = set.pattern_groups().iter().filter(|g| g.kind == PatternType::Star).count();
	assert_eq!(manager.star_count(), stars);
	assert!(manager.star_count() > 0);
}

#[test]
fn test_shutdown_stops_requests() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	assert!(update_until_swapped(&mut manager, &camera(0.0, 0.0)));

	assert!(manager.shutdown());
	assert!(!manager.update(&camera(50.0, 50.0)));
	assert!(!manager.is_generating());
	// Published data stays readable.
	assert!(manager.active().is_some());
}

#[test]
fn test_failed_first_pass_retries_in_place() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	let cam = camera(0.0, 0.0);

	// Zones are committed for `cam`, but the pass behind them fails.
	manager.zones.compute_zones(&cam);
	assert!(manager.worker.start_job(|_| panic!("stage failed")));

	assert!(update_until_swapped(&mut manager, &cam));
	assert!(!manager.active().unwrap().is_empty());
}

#[test]
fn test_failure_keeps_zones_when_tiles_are_shown() {
	let mut manager = TilingManager::new(TilingConfig::default()).unwrap();
	let cam = camera(0.0, 0.0);
	assert!(update_until_swapped(&mut manager, &cam));

	assert!(manager.worker.start_job(|_| panic!("stage failed")));
	for _ in 0..5000 {
		manager.update(&cam);
		if !manager.is_generating() {
			break;
		}
		std::thread::sleep(Duration::from_millis(1));
	}

	assert!(!manager.is_generating());
	assert!(manager.zones.current().is_some());
	assert_eq!(manager.active().unwrap().epoch(), 1);
}
