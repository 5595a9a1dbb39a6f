//! penrose_plugin - Engine-independent Penrose tiling generation
//!
//! Generates rhombic Penrose tilings around a moving viewport with de
//! Bruijn's pentagrid method, links edge-sharing tiles, detects five-kite
//! stars and ten-dart starbursts, and packs the result into flat arrays for
//! a GPU renderer.
//!
//! # Features
//!
//! - **Pentagrid generation**: deterministic tiles keyed by grid indices,
//!   parallel across the ten family pairs
//! - **Adjacency**: fixed-point edge hashing, boundary and anomaly counts
//! - **Pattern detection**: greedy, reproducible star and starburst groups
//!   with per-tile blend factors
//! - **Viewport zones**: regeneration only when the camera leaves a comfort
//!   margin
//! - **Background worker**: one generation in flight, cooperative
//!   cancellation, bounded shutdown
//! - **Buffers**: full repacks, partial interaction updates, point picking
//!
//! # Example
//!
//! ```ignore
//! use penrose_plugin::{CameraState, TilingConfig, TilingManager};
//!
//! let mut tiling = TilingManager::new(TilingConfig::default())?;
//!
//! // Every frame
//! if tiling.update(&CameraState::new(0.0, 0.0, 1.0, 16.0 / 9.0)) {
//!     println!("{} stars", tiling.star_count());
//! }
//! ```

pub mod constants;
pub mod types;

pub use types::{AnimationKind, Gamma, PatternType, Tile, TileIndex, TileInteraction, TileKey, VertexKey};

pub mod config;
pub mod error;
pub use config::{TilePalette, TilingConfig, DEFAULT_GAMMA};
pub use error::{ConfigError, GenerationError};

// Rectangles and coordinate transforms
pub mod geometry;
pub use geometry::{Aabb2, RibbonTransform};

// Generation stages
pub mod neighbors;
pub mod patterns;
pub mod pentagrid;
pub use neighbors::NeighborStats;
pub use patterns::{PatternGroup, PatternReport};

pub mod tile_set;
pub use tile_set::TileSet;

pub mod zones;
pub use zones::{CameraState, ViewportZoneManager, Zones};

// Background worker and per-frame façade
pub mod pipeline;
pub use pipeline::{GenerationStats, GenerationWorker, TilingManager};

pub mod buffers;
pub use buffers::{hit_test, DirtyRegion, TileBuffers};
