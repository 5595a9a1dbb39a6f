//! Pattern search over a linked tile set.
//!
//! - [`spatial_index`]: `VertexIndex` - rounded vertex → touching tiles
//! - [`detector`]: star / starburst grouping and blend factors

pub mod detector;
pub mod spatial_index;

pub use detector::{detect_patterns, PatternGroup, PatternReport};
pub use spatial_index::VertexIndex;
