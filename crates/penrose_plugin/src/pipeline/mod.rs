//! Background generation pipeline.
//!
//! ```text
//! ┌───────────┐     ┌───────────┐     ┌──────────┐     ┌─────────┐
//! │ Pentagrid ├────►│ Neighbors ├────►│ Patterns ├────►│ TileSet │
//! └───────────┘     └───────────┘     └──────────┘     └─────────┘
//!   tile map         adjacency        stars, blend      published
//! ```
//!
//! - [`process`]: the three stages as one cancellable function
//! - [`worker`]: single-flight background thread with a one-slot handoff
//! - [`manager`]: per-frame façade tying zones, worker and buffers together

pub mod manager;
pub mod process;
pub mod worker;

pub use manager::TilingManager;
pub use process::{run_generation, GenerationRequest, GenerationStats};
pub use worker::GenerationWorker;
