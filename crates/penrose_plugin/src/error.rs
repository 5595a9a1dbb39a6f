//! Error types.

use thiserror::Error;

/// Why a background generation produced no tile set.
#[derive(Error, Debug)]
pub enum GenerationError {
	#[error("generation cancelled after {examined} crossings")]
	Cancelled { examined: usize },
	#[error("generation panicked: {0}")]
	Panicked(String),
	#[error("failed to spawn generation thread: {0}")]
	Spawn(#[from] std::io::Error),
}

/// Invalid [`TilingConfig`](crate::TilingConfig) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("gamma[{index}] is not finite ({value})")]
	NonFiniteGamma { index: usize, value: f64 },
	#[error("margin {name} must be finite and non-negative, got {value}")]
	NegativeMargin { name: &'static str, value: f64 },
	#[error("comfort margin {comfort} must be below generation margin {generation}")]
	MisorderedMargins { comfort: f64, generation: f64 },
	#[error("shutdown timeout must be positive")]
	ZeroShutdownTimeout,
}
