//! Background generation worker.
//!
//! # Flow
//!
//! ```text
//! Consumer thread                    Worker thread ("penrose-generation")
//! ┌──────────────────────┐
//! │ request_generation() │
//! │  - busy? → false     │
//! │  - epoch += 1        │
//! └──────────┬───────────┘
//!            │ spawn
//!            ▼
//!                                   ┌───────────────────┐
//!                                   │ run_generation()  │
//!                                   │ (pentagrid,       │
//!                                   │  neighbors,       │
//!                                   │  patterns)        │
//!                                   └─────────┬─────────┘
//!                                             │ bounded(1)
//! ┌──────────────────────┐                    │
//! │ poll()               │◄───────────────────┘
//! │  - Ok  → TileSet     │
//! │  - Err → log, retry  │
//! └──────────────────────┘
//! ```
//!
//! At most one generation is in flight. Requests made while busy are
//! dropped, not queued: the next viewport check will ask again.
//!
//! The worker owns a dedicated OS thread so shutdown can join it, which
//! makes it native-only. Where threads cannot be spawned (wasm32 without
//! thread support) the spawn error is logged and every request is refused.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{self as channel, Receiver, TryRecvError};
use web_time::Instant;

use super::process::{run_generation, GenerationRequest};
use crate::config::DEFAULT_SHUTDOWN_TIMEOUT;
use crate::error::GenerationError;
use crate::tile_set::TileSet;
use crate::types::Gamma;
use crate::zones::Zones;

const THREAD_NAME: &str = "penrose-generation";

/// Result delivered by one generation pass.
pub type Outcome = Result<TileSet, GenerationError>;

/// Runs the generation pipeline off the consumer thread.
pub struct GenerationWorker {
	/// Receiver for the in-flight result.
	receiver: Option<Receiver<Outcome>>,
	/// Cooperative cancellation flag shared with the worker thread.
	cancel: Arc<AtomicBool>,
	handle: Option<JoinHandle<()>>,
	/// Epoch of the most recently accepted request (0 = none yet).
	epoch: u64,
	shutdown_timeout: Duration,
	shut_down: bool,
}

impl GenerationWorker {
	/// Create an idle worker.
	pub fn new(shutdown_timeout: Duration) -> Self {
		Self {
			receiver: None,
			cancel: Arc::new(AtomicBool::new(false)),
			handle: None,
			epoch: 0,
			shutdown_timeout,
			shut_down: false,
		}
	}

	/// Check if a generation is in flight.
	#[inline]
	pub fn is_busy(&self) -> bool {
		self.receiver.is_some()
	}

	/// Check if [`shutdown`](Self::shutdown) has been called.
	#[inline]
	pub fn is_shut_down(&self) -> bool {
		self.shut_down
	}

	/// Epoch of the most recently accepted request.
	#[inline]
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// Start generating tiles for `zones`.
	///
	/// Returns `true` if started, `false` if busy, shut down, or the thread
	/// could not be spawned.
	pub fn request_generation(&mut self, zones: Zones, gamma: Gamma) -> bool {
		if self.is_busy() || self.shut_down {
			return false;
		}

		let request = GenerationRequest {
			zones,
			gamma,
			epoch: self.epoch + 1,
		};
		let started = self.start_job(move |cancel| run_generation(&request, cancel));
		if started {
			self.epoch = request.epoch;
			tracing::debug!(epoch = self.epoch, generation = ?zones.generation, "generation requested");
		}
		started
	}

	pub(super) fn start_job<F>(&mut self, job: F) -> bool
	where
		F: FnOnce(&AtomicBool) -> Outcome + Send + 'static,
	{
		let (sender, receiver) = channel::bounded(1);
		let cancel = Arc::clone(&self.cancel);

		let spawned = thread::Builder::new().name(THREAD_NAME.into()).spawn(move || {
			let outcome = panic::catch_unwind(AssertUnwindSafe(|| job(&*cancel)))
				.unwrap_or_else(|payload| Err(GenerationError::Panicked(panic_message(&*payload))));
			// Ignore send error (receiver dropped = abandoned)
			let _ = sender.send(outcome);
		});

		match spawned {
			Ok(handle) => {
				// The previous thread already delivered its result; let it finish detached.
				self.handle = Some(handle);
				self.receiver = Some(receiver);
				true
			}
			Err(error) => {
				tracing::error!(error = %GenerationError::Spawn(error), "generation not started");
				false
			}
		}
	}

	/// Poll for the outcome of the in-flight generation (non-blocking).
	///
	/// Returns `None` while running or idle. Failures are logged here and
	/// clear the in-flight state so a later request can retry.
	pub fn poll(&mut self) -> Option<Outcome> {
		let outcome = self.poll_outcome()?;
		match &outcome {
			Ok(_) => {}
			Err(GenerationError::Cancelled { examined }) => {
				tracing::debug!(examined, "generation cancelled");
			}
			Err(error) => {
				tracing::error!(%error, "generation failed");
			}
		}
		Some(outcome)
	}

	fn poll_outcome(&mut self) -> Option<Outcome> {
		let receiver = self.receiver.as_ref()?;

		match receiver.try_recv() {
			Ok(outcome) => {
				self.receiver = None;
				Some(outcome)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				self.receiver = None;
				Some(Err(GenerationError::Panicked("worker exited without a result".into())))
			}
		}
	}

	/// Cancel any in-flight generation and wait up to `timeout` for the
	/// worker thread to exit. Later requests are refused.
	///
	/// Returns `true` if the thread is known to have exited.
	pub fn shutdown(&mut self, timeout: Duration) -> bool {
		self.shut_down = true;
		self.cancel.store(true, Ordering::Relaxed);
		self.receiver = None;

		let Some(handle) = self.handle.take() else {
			return true;
		};

		let deadline = Instant::now() + timeout;
		while !handle.is_finished() {
			if Instant::now() >= deadline {
				tracing::warn!(?timeout, "generation thread did not exit in time; detaching");
				return false;
			}
			thread::sleep(Duration::from_millis(1));
		}

		if handle.join().is_err() {
			tracing::warn!("generation thread panicked outside the pipeline");
		}
		true
	}
}

impl Default for GenerationWorker {
	fn default() -> Self {
		Self::new(DEFAULT_SHUTDOWN_TIMEOUT)
	}
}

impl Drop for GenerationWorker {
	fn drop(&mut self) {
		if !self.shut_down {
			self.shutdown(self.shutdown_timeout);
		}
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"non-string panic payload".to_string()
	}
}

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;
