//! Execution strategies: how one probe turns parameters into a duration.
//!
//! The calibrator is generic over the strategy through the [`Executor`]
//! trait. [`OneshotExecutor`] times a single hash call on an otherwise quiet
//! thread; [`ThreadedExecutor`] hammers the primitive from a pool of workers
//! for a wall-clock window and reports the mean per-hash latency, simulating
//! a loaded server.

mod oneshot;
mod threaded;

pub use oneshot::OneshotExecutor;
pub use threaded::ThreadedExecutor;

use std::time::Duration;

use crate::error::HashError;
use crate::params::HashParams;

/// One unit of measurement: run the primitive under `params` and report a
/// representative duration.
///
/// Failures from the primitive propagate unchanged; calibration cannot
/// proceed without a timing sample.
pub trait Executor {
    /// Produce an observed duration for one probe.
    fn run(&self, password: &[u8], salt: &[u8], params: HashParams)
        -> Result<Duration, HashError>;
}
