//! Load-simulating execution strategy.
//!
//! Keeps up to `workers` hash units in flight for a wall-clock window and
//! aggregates every unit's duration into a mean per-hash latency. The spawn
//! loop scans worker slots and re-checks the deadline immediately before
//! every spawn, so no unit starts after the window closes; units already in
//! flight always run to completion, which is why a probe can outlast the
//! window itself.
//!
//! Each unit returns its duration through its join handle. The spawner is
//! the only thread that ever touches the sample collection, so aggregation
//! needs no locking and is independent of the order workers finish in.

use std::thread::{self, ScopedJoinHandle};
use std::time::{Duration, Instant};

use thread_priority::{set_current_thread_priority, ThreadPriority};

use crate::error::HashError;
use crate::executor::Executor;
use crate::hasher::Hasher;
use crate::params::HashParams;

/// Simulates sustained concurrent load for each probe.
#[derive(Debug)]
pub struct ThreadedExecutor<H> {
    hasher: H,
    workers: usize,
    window: Duration,
}

impl<H: Hasher + Sync> ThreadedExecutor<H> {
    /// Create a load-simulating executor over `hasher`.
    ///
    /// New hash units may start for `window` after each `run` call begins,
    /// spread across `workers` concurrent slots.
    pub fn new(hasher: H, workers: usize, window: Duration) -> Self {
        Self {
            hasher,
            workers,
            window,
        }
    }
}

impl<H: Hasher + Sync> Executor for ThreadedExecutor<H> {
    fn run(
        &self,
        password: &[u8],
        salt: &[u8],
        params: HashParams,
    ) -> Result<Duration, HashError> {
        let hasher = &self.hasher;
        let deadline = Instant::now() + self.window;

        let mut samples: Vec<Duration> = Vec::new();
        let mut first_err: Option<HashError> = None;

        thread::scope(|scope| {
            let mut slots: Vec<Option<ScopedJoinHandle<'_, Result<Duration, HashError>>>> =
                Vec::new();
            slots.resize_with(self.workers, || None);

            'spawning: while Instant::now() < deadline {
                for slot in &mut slots {
                    if slot.as_ref().is_some_and(|unit| !unit.is_finished()) {
                        continue;
                    }
                    if let Some(done) = slot.take() {
                        collect(done, &mut samples, &mut first_err);
                        // Stop spawning on the first failure; in-flight
                        // units still drain below.
                        if first_err.is_some() {
                            break 'spawning;
                        }
                    }
                    if Instant::now() >= deadline {
                        break 'spawning;
                    }
                    *slot = Some(scope.spawn(move || hash_unit(hasher, password, salt, params)));
                }
                thread::yield_now();
            }

            for slot in &mut slots {
                if let Some(unit) = slot.take() {
                    collect(unit, &mut samples, &mut first_err);
                }
            }
        });

        if let Some(err) = first_err {
            return Err(err);
        }

        tracing::debug!(
            "load window drained: {} samples across {} workers",
            samples.len(),
            self.workers
        );

        Ok(mean_duration(&samples))
    }
}

/// One unit of work: a single timed hash call on an elevated-priority thread.
fn hash_unit<H: Hasher>(
    hasher: &H,
    password: &[u8],
    salt: &[u8],
    params: HashParams,
) -> Result<Duration, HashError> {
    if let Err(err) = set_current_thread_priority(ThreadPriority::Max) {
        tracing::debug!("worker priority elevation failed: {:?}", err);
    }
    let start = Instant::now();
    hasher.hash(password, salt, &params)?;
    Ok(start.elapsed())
}

fn collect(
    unit: ScopedJoinHandle<'_, Result<Duration, HashError>>,
    samples: &mut Vec<Duration>,
    first_err: &mut Option<HashError>,
) {
    match unit.join() {
        Ok(Ok(duration)) => samples.push(duration),
        Ok(Err(err)) => {
            if first_err.is_none() {
                *first_err = Some(err);
            }
        }
        // A panicking hasher is a bug in the implementation, not a
        // calibration outcome.
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Arithmetic mean over the recorded unit durations.
///
/// Deterministic for a given multiset of samples, independent of the order
/// workers finished in. Zero samples aggregate to zero; configuration
/// validation rules that case out by requiring a non-zero window.
fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    Duration::from_nanos((total / samples.len() as u128) as u64)
}
