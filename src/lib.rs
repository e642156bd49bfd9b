//! # argon2-autotune
//!
//! Find the strongest Argon2 cost parameters that keep hashing under a
//! latency ceiling on the machine you run it on.
//!
//! The calibrator probes the real hashing primitive with candidate
//! parameters, reads the timing feedback, and hill-climbs toward the most
//! expensive configuration that still finishes strictly under the
//! configured `max_duration`. Memory cost is treated as the primary
//! security knob: the search maxes out memory before it spends any budget
//! on time cost, and sheds time cost first when it has to back off.
//!
//! Probes can optionally run under simulated concurrent load (the default),
//! which hammers the primitive from a pool of worker threads for a fixed
//! window per probe; that gives a calibration representative of a busy
//! server rather than an idle benchmark machine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use argon2_autotune::{Calibrator, CalibratorConfig};
//! use std::time::Duration;
//!
//! let config = CalibratorConfig::new()
//!     .max_duration(Duration::from_millis(500))
//!     .threaded(false);
//!
//! let result = Calibrator::new(config).calibrate()?;
//! match result.best {
//!     Some(probe) => println!("recommended: {}", probe.params),
//!     None => println!("nothing fits under 500ms; relax the bounds"),
//! }
//! # Ok::<(), argon2_autotune::CalibrateError>(())
//! ```
//!
//! A run can legitimately find nothing: if even the cheapest allowed
//! parameters blow the ceiling, `best` is `None` and it is up to the caller
//! to relax the bounds or the ceiling and try again.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod calibrator;
mod config;
mod error;
mod hasher;
mod params;
mod result;

pub mod executor;
pub mod search;

pub use calibrator::Calibrator;
pub use config::{CalibratorConfig, ConcurrencyConfig};
pub use error::{CalibrateError, HashError};
pub use executor::{Executor, OneshotExecutor, ThreadedExecutor};
pub use hasher::{Argon2Hasher, Hasher};
pub use params::{Algorithm, HashParams, Version};
pub use result::{CalibrationResult, Probe};
