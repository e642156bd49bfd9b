//! Result types returned by calibration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::params::HashParams;

/// One measured execution at a fixed parameter set.
///
/// For the single-shot strategy the duration is one hash call's wall-clock
/// time; for the load-simulating strategy it is the aggregate over every unit
/// of work in the window. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe {
    /// The parameters this probe ran with.
    pub params: HashParams,
    /// The observed (or aggregated) hash duration.
    pub duration: Duration,
}

impl Probe {
    /// Record a probe outcome.
    pub fn new(params: HashParams, duration: Duration) -> Self {
        Self { params, duration }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, d={:.3}s", self.params, self.duration.as_secs_f64())
    }
}

/// The outcome of one calibration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// Every probe executed, in execution order. Contains no duplicate
    /// parameter sets.
    pub probes: Vec<Probe>,
    /// The slowest probe that stayed strictly under the configured ceiling,
    /// i.e. the strongest qualifying parameter set. `None` when every probe
    /// met or exceeded the ceiling — a normal outcome callers must handle,
    /// not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Probe>,
}

impl CalibrationResult {
    /// The recommended parameters, if any probe qualified.
    pub fn recommended(&self) -> Option<HashParams> {
        self.best.map(|probe| probe.params)
    }
}
