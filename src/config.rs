//! Configuration for the calibrator.

use std::time::Duration;

use crate::params::{Algorithm, Version};

/// Configuration options for [`Calibrator`](crate::Calibrator).
///
/// The calibrator searches the cost space between the configured bounds,
/// always preferring to spend the latency budget on memory cost before time
/// cost. Fields are public; the builder methods exist for fluent
/// construction and assert on values that are programmer errors (a zero
/// probe budget, an empty duration ceiling). Cross-field consistency is
/// checked by [`validate`](Self::validate) at the start of each run.
#[derive(Debug, Clone)]
pub struct CalibratorConfig {
    // =========================================================================
    // Search bounds
    // =========================================================================
    /// Lowest memory cost (KiB) the search may recommend. Default: 19 MiB,
    /// the OWASP floor for Argon2id.
    pub min_memory_cost: u32,

    /// Highest memory cost (KiB) the search may use. The first probe always
    /// starts here. Default: 64 MiB.
    pub max_memory_cost: u32,

    /// Lowest time cost the search may recommend. Default: 12.
    pub min_time_cost: u32,

    /// Highest time cost the search may use. Default: 99.
    pub max_time_cost: u32,

    // =========================================================================
    // Fixed parameter fields (carried into every candidate unchanged)
    // =========================================================================
    /// Number of lanes. Default: available CPU cores.
    pub parallelism: u32,

    /// Raw hash output length in bytes, 4..=64. Default: 64.
    pub hash_length: usize,

    /// Algorithm variant. Default: Argon2id.
    pub algorithm: Algorithm,

    /// Format version. Default: 0x13.
    pub version: Version,

    // =========================================================================
    // Probe material
    // =========================================================================
    /// Length in bytes of the random password generated once per run.
    /// Default: 64.
    pub password_len: usize,

    /// Length in bytes of the random salt generated once per run, 8..=48
    /// (the PHC string format caps encoded salts at 48 raw bytes).
    /// Default: 32.
    pub salt_len: usize,

    // =========================================================================
    // Termination
    // =========================================================================
    /// The latency ceiling. A probe qualifies only if its duration stays
    /// strictly under this. Default: 1 second.
    pub max_duration: Duration,

    /// Maximum number of probes per run. The search usually converges on a
    /// repeated candidate well before this. Default: 10.
    pub max_probes: usize,

    /// Concurrent load simulation settings.
    pub concurrency: ConcurrencyConfig,
}

/// Settings for the load-simulating execution strategy.
///
/// When enabled, each probe hashes continuously across `workers` threads for
/// a `window` of wall-clock time and reports the mean per-hash duration,
/// approximating latency under sustained load. Calibrating this way takes
/// much longer per probe and tends to recommend lower costs than a quiet
/// machine would.
#[derive(Debug, Clone)]
pub struct ConcurrencyConfig {
    /// Whether probes run the threaded strategy. Default: true.
    pub enabled: bool,
    /// Number of concurrent workers. Default: available CPU cores.
    pub workers: usize,
    /// Wall-clock window during which new hash units may start. In-flight
    /// units always run to completion, so a probe can take longer than this.
    /// Default: 5 seconds.
    pub window: Duration,
}

fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

impl Default for CalibratorConfig {
    fn default() -> Self {
        let cores = available_cores();
        Self {
            min_memory_cost: 1024 * 19,
            max_memory_cost: 1024 * 64,
            min_time_cost: 12,
            max_time_cost: 99,
            parallelism: cores as u32,
            hash_length: 64,
            algorithm: Algorithm::default(),
            version: Version::default(),
            password_len: 64,
            salt_len: 32,
            max_duration: Duration::from_secs(1),
            max_probes: 10,
            concurrency: ConcurrencyConfig {
                enabled: true,
                workers: cores,
                window: Duration::from_secs(5),
            },
        }
    }
}

impl CalibratorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quick configuration for development.
    ///
    /// Single-shot probes, small memory bounds, a 250 ms ceiling. Finishes
    /// in a few seconds on most hardware; not suitable for production
    /// recommendations.
    pub fn quick() -> Self {
        Self {
            min_memory_cost: 1024 * 8,
            max_memory_cost: 1024 * 32,
            min_time_cost: 1,
            max_time_cost: 10,
            max_duration: Duration::from_millis(250),
            max_probes: 6,
            ..Self::default()
        }
        .threaded(false)
    }

    /// Create a thorough configuration for production tuning.
    ///
    /// A 10 second load window per probe and a larger probe budget. Expect
    /// the run to take minutes.
    pub fn thorough() -> Self {
        Self::default()
            .max_probes(20)
            .window(Duration::from_secs(10))
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the memory cost bounds, in KiB.
    pub fn memory_cost_range(mut self, min: u32, max: u32) -> Self {
        assert!(min > 0, "min_memory_cost must be > 0");
        assert!(min <= max, "min_memory_cost must be <= max_memory_cost");
        self.min_memory_cost = min;
        self.max_memory_cost = max;
        self
    }

    /// Set the time cost bounds.
    pub fn time_cost_range(mut self, min: u32, max: u32) -> Self {
        assert!(min >= 1, "min_time_cost must be >= 1");
        assert!(min <= max, "min_time_cost must be <= max_time_cost");
        self.min_time_cost = min;
        self.max_time_cost = max;
        self
    }

    /// Set the number of lanes.
    pub fn parallelism(mut self, lanes: u32) -> Self {
        assert!(lanes >= 1, "parallelism must be >= 1");
        self.parallelism = lanes;
        self
    }

    /// Set the hash output length in bytes.
    pub fn hash_length(mut self, len: usize) -> Self {
        assert!((4..=64).contains(&len), "hash_length must be in 4..=64");
        self.hash_length = len;
        self
    }

    /// Set the algorithm variant.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the format version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set the generated password length in bytes.
    pub fn password_len(mut self, len: usize) -> Self {
        assert!(len > 0, "password_len must be > 0");
        self.password_len = len;
        self
    }

    /// Set the generated salt length in bytes.
    pub fn salt_len(mut self, len: usize) -> Self {
        assert!((8..=48).contains(&len), "salt_len must be in 8..=48");
        self.salt_len = len;
        self
    }

    /// Set the latency ceiling.
    pub fn max_duration(mut self, ceiling: Duration) -> Self {
        assert!(!ceiling.is_zero(), "max_duration must be non-zero");
        self.max_duration = ceiling;
        self
    }

    /// Set the latency ceiling in milliseconds.
    pub fn max_duration_millis(self, millis: u64) -> Self {
        self.max_duration(Duration::from_millis(millis))
    }

    /// Set the probe budget.
    pub fn max_probes(mut self, probes: usize) -> Self {
        assert!(probes >= 1, "max_probes must be >= 1");
        self.max_probes = probes;
        self
    }

    /// Enable or disable the load-simulating strategy.
    pub fn threaded(mut self, enabled: bool) -> Self {
        self.concurrency.enabled = enabled;
        self
    }

    /// Set the worker count for the load-simulating strategy.
    pub fn workers(mut self, count: usize) -> Self {
        assert!(count >= 1, "workers must be >= 1");
        self.concurrency.workers = count;
        self
    }

    /// Set the spawn window for the load-simulating strategy.
    pub fn window(mut self, window: Duration) -> Self {
        assert!(!window.is_zero(), "window must be non-zero");
        self.concurrency.window = window;
        self
    }

    /// Check cross-field consistency.
    ///
    /// Called at the start of every calibration run; rejects the
    /// configuration before any probe executes.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_memory_cost > self.max_memory_cost {
            return Err("min_memory_cost must be <= max_memory_cost".to_string());
        }
        if self.min_time_cost > self.max_time_cost {
            return Err("min_time_cost must be <= max_time_cost".to_string());
        }
        if self.min_time_cost < 1 {
            return Err("min_time_cost must be >= 1".to_string());
        }
        if self.parallelism < 1 {
            return Err("parallelism must be >= 1".to_string());
        }
        // Argon2 requires m >= 8p.
        if self.min_memory_cost < 8 * self.parallelism {
            return Err("min_memory_cost must be >= 8 * parallelism KiB".to_string());
        }
        if !(4..=64).contains(&self.hash_length) {
            return Err("hash_length must be in 4..=64".to_string());
        }
        if self.password_len == 0 {
            return Err("password_len must be > 0".to_string());
        }
        if !(8..=48).contains(&self.salt_len) {
            return Err("salt_len must be in 8..=48".to_string());
        }
        if self.max_duration.is_zero() {
            return Err("max_duration must be non-zero".to_string());
        }
        if self.max_probes == 0 {
            return Err("max_probes must be >= 1".to_string());
        }
        if self.concurrency.enabled {
            if self.concurrency.workers == 0 {
                return Err("workers must be >= 1".to_string());
            }
            if self.concurrency.window.is_zero() {
                return Err("window must be non-zero".to_string());
            }
        }
        Ok(())
    }
}
