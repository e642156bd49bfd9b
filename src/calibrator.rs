//! The calibration driver.

use std::collections::HashSet;

use rand::RngCore;

use crate::config::CalibratorConfig;
use crate::error::CalibrateError;
use crate::executor::{Executor, OneshotExecutor, ThreadedExecutor};
use crate::hasher::{Argon2Hasher, Hasher};
use crate::result::{CalibrationResult, Probe};
use crate::search;

/// Tunes cost parameters for maximum strength under a latency ceiling.
///
/// The calibrator always spends the budget on memory first and only raises
/// time cost once memory is at its bound; when over budget it sheds time
/// cost first. Runs are independent: each generates a fresh password/salt
/// pair and retains nothing afterwards. Depending on the bounds there may be
/// no parameter set that fits under the ceiling, in which case the result
/// carries `best: None`.
///
/// # Example
///
/// ```no_run
/// use argon2_autotune::{Calibrator, CalibratorConfig};
///
/// let result = Calibrator::new(CalibratorConfig::quick()).calibrate()?;
/// match result.best {
///     Some(probe) => println!("use {} ({:.0?} per hash)", probe.params, probe.duration),
///     None => println!("no parameter set fits under the ceiling"),
/// }
/// # Ok::<(), argon2_autotune::CalibrateError>(())
/// ```
#[derive(Debug)]
pub struct Calibrator<H = Argon2Hasher> {
    config: CalibratorConfig,
    hasher: H,
}

impl Calibrator<Argon2Hasher> {
    /// Create a calibrator over the default Argon2 primitive.
    pub fn new(config: CalibratorConfig) -> Self {
        Self::with_hasher(config, Argon2Hasher::new())
    }
}

impl<H: Hasher + Sync> Calibrator<H> {
    /// Create a calibrator over a custom hashing primitive.
    pub fn with_hasher(config: CalibratorConfig, hasher: H) -> Self {
        Self { config, hasher }
    }

    /// The configuration this calibrator runs with.
    pub fn config(&self) -> &CalibratorConfig {
        &self.config
    }

    /// Run one full calibration.
    ///
    /// Probes run strictly one after another. The run stops as soon as the
    /// search proposes parameters it has already probed (the search has
    /// stabilized), or once `max_probes` probes have been recorded.
    pub fn calibrate(&self) -> Result<CalibrationResult, CalibrateError> {
        self.config
            .validate()
            .map_err(CalibrateError::InvalidConfig)?;

        // One password/salt pair for the whole run, so only cost parameters
        // vary between probes.
        let mut rng = rand::rng();
        let mut password = vec![0u8; self.config.password_len];
        let mut salt = vec![0u8; self.config.salt_len];
        rng.fill_bytes(&mut password);
        rng.fill_bytes(&mut salt);

        let executor: Box<dyn Executor + '_> = if self.config.concurrency.enabled {
            Box::new(ThreadedExecutor::new(
                &self.hasher,
                self.config.concurrency.workers,
                self.config.concurrency.window,
            ))
        } else {
            Box::new(OneshotExecutor::new(&self.hasher))
        };

        let mut tested: HashSet<_> = HashSet::new();
        let mut probes: Vec<Probe> = Vec::new();
        let mut last: Option<Probe> = None;

        loop {
            let candidate = match &last {
                None => search::initial_candidate(&self.config),
                Some(probe) => search::next_candidate(&self.config, probe),
            };

            if !tested.insert(candidate) {
                tracing::debug!("search produced an already-probed candidate, stopping");
                break;
            }

            let duration = executor.run(&password, &salt, candidate)?;
            tracing::debug!(
                "probe {}: {} took {:.3}s",
                probes.len() + 1,
                candidate,
                duration.as_secs_f64()
            );

            let probe = Probe::new(candidate, duration);
            probes.push(probe);
            last = Some(probe);

            if probes.len() >= self.config.max_probes {
                tracing::debug!("probe budget exhausted");
                break;
            }
        }

        let best = probes
            .iter()
            .filter(|probe| probe.duration < self.config.max_duration)
            .max_by_key(|probe| probe.duration)
            .copied();

        Ok(CalibrationResult { probes, best })
    }
}
