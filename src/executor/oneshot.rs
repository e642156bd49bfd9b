//! Single-invocation execution strategy.

use std::time::{Duration, Instant};

use crate::error::HashError;
use crate::executor::Executor;
use crate::hasher::Hasher;
use crate::params::HashParams;

/// Times exactly one hash call per probe.
///
/// The cheapest strategy, and the right one when calibrating for a machine
/// that hashes at most one password at a time.
#[derive(Debug)]
pub struct OneshotExecutor<H> {
    hasher: H,
}

impl<H: Hasher> OneshotExecutor<H> {
    /// Create a single-shot executor over `hasher`.
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }
}

impl<H: Hasher> Executor for OneshotExecutor<H> {
    fn run(
        &self,
        password: &[u8],
        salt: &[u8],
        params: HashParams,
    ) -> Result<Duration, HashError> {
        let start = Instant::now();
        self.hasher.hash(password, salt, &params)?;
        Ok(start.elapsed())
    }
}
