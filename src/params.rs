//! Cost-parameter value types.
//!
//! A [`HashParams`] is a plain immutable value describing how expensive one
//! hash computation is. The calibrator compares candidates structurally to
//! detect search cycles, so the type derives `Eq` and `Hash` rather than
//! relying on any identity semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The Argon2 algorithm variant to calibrate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Data-dependent memory access (fastest, side-channel prone).
    Argon2d,
    /// Data-independent memory access.
    Argon2i,
    /// Hybrid of the two; the recommended variant for password hashing.
    #[default]
    Argon2id,
}

/// The Argon2 format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Version {
    /// Version 0x10 (16), the legacy format.
    V0x10,
    /// Version 0x13 (19), the current format.
    #[default]
    V0x13,
}

/// One candidate set of Argon2 cost parameters.
///
/// Two instances are equal iff every field is equal; the calibrator uses this
/// to recognize when the search has stabilized on parameters it already
/// probed. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashParams {
    /// Number of passes over memory (Argon2 `t`).
    pub time_cost: u32,
    /// Memory to fill, in KiB (Argon2 `m`).
    pub memory_cost: u32,
    /// Number of lanes (Argon2 `p`).
    pub parallelism: u32,
    /// Length of the raw hash output, in bytes.
    pub hash_length: usize,
    /// Algorithm variant.
    pub algorithm: Algorithm,
    /// Format version.
    pub version: Version,
}

impl fmt::Display for HashParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={} KiB, t={}, p={}, len={}, {:?} v{}",
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            self.hash_length,
            self.algorithm,
            match self.version {
                Version::V0x10 => 16,
                Version::V0x13 => 19,
            }
        )
    }
}
