//! Error types for calibration.

use std::fmt;

/// Error returned when the hashing primitive fails.
///
/// The calibrator never branches on the failure subtype; a failed hash call
/// means there is no timing sample and the run cannot continue. The original
/// cause is preserved only as a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashError {
    message: String,
}

impl HashError {
    /// Create a hash error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hashing primitive failed: {}", self.message)
    }
}

impl std::error::Error for HashError {}

impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for HashError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Error returned by [`Calibrator::calibrate`](crate::Calibrator::calibrate).
///
/// A run that merely fails to find a qualifying parameter set is not an
/// error; that outcome is `best: None` in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalibrateError {
    /// The configuration was rejected before any probe executed.
    InvalidConfig(String),
    /// The hashing primitive failed mid-run. Never retried.
    Hash(HashError),
}

impl fmt::Display for CalibrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            Self::Hash(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CalibrateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(_) => None,
            Self::Hash(err) => Some(err),
        }
    }
}

impl From<HashError> for CalibrateError {
    fn from(err: HashError) -> Self {
        Self::Hash(err)
    }
}
