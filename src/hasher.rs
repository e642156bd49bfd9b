//! The hashing primitive contract and the Argon2 adapter.
//!
//! The calibrator consumes the primitive through the [`Hasher`] trait and
//! never looks inside the encoded string it returns. [`Argon2Hasher`] is the
//! default implementation, backed by the RustCrypto `argon2` crate; the PHC
//! string format stays entirely inside that crate.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, Params};

use crate::error::HashError;
use crate::params::{Algorithm, HashParams, Version};

/// A password-hashing primitive the calibrator can time.
///
/// Implementations must be deterministic in cost: the same parameters must
/// do the same amount of work regardless of the password and salt bytes.
/// Any failure is fatal to the calibration run; it is never retried.
pub trait Hasher {
    /// Hash `password` with `salt` under `params`, returning the encoded
    /// hash string.
    fn hash(&self, password: &[u8], salt: &[u8], params: &HashParams) -> Result<String, HashError>;
}

impl<T: Hasher + ?Sized> Hasher for &T {
    fn hash(&self, password: &[u8], salt: &[u8], params: &HashParams) -> Result<String, HashError> {
        (**self).hash(password, salt, params)
    }
}

/// The default primitive: Argon2 via the RustCrypto `argon2` crate.
///
/// Produces PHC-encoded hash strings, so the cost parameters travel inside
/// the encoded form and [`verify`](Self::verify) needs no external state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }

    fn instance(params: &HashParams) -> Result<Argon2<'static>, HashError> {
        let cost = Params::new(
            params.memory_cost,
            params.time_cost,
            params.parallelism,
            Some(params.hash_length),
        )?;
        Ok(Argon2::new(
            params.algorithm.into(),
            params.version.into(),
            cost,
        ))
    }

    /// Verify `password` against a PHC-encoded hash produced by
    /// [`hash`](Hasher::hash).
    ///
    /// The cost parameters are read back out of the encoded string, so this
    /// verifies against whatever parameters the hash was created with.
    pub fn verify(&self, password: &[u8], encoded: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(encoded)?;
        match Argon2::default().verify_password(password, &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

impl Hasher for Argon2Hasher {
    fn hash(&self, password: &[u8], salt: &[u8], params: &HashParams) -> Result<String, HashError> {
        let argon2 = Self::instance(params)?;
        let salt = SaltString::encode_b64(salt)?;
        let encoded = argon2.hash_password(password, &salt)?;
        Ok(encoded.to_string())
    }
}

impl From<Algorithm> for argon2::Algorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Argon2d => argon2::Algorithm::Argon2d,
            Algorithm::Argon2i => argon2::Algorithm::Argon2i,
            Algorithm::Argon2id => argon2::Algorithm::Argon2id,
        }
    }
}

impl From<Version> for argon2::Version {
    fn from(version: Version) -> Self {
        match version {
            Version::V0x10 => argon2::Version::V0x10,
            Version::V0x13 => argon2::Version::V0x13,
        }
    }
}
