//! One-way adaptive password hashing
//!
//! Uses Argon2id. The configured `saltRounds` is the Argon2 time cost
//! (number of passes), not a bcrypt log2 cost; memory and parallelism stay
//! at the crate defaults. Bcrypt digests (`$2b$...`) do not verify here and
//! fail with [`CryptonError::Verify`].
//! Digests are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! carrying everything [`verify`] needs, so verification takes no settings.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::config::HashSettings;
use crate::error::{Cause, CryptonError, Result};

/// Salt length in bytes
pub const SALT_LENGTH: usize = 16;

fn hash_error(err: impl std::fmt::Display) -> CryptonError {
    CryptonError::Hash(Cause::PasswordHash(err.to_string()))
}

fn verify_error(err: impl std::fmt::Display) -> CryptonError {
    CryptonError::Verify(Cause::PasswordHash(err.to_string()))
}

/// Hash `text` with a fresh random salt
///
/// Two calls with the same text return different digests; both verify.
///
/// # Errors
///
/// Returns [`CryptonError::Hash`] if the cost is invalid (0) or hashing fails.
pub fn hash(text: &str, settings: &HashSettings) -> Result<String> {
    let params = Params::new(
        Params::DEFAULT_M_COST,
        settings.salt_rounds,
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(hash_error)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut salt_bytes = [0u8; SALT_LENGTH];
    rand::rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes).map_err(hash_error)?;

    argon2
        .hash_password(text.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(hash_error)
}

/// Check `text` against a digest produced by [`hash`]
///
/// A mismatch is `Ok(false)`.
///
/// # Errors
///
/// Returns [`CryptonError::Verify`] if the digest is malformed or its
/// parameters are unusable.
pub fn verify(text: &str, digest: &str) -> Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(verify_error)?;

    match Argon2::default().verify_password(text.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(verify_error(e)),
    }
}
