//! Error types for Crypton
//!
//! Every public operation reports failures as exactly one [`CryptonError`]
//! variant. The variant tells the caller which operation failed; the wrapped
//! [`Cause`] tells it why.

use thiserror::Error;

/// Underlying reason for a failed operation
#[derive(Error, Debug)]
pub enum Cause {
    /// A required setting resolved to an empty value
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),

    /// The algorithm identifier is not supported
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The encoding name is not recognized
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Input could not be encoded or decoded under the requested encoding
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Block cipher padding check failed (wrong key or corrupted data)
    #[error("bad decrypt: {0}")]
    BadDecrypt(String),

    /// The password hash primitive reported an error
    #[error("password hash: {0}")]
    PasswordHash(String),

    /// The operating system random source failed
    #[error("random source: {0}")]
    RandomSource(String),

    /// Requested length is outside the supported range
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// The background worker running the operation did not complete
    #[error("worker: {0}")]
    Worker(String),
}

/// Main error type for Crypton operations
#[derive(Error, Debug)]
pub enum CryptonError {
    /// Ciphering a text failed
    #[error("Cipher error: {0}")]
    Cipher(#[source] Cause),

    /// Deciphering a text failed
    #[error("Decipher error: {0}")]
    Decipher(#[source] Cause),

    /// Comparing a text against a ciphertext failed
    #[error("Compare error: {0}")]
    Compare(#[source] Box<CryptonError>),

    /// Hashing a text failed
    #[error("Hash error: {0}")]
    Hash(#[source] Cause),

    /// Verifying a text against a digest failed
    #[error("Verify error: {0}")]
    Verify(#[source] Cause),

    /// Generating random bytes failed
    #[error("Random bytes error: {0}")]
    RandomBytes(#[source] Cause),

    /// Loading configuration failed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Kind of a [`CryptonError`], for callers that branch on failure type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Cipher,
    Decipher,
    Compare,
    Hash,
    Verify,
    RandomBytes,
    Config,
}

impl CryptonError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptonError::Cipher(_) => ErrorKind::Cipher,
            CryptonError::Decipher(_) => ErrorKind::Decipher,
            CryptonError::Compare(_) => ErrorKind::Compare,
            CryptonError::Hash(_) => ErrorKind::Hash,
            CryptonError::Verify(_) => ErrorKind::Verify,
            CryptonError::RandomBytes(_) => ErrorKind::RandomBytes,
            CryptonError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<std::io::Error> for CryptonError {
    fn from(err: std::io::Error) -> Self {
        CryptonError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CryptonError {
    fn from(err: serde_json::Error) -> Self {
        CryptonError::Config(err.to_string())
    }
}

/// Result type alias for Crypton operations
pub type Result<T> = std::result::Result<T, CryptonError>;
