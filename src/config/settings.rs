//! Settings data model
//!
//! The serialized shape matches the documented configuration layout:
//!
//! ```json
//! {
//!   "crypto": { "secretKey": "...", "algorithm": "aes-256-cbc",
//!               "inputEncoding": "utf8", "outputEncoding": "base64" },
//!   "bcrypt": { "saltRounds": 10 }
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{DEFAULT_ALGORITHM, DEFAULT_INPUT_ENCODING, DEFAULT_OUTPUT_ENCODING, DEFAULT_SALT_ROUNDS};

/// Effective settings for the reversible cipher
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CipherSettings {
    /// Secret the cipher key and IV are derived from
    pub secret_key: String,
    /// Cipher identifier, e.g. `aes-256-cbc`
    pub algorithm: String,
    /// Encoding of plaintext
    pub input_encoding: String,
    /// Encoding of ciphertext
    pub output_encoding: String,
}

impl Default for CipherSettings {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            input_encoding: DEFAULT_INPUT_ENCODING.to_string(),
            output_encoding: DEFAULT_OUTPUT_ENCODING.to_string(),
        }
    }
}

impl fmt::Debug for CipherSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSettings")
            .field("secret_key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("input_encoding", &self.input_encoding)
            .field("output_encoding", &self.output_encoding)
            .finish()
    }
}

/// Effective settings for the adaptive password hash
///
/// The hash is Argon2id, not bcrypt. `saltRounds` is the Argon2 time cost,
/// a linear number of passes over memory, whereas bcrypt reads the same
/// number as a base-2 logarithm of its iteration count. A bcrypt
/// configuration therefore carries over with a different cost, and bcrypt
/// digests (`$2a$`, `$2b$`, `$2y$`) are rejected by verify with
/// [`CryptonError::Verify`](crate::CryptonError::Verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashSettings {
    /// Argon2 time cost (number of passes), must be at least 1
    pub salt_rounds: u32,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            salt_rounds: DEFAULT_SALT_ROUNDS,
        }
    }
}

/// Process-wide default settings
///
/// The hash section keeps the `bcrypt` key for layout compatibility and
/// also accepts `hash`. Its `saltRounds` is applied as the Argon2id time
/// cost, not as a bcrypt log2 cost; see [`HashSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptonConfig {
    /// Reversible cipher defaults
    #[serde(rename = "crypto")]
    pub cipher: CipherSettings,
    /// Password hash defaults, read from the `bcrypt` section
    #[serde(rename = "bcrypt", alias = "hash")]
    pub hash: HashSettings,
}

impl CryptonConfig {
    /// Parse a configuration document
    ///
    /// Missing sections and fields keep their default values. Values are not
    /// validated here; an unusable value fails the first operation that
    /// needs it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Per-call override of [`CipherSettings`]
///
/// Unset fields, and fields set to an empty string, fall back to the
/// configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CipherOptions {
    pub secret_key: Option<String>,
    pub algorithm: Option<String>,
    pub input_encoding: Option<String>,
    pub output_encoding: Option<String>,
}

/// Per-call override of [`HashSettings`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashOptions {
    pub salt_rounds: Option<u32>,
}
