//! # Crypton
//!
//! A small configurable cryptographic utility library.
//!
//! ## Features
//!
//! - Reversible AES-CBC cipher/decipher of encoded text
//! - Comparison of a candidate (plaintext, or possibly ciphered) against a stored ciphertext
//! - One-way Argon2id password hashing and verification
//! - Secure random bytes rendered as text
//! - Per-call settings overrides merged over injectable defaults
//!
//! ## Example
//!
//! ```no_run
//! use crypton::{Crypton, CryptonConfig};
//!
//! # async fn run() -> crypton::Result<()> {
//! let config = CryptonConfig::from_json_str(
//!     r#"{ "crypto": { "secretKey": "o!rDE(Qbrq7u4OV" }, "bcrypt": { "saltRounds": 5 } }"#,
//! )?;
//! let crypton = Crypton::new(config);
//!
//! let ciphered = crypton.cipher("example", None).await?;
//! assert_eq!(crypton.decipher(&ciphered, None).await?, "example");
//! assert!(crypton.compare("example", &ciphered, false, None).await?);
//!
//! let digest = crypton.hash("example", None).await?;
//! assert!(crypton.verify("example", &digest).await?);
//!
//! let token = crypton.random_bytes(16, None).await?;
//! assert_eq!(token.len(), 32);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto;
pub mod crypton;
pub mod error;

// Re-export main types
pub use error::{Cause, CryptonError, ErrorKind, Result};
pub use config::{CryptonConfig, CipherSettings, HashSettings, CipherOptions, HashOptions};
pub use crypton::Crypton;
pub use crypto::{Algorithm, Encoding};

/// Default cipher algorithm
pub const DEFAULT_ALGORITHM: &str = "aes-256-cbc";

/// Default plaintext encoding
pub const DEFAULT_INPUT_ENCODING: &str = "utf8";

/// Default ciphertext encoding
pub const DEFAULT_OUTPUT_ENCODING: &str = "base64";

/// Default password hash cost
pub const DEFAULT_SALT_ROUNDS: u32 = 10;

/// Default encoding of random bytes
pub const DEFAULT_RANDOM_ENCODING: &str = "hex";

/// Largest number of random bytes generated in one call
pub const MAX_RANDOM_BYTES: usize = i32::MAX as usize;
