//! Cryptographic primitives behind the Crypton operations
//!
//! Everything here is synchronous. [`crate::Crypton`] resolves settings and
//! schedules these functions; they never read the configured defaults
//! themselves.

mod md5;
mod key;
pub mod encoding;
pub mod cipher;
pub mod hasher;
pub mod random;

pub use self::md5::md5_digest;
pub use key::{derive_key_iv, DerivedKey, IV_LENGTH};
pub use encoding::Encoding;
pub use cipher::{cipher, decipher, Algorithm};
pub use hasher::{hash, verify};
pub use random::random_bytes;
