//! Main Crypton API
//!
//! [`Crypton`] owns the default settings and exposes the five operations.
//! Each call resolves its effective settings from the defaults and the
//! optional per-call override, runs the primitive and returns a typed
//! result. Nothing is cached between calls.

use std::borrow::Cow;

use tokio::runtime::Handle;
use tracing::debug;

use crate::config::{
    resolve_cipher_settings, resolve_hash_settings, CipherOptions, CryptonConfig, HashOptions,
};
use crate::crypto;
use crate::error::{Cause, CryptonError, Result};

/// Configurable cipher, compare, hash and random bytes operations
///
/// Operations take `&self` and share no mutable state, so one instance can
/// serve concurrent callers behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Crypton {
    config: CryptonConfig,
}

impl Crypton {
    /// Create an instance with the given defaults
    pub fn new(config: CryptonConfig) -> Self {
        Self { config }
    }

    /// Current defaults
    pub fn config(&self) -> &CryptonConfig {
        &self.config
    }

    /// Replace the defaults used by subsequent calls
    pub fn init(&mut self, config: CryptonConfig) {
        self.config = config;
    }

    /// Cipher `text` reversibly
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::Cipher`] on any failure.
    pub async fn cipher(&self, text: &str, options: Option<&CipherOptions>) -> Result<String> {
        let settings = resolve_cipher_settings(&self.config.cipher, options);
        debug!(
            algorithm = %settings.algorithm,
            input_encoding = %settings.input_encoding,
            output_encoding = %settings.output_encoding,
            "cipher"
        );
        crypto::cipher(text, &settings)
    }

    /// Decipher `text` produced by [`Crypton::cipher`] with the same settings
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::Decipher`] on any failure.
    pub async fn decipher(&self, text: &str, options: Option<&CipherOptions>) -> Result<String> {
        let settings = resolve_cipher_settings(&self.config.cipher, options);
        debug!(
            algorithm = %settings.algorithm,
            input_encoding = %settings.input_encoding,
            output_encoding = %settings.output_encoding,
            "decipher"
        );
        crypto::decipher(text, &settings)
    }

    /// Check whether `text` ciphers to `ciphered`
    ///
    /// With `force` set, `text` may itself be a ciphertext: it is deciphered
    /// first, and if that fails it is used as plaintext unchanged. The
    /// resulting plaintext is ciphered and compared with `ciphered`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::Compare`] wrapping the cipher failure. A
    /// failed decipher attempt under `force` is not an error.
    pub async fn compare(
        &self,
        text: &str,
        ciphered: &str,
        force: bool,
        options: Option<&CipherOptions>,
    ) -> Result<bool> {
        let mut plaintext = Cow::Borrowed(text);

        if force {
            match self.decipher(text, options).await {
                Ok(deciphered) => plaintext = Cow::Owned(deciphered),
                Err(err) => debug!(error = %err, "compare: candidate is not ciphered, using it as plaintext"),
            }
        }

        let recomputed = self
            .cipher(&plaintext, options)
            .await
            .map_err(|err| CryptonError::Compare(Box::new(err)))?;

        Ok(recomputed == ciphered)
    }

    /// Hash `text` one way with a fresh salt
    ///
    /// Inside a Tokio runtime hashing runs on its blocking thread pool. Under
    /// any other executor it runs inline on the polling thread.
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::Hash`] on any failure.
    pub async fn hash(&self, text: &str, options: Option<&HashOptions>) -> Result<String> {
        let settings = resolve_hash_settings(&self.config.hash, options);
        debug!(salt_rounds = settings.salt_rounds, "hash");

        match Handle::try_current() {
            Ok(handle) => {
                let text = text.to_string();
                handle
                    .spawn_blocking(move || crypto::hash(&text, &settings))
                    .await
                    .map_err(|e| CryptonError::Hash(Cause::Worker(e.to_string())))?
            }
            Err(_) => crypto::hash(text, &settings),
        }
    }

    /// Check `text` against a digest produced by [`Crypton::hash`]
    ///
    /// A mismatch resolves to `false`. Runs like [`Crypton::hash`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::Verify`] if the digest is malformed.
    pub async fn verify(&self, text: &str, digest: &str) -> Result<bool> {
        debug!("verify");

        match Handle::try_current() {
            Ok(handle) => {
                let text = text.to_string();
                let digest = digest.to_string();
                handle
                    .spawn_blocking(move || crypto::verify(&text, &digest))
                    .await
                    .map_err(|e| CryptonError::Verify(Cause::Worker(e.to_string())))?
            }
            Err(_) => crypto::verify(text, digest),
        }
    }

    /// Generate `length` secure random bytes rendered in `output_encoding`
    /// (hex by default)
    ///
    /// # Errors
    ///
    /// Returns [`CryptonError::RandomBytes`] on any failure.
    pub async fn random_bytes(&self, length: usize, output_encoding: Option<&str>) -> Result<String> {
        debug!(length, output_encoding = ?output_encoding, "random bytes");
        crypto::random_bytes(length, output_encoding)
    }
}
