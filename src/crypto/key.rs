//! Key and IV derivation from a secret string
//!
//! Implements OpenSSL's `EVP_BytesToKey` with MD5, a single round and no
//! salt, which is what password-based cipher construction uses:
//! 1. `D_1 = MD5(secret)`
//! 2. `D_i = MD5(D_(i-1) || secret)`
//! 3. Concatenate blocks until there are enough bytes for key and IV
//! 4. Key is the first `key_len` bytes, IV the following 16
//!
//! The same secret always yields the same key and IV.

use super::md5::{md5_digest, MD5_LENGTH};

/// IV length for AES-CBC (16 bytes = 128 bits)
pub const IV_LENGTH: usize = 16;

/// Key material for one cipher invocation
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub key: Vec<u8>,
    pub iv: [u8; IV_LENGTH],
}

/// Derive a `key_len`-byte key and a 16-byte IV from `secret`
pub fn derive_key_iv(secret: &[u8], key_len: usize) -> DerivedKey {
    let total = key_len + IV_LENGTH;
    let mut material = Vec::with_capacity(total + MD5_LENGTH);
    let mut block: Option<[u8; MD5_LENGTH]> = None;

    while material.len() < total {
        let next = match &block {
            Some(prev) => md5_digest(&[prev.as_slice(), secret]),
            None => md5_digest(&[secret]),
        };
        material.extend_from_slice(&next);
        block = Some(next);
    }

    let mut iv = [0u8; IV_LENGTH];
    iv.copy_from_slice(&material[key_len..total]);
    material.truncate(key_len);

    DerivedKey { key: material, iv }
}
