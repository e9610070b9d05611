//! MD5 digests for key derivation
//!
//! Key and IV derivation chains MD5 over the previous block and the secret,
//! so the digest takes its input in parts.

use md5::{Md5, Digest};

/// MD5 digest length in bytes
pub const MD5_LENGTH: usize = 16;

/// Calculate the MD5 digest of the concatenation of `parts`
///
/// # Example
///
/// ```
/// use crypton::crypto::md5_digest;
///
/// let digest = md5_digest(&[b"Test ", b"Item"]);
/// assert_eq!(digest, md5_digest(&[b"Test Item"]));
/// ```
pub fn md5_digest(parts: &[&[u8]]) -> [u8; MD5_LENGTH] {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
