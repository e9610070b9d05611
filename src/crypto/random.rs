//! Secure random bytes rendered as text

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::encoding::Encoding;
use crate::error::{Cause, CryptonError, Result};
use crate::{DEFAULT_RANDOM_ENCODING, MAX_RANDOM_BYTES};

/// Draw `length` bytes from the operating system CSPRNG
///
/// The bytes are rendered in `output_encoding`, or hex when it is unset or
/// empty. Text encodings substitute bytes they cannot represent, see
/// [`Encoding::encode_lossy`].
///
/// # Errors
///
/// Returns [`CryptonError::RandomBytes`] for an unknown encoding, a length
/// above [`MAX_RANDOM_BYTES`] or a failing random source.
pub fn random_bytes(length: usize, output_encoding: Option<&str>) -> Result<String> {
    let name = output_encoding
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_RANDOM_ENCODING);
    let encoding = Encoding::parse(name).map_err(CryptonError::RandomBytes)?;

    if length > MAX_RANDOM_BYTES {
        return Err(CryptonError::RandomBytes(Cause::InvalidLength(length)));
    }

    let mut buffer = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| CryptonError::RandomBytes(Cause::RandomSource(e.to_string())))?;

    Ok(encoding.encode_lossy(&buffer))
}
