//! Reversible AES-CBC cipher over encoded text
//!
//! Key and IV come from the secret key via [`derive_key_iv`], so the same
//! settings always produce the same ciphertext for the same plaintext.
//! Ciphertext does not carry its settings: deciphering needs the exact
//! secret key, algorithm and encodings used to cipher it.
//!
//! Padding is PKCS#7.

use std::fmt;

use aes::{Aes128, Aes192, Aes256};
use block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::encoding::Encoding;
use super::key::derive_key_iv;
use crate::config::CipherSettings;
use crate::error::{Cause, CryptonError, Result};

/// Supported block cipher modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

impl Algorithm {
    /// Look up an algorithm by its identifier, ignoring case
    pub fn parse(name: &str) -> std::result::Result<Self, Cause> {
        match name.to_ascii_lowercase().as_str() {
            "aes-128-cbc" | "aes128" => Ok(Algorithm::Aes128Cbc),
            "aes-192-cbc" | "aes192" => Ok(Algorithm::Aes192Cbc),
            "aes-256-cbc" | "aes256" => Ok(Algorithm::Aes256Cbc),
            _ => Err(Cause::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Key length in bytes
    pub fn key_len(&self) -> usize {
        match self {
            Algorithm::Aes128Cbc => 16,
            Algorithm::Aes192Cbc => 24,
            Algorithm::Aes256Cbc => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Aes128Cbc => f.write_str("aes-128-cbc"),
            Algorithm::Aes192Cbc => f.write_str("aes-192-cbc"),
            Algorithm::Aes256Cbc => f.write_str("aes-256-cbc"),
        }
    }
}

/// Settings parsed and checked for one cipher invocation
struct Prepared {
    algorithm: Algorithm,
    input: Encoding,
    output: Encoding,
    key: Vec<u8>,
    iv: [u8; super::key::IV_LENGTH],
}

fn prepare(settings: &CipherSettings) -> std::result::Result<Prepared, Cause> {
    if settings.secret_key.is_empty() {
        return Err(Cause::MissingSetting("secretKey"));
    }
    if settings.algorithm.is_empty() {
        return Err(Cause::MissingSetting("algorithm"));
    }
    if settings.input_encoding.is_empty() {
        return Err(Cause::MissingSetting("inputEncoding"));
    }
    if settings.output_encoding.is_empty() {
        return Err(Cause::MissingSetting("outputEncoding"));
    }

    let algorithm = Algorithm::parse(&settings.algorithm)?;
    let input = Encoding::parse(&settings.input_encoding)?;
    let output = Encoding::parse(&settings.output_encoding)?;
    let derived = derive_key_iv(settings.secret_key.as_bytes(), algorithm.key_len());

    Ok(Prepared {
        algorithm,
        input,
        output,
        key: derived.key,
        iv: derived.iv,
    })
}

fn encrypt_padded<M>(key: &[u8], iv: &[u8], data: &[u8]) -> std::result::Result<Vec<u8>, Cause>
where
    M: KeyIvInit + BlockEncryptMut,
{
    let mode = M::new_from_slices(key, iv).map_err(|e| Cause::InvalidInput(e.to_string()))?;
    Ok(mode.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn decrypt_padded<M>(key: &[u8], iv: &[u8], data: &[u8]) -> std::result::Result<Vec<u8>, Cause>
where
    M: KeyIvInit + BlockDecryptMut,
{
    let mode = M::new_from_slices(key, iv).map_err(|e| Cause::InvalidInput(e.to_string()))?;
    mode.decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|e| Cause::BadDecrypt(e.to_string()))
}

fn encrypt_text(text: &str, settings: &CipherSettings) -> std::result::Result<String, Cause> {
    let prepared = prepare(settings)?;
    let data = prepared.input.decode(text)?;

    let encrypted = match prepared.algorithm {
        Algorithm::Aes128Cbc => encrypt_padded::<Encryptor<Aes128>>(&prepared.key, &prepared.iv, &data),
        Algorithm::Aes192Cbc => encrypt_padded::<Encryptor<Aes192>>(&prepared.key, &prepared.iv, &data),
        Algorithm::Aes256Cbc => encrypt_padded::<Encryptor<Aes256>>(&prepared.key, &prepared.iv, &data),
    }?;

    prepared.output.encode(&encrypted)
}

fn decrypt_text(text: &str, settings: &CipherSettings) -> std::result::Result<String, Cause> {
    let prepared = prepare(settings)?;
    let data = prepared.output.decode(text)?;

    let decrypted = match prepared.algorithm {
        Algorithm::Aes128Cbc => decrypt_padded::<Decryptor<Aes128>>(&prepared.key, &prepared.iv, &data),
        Algorithm::Aes192Cbc => decrypt_padded::<Decryptor<Aes192>>(&prepared.key, &prepared.iv, &data),
        Algorithm::Aes256Cbc => decrypt_padded::<Decryptor<Aes256>>(&prepared.key, &prepared.iv, &data),
    }?;

    prepared.input.encode(&decrypted)
}

/// Cipher `text` with the given settings
///
/// `text` is read in the input encoding; the result is in the output
/// encoding.
///
/// # Errors
///
/// Any failure is reported as [`CryptonError::Cipher`].
pub fn cipher(text: &str, settings: &CipherSettings) -> Result<String> {
    encrypt_text(text, settings).map_err(CryptonError::Cipher)
}

/// Decipher `text` produced by [`cipher`] with the same settings
///
/// `text` is read in the output encoding; the result is rendered in the
/// input encoding.
///
/// # Errors
///
/// Any failure is reported as [`CryptonError::Decipher`].
pub fn decipher(text: &str, settings: &CipherSettings) -> Result<String> {
    decrypt_text(text, settings).map_err(CryptonError::Decipher)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(algorithm: &str, output: &str) -> CipherSettings {
        CipherSettings {
            secret_key: "o!rDE(Qbrq7u4OV".to_string(),
            algorithm: algorithm.to_string(),
            input_encoding: "utf8".to_string(),
            output_encoding: output.to_string(),
        }
    }

    /// Known answer computed with `openssl enc -aes-256-cbc -md md5 -nosalt`
    #[test]
    fn test_cipher_vector_base64() {
        let result = cipher("example", &settings("AES-256-CBC", "base64")).unwrap();
        assert_eq!(result, "CTAw8ATB8cbWfHM5oDOyLQ==");
    }

    #[test]
    fn test_cipher_vector_hex() {
        let result = cipher("example", &settings("aes-256-cbc", "hex")).unwrap();
        assert_eq!(result, "093030f004c1f1c6d67c7339a033b22d");

        let result = cipher("example", &settings("aes-128-cbc", "hex")).unwrap();
        assert_eq!(result, "183b9d187ed3e3db1c81c5bba0c458fe");
    }

    #[test]
    fn test_cipher_vector_aes192_cyrillic() {
        let s = CipherSettings {
            secret_key: "secret".to_string(),
            ..settings("aes192", "hex")
        };
        let result = cipher("Привет мир!", &s).unwrap();
        assert_eq!(result, "57760c75df57b1defe6978e4532a2b256efd59422649c3e90e75d12f49d10037");
        assert_eq!(decipher(&result, &s).unwrap(), "Привет мир!");
    }

    #[test]
    fn test_cipher_empty_text() {
        // Empty input still produces one full padding block
        let result = cipher("", &settings("aes-256-cbc", "hex")).unwrap();
        assert_eq!(result, "f29a9a57c3e6cfb95b03bf141d78d281");
        assert_eq!(decipher(&result, &settings("aes-256-cbc", "hex")).unwrap(), "");
    }

    #[test]
    fn test_decipher_vector() {
        let result = decipher("CTAw8ATB8cbWfHM5oDOyLQ==", &settings("aes-256-cbc", "base64")).unwrap();
        assert_eq!(result, "example");
    }

    #[test]
    fn test_cipher_is_deterministic() {
        let s = settings("aes-256-cbc", "base64");
        assert_eq!(cipher("same text", &s).unwrap(), cipher("same text", &s).unwrap());
    }

    #[test]
    fn test_roundtrip_all_algorithms() {
        let plaintext = "Hello, World! This is a test message.";
        for algorithm in ["aes-128-cbc", "aes-192-cbc", "aes-256-cbc"] {
            for output in ["hex", "base64", "base64url", "latin1"] {
                let s = settings(algorithm, output);
                let encrypted = cipher(plaintext, &s).unwrap();
                assert_eq!(decipher(&encrypted, &s).unwrap(), plaintext, "{} {}", algorithm, output);
            }
        }
    }

    #[test]
    fn test_hex_input_encoding() {
        let s = CipherSettings {
            input_encoding: "hex".to_string(),
            ..settings("aes-256-cbc", "base64")
        };
        let encrypted = cipher("6578616d706c65", &s).unwrap();
        // Same bytes as the utf8 "example" vector
        assert_eq!(encrypted, "CTAw8ATB8cbWfHM5oDOyLQ==");
        assert_eq!(decipher(&encrypted, &s).unwrap(), "6578616d706c65");
    }

    #[test]
    fn test_wrong_key_fails() {
        let encrypted = cipher("Secret message", &settings("aes-256-cbc", "base64")).unwrap();
        let wrong = CipherSettings {
            secret_key: "wrong".to_string(),
            ..settings("aes-256-cbc", "base64")
        };
        // Either the padding check or the utf8 check rejects the output
        assert!(decipher(&encrypted, &wrong).is_err());
    }

    #[test]
    fn test_unsupported_algorithm() {
        match cipher("example", &settings("des-ede3-cbc", "base64")) {
            Err(CryptonError::Cipher(Cause::UnsupportedAlgorithm(name))) => {
                assert_eq!(name, "des-ede3-cbc")
            }
            other => panic!("Expected UnsupportedAlgorithm, got {:?}", other),
        }
        assert!(matches!(
            decipher("abc", &settings("rot13", "base64")),
            Err(CryptonError::Decipher(Cause::UnsupportedAlgorithm(_)))
        ));
    }

    #[test]
    fn test_missing_secret_key() {
        let s = CipherSettings {
            secret_key: String::new(),
            ..settings("aes-256-cbc", "base64")
        };
        assert!(matches!(
            cipher("example", &s),
            Err(CryptonError::Cipher(Cause::MissingSetting("secretKey")))
        ));
    }

    #[test]
    fn test_invalid_input_for_encoding() {
        let s = CipherSettings {
            input_encoding: "hex".to_string(),
            ..settings("aes-256-cbc", "base64")
        };
        assert!(matches!(
            cipher("not hex", &s),
            Err(CryptonError::Cipher(Cause::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_decipher_malformed() {
        let s = settings("aes-256-cbc", "base64");
        // Not base64
        assert!(matches!(
            decipher("example", &s),
            Err(CryptonError::Decipher(Cause::InvalidInput(_)))
        ));
        // Valid base64 but not a whole number of blocks
        assert!(matches!(
            decipher("ZXhhbXBsZQ==", &s),
            Err(CryptonError::Decipher(Cause::BadDecrypt(_)))
        ));
        // Empty ciphertext
        assert!(decipher("", &s).is_err());
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!(Algorithm::parse("AES256").unwrap(), Algorithm::Aes256Cbc);
        assert_eq!(Algorithm::parse("aes-128-CBC").unwrap(), Algorithm::Aes128Cbc);
        assert_eq!(Algorithm::Aes192Cbc.key_len(), 24);
        assert_eq!(Algorithm::Aes192Cbc.to_string(), "aes-192-cbc");
    }
}
