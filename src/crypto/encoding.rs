//! Named text encodings
//!
//! Plaintext and ciphertext travel as strings; an [`Encoding`] says how a
//! string maps to bytes. Names are matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::error::Cause;

/// Text encoding of plaintext, ciphertext or random output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8 text
    Utf8,
    /// 7-bit ASCII text
    Ascii,
    /// One byte per code point, U+0000 to U+00FF
    Latin1,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64 with padding
    Base64,
    /// URL-safe base64 without padding
    Base64Url,
    /// UTF-16, little endian
    Utf16Le,
}

impl Encoding {
    /// Look up an encoding by name
    pub fn parse(name: &str) -> Result<Self, Cause> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base64url" => Ok(Encoding::Base64Url),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            _ => Err(Cause::UnknownEncoding(name.to_string())),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin1",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Utf16Le => "utf16le",
        }
    }

    /// Convert text in this encoding to bytes
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Cause> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(Cause::InvalidInput("text is not ascii".to_string()))
                }
            }
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c))
                        .map_err(|_| Cause::InvalidInput("text is not latin1".to_string()))
                })
                .collect(),
            Encoding::Hex => hex::decode(text).map_err(|e| Cause::InvalidInput(e.to_string())),
            Encoding::Base64 => STANDARD
                .decode(text)
                .map_err(|e| Cause::InvalidInput(e.to_string())),
            Encoding::Base64Url => URL_SAFE_NO_PAD
                .decode(text)
                .map_err(|e| Cause::InvalidInput(e.to_string())),
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        }
    }

    /// Render bytes as text in this encoding
    pub fn encode(&self, bytes: &[u8]) -> Result<String, Cause> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| Cause::InvalidInput(e.to_string())),
            Encoding::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| b as char).collect())
                } else {
                    Err(Cause::InvalidInput("bytes are not ascii".to_string()))
                }
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Hex => Ok(hex::encode(bytes)),
            Encoding::Base64 => Ok(STANDARD.encode(bytes)),
            Encoding::Base64Url => Ok(URL_SAFE_NO_PAD.encode(bytes)),
            Encoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(Cause::InvalidInput("odd number of utf16le bytes".to_string()));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|e| Cause::InvalidInput(e.to_string()))
            }
        }
    }

    /// Render arbitrary bytes as text, never failing
    ///
    /// Invalid UTF-8 and unpaired UTF-16 surrogates become U+FFFD. Ascii
    /// keeps the low seven bits of each byte. For utf16le a trailing odd
    /// byte is dropped. Only suitable where the text is not decoded back.
    pub fn encode_lossy(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Ascii => bytes.iter().map(|&b| (b & 0x7f) as char).collect(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
            Encoding::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = Cause;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::parse(s)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Encoding::parse("utf8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::parse("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::parse("binary").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::parse("Base64").unwrap(), Encoding::Base64);
        assert_eq!(Encoding::parse("ucs2").unwrap(), Encoding::Utf16Le);
        assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Hex);
    }

    #[test]
    fn test_parse_unknown() {
        match Encoding::parse("ebcdic") {
            Err(Cause::UnknownEncoding(name)) => assert_eq!(name, "ebcdic"),
            other => panic!("Expected UnknownEncoding, got {:?}", other),
        }
        assert!(Encoding::parse("").is_err());
    }

    #[test]
    fn test_hex() {
        assert_eq!(Encoding::Hex.encode(&[0x00, 0xab, 0xff]).unwrap(), "00abff");
        assert_eq!(Encoding::Hex.decode("00ABff").unwrap(), vec![0x00, 0xab, 0xff]);
        assert!(Encoding::Hex.decode("abc").is_err());
        assert!(Encoding::Hex.decode("zz").is_err());
    }

    #[test]
    fn test_base64() {
        assert_eq!(Encoding::Base64.encode(b"example").unwrap(), "ZXhhbXBsZQ==");
        assert_eq!(Encoding::Base64.decode("ZXhhbXBsZQ==").unwrap(), b"example");
        // Plain words are not valid padded base64
        assert!(Encoding::Base64.decode("example").is_err());
    }

    #[test]
    fn test_base64url() {
        assert_eq!(Encoding::Base64Url.encode(&[0xfb, 0xff]).unwrap(), "-_8");
        assert_eq!(Encoding::Base64Url.decode("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_latin1() {
        assert_eq!(Encoding::Latin1.decode("café").unwrap(), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(Encoding::Latin1.encode(&[b'c', b'a', b'f', 0xe9]).unwrap(), "café");
        assert!(Encoding::Latin1.decode("€").is_err());
    }

    #[test]
    fn test_ascii() {
        assert_eq!(Encoding::Ascii.decode("abc").unwrap(), b"abc");
        assert!(Encoding::Ascii.decode("é").is_err());
        assert!(Encoding::Ascii.encode(&[0x80]).is_err());
    }

    #[test]
    fn test_utf8() {
        let text = "Привет мир! 你好世界!";
        let bytes = Encoding::Utf8.decode(text).unwrap();
        assert_eq!(Encoding::Utf8.encode(&bytes).unwrap(), text);
        assert!(Encoding::Utf8.encode(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_utf16le() {
        assert_eq!(Encoding::Utf16Le.decode("Aé").unwrap(), vec![0x41, 0x00, 0xe9, 0x00]);
        assert_eq!(Encoding::Utf16Le.encode(&[0x41, 0x00, 0xe9, 0x00]).unwrap(), "Aé");
        assert!(Encoding::Utf16Le.encode(&[0x41]).is_err());
    }

    #[test]
    fn test_encode_lossy() {
        assert_eq!(Encoding::Utf8.encode_lossy(&[b'a', 0xff, b'b']), "a\u{fffd}b");
        assert_eq!(Encoding::Ascii.encode_lossy(&[b'a', 0xc1]), "aA");
        assert_eq!(Encoding::Utf16Le.encode_lossy(&[0x41, 0x00, 0x42]), "A");
        assert_eq!(Encoding::Utf16Le.encode_lossy(&[0x00, 0xd8, 0x41, 0x00]), "\u{fffd}A");
        assert_eq!(Encoding::Hex.encode_lossy(&[0x00, 0xab]), "00ab");
        assert_eq!(Encoding::Latin1.encode_lossy(&[0xe9]), "é");
        assert_eq!(Encoding::Utf8.encode_lossy(&[]), "");
    }
}
