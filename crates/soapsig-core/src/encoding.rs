#![forbid(unsafe_code)]

//! Base64 handling shared by key and signature decoding.
//!
//! Decoding follows the legacy producer's basic decoder: standard alphabet,
//! trailing `=` padding optional, unused bits of the final symbol ignored.
//! ASCII whitespace is removed first so line-wrapped values decode.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64 text, ignoring ASCII whitespace.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    LENIENT.decode(compact)
}

/// Encode bytes as padded standard base64.
pub fn encode_base64(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_and_padding() {
        assert_eq!(decode_base64("aGVs\n bG8=").unwrap(), b"hello");
        assert_eq!(decode_base64("aGVsbG8").unwrap(), b"hello");
        assert!(decode_base64("a$b=").is_err());
        assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn test_nonzero_trailing_bits_are_ignored() {
        // '9' differs from '8' only in the two bits past the last byte.
        assert_eq!(decode_base64("aGVsbG9=").unwrap(), b"hello");
        assert_eq!(decode_base64("aGVsbG9").unwrap(), b"hello");
        assert_eq!(decode_base64("QR==").unwrap(), b"A");
    }
}
