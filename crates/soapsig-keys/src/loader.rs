#![forbid(unsafe_code)]

//! Key loading from PEM text.
//!
//! The PEM handling is deliberately loose, like the producer's own loader:
//! everything between the markers is taken, all whitespace is removed, and
//! the rest is base64-decoded. Header lines and line lengths are not checked.

use crate::key::{PrivateKeyMaterial, PublicKeyMaterial};
use soapsig_core::encoding::decode_base64;
use soapsig_core::Error;
use spki::der::Decode;
use spki::ObjectIdentifier;
use std::path::Path;

/// rsaEncryption (PKCS #1)
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Load an RSA public key from a PEM-encoded SubjectPublicKeyInfo
/// (`-----BEGIN PUBLIC KEY-----`).
pub fn load_public_key(pem_data: &[u8]) -> Result<PublicKeyMaterial, Error> {
    use spki::DecodePublicKey;

    let der = pem_payload(pem_data, PUBLIC_KEY_LABEL)?;
    let spki = spki::SubjectPublicKeyInfoRef::from_der(&der)
        .map_err(|e| Error::InvalidKeySpec(format!("not a SubjectPublicKeyInfo: {e}")))?;
    if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(Error::UnsupportedAlgorithm(format!(
            "public key algorithm {} is not RSA",
            spki.algorithm.oid
        )));
    }

    let public = rsa::RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| Error::InvalidKeySpec(format!("failed to parse RSA public key: {e}")))?;
    let key = PublicKeyMaterial::new(public);
    tracing::debug!(bits = key.bits(), "loaded RSA public key");
    Ok(key)
}

/// Load an RSA private key from PKCS#8 (`BEGIN PRIVATE KEY`) or PKCS#1
/// (`BEGIN RSA PRIVATE KEY`) PEM.
pub fn load_private_key(pem_data: &[u8]) -> Result<PrivateKeyMaterial, Error> {
    let text = pem_text(pem_data)?;

    let private = if text.contains(&begin_marker(RSA_PRIVATE_KEY_LABEL)) {
        use pkcs1::DecodeRsaPrivateKey;
        let der = pem_payload(pem_data, RSA_PRIVATE_KEY_LABEL)?;
        rsa::RsaPrivateKey::from_pkcs1_der(&der)
            .map_err(|e| Error::InvalidKeySpec(format!("failed to parse PKCS#1 RSA key: {e}")))?
    } else {
        use pkcs8::DecodePrivateKey;
        let der = pem_payload(pem_data, PRIVATE_KEY_LABEL)?;
        let info = pkcs8::PrivateKeyInfo::try_from(der.as_slice())
            .map_err(|e| Error::InvalidKeySpec(format!("not a PKCS#8 PrivateKeyInfo: {e}")))?;
        if info.algorithm.oid != RSA_ENCRYPTION {
            return Err(Error::UnsupportedAlgorithm(format!(
                "private key algorithm {} is not RSA",
                info.algorithm.oid
            )));
        }
        rsa::RsaPrivateKey::from_pkcs8_der(&der)
            .map_err(|e| Error::InvalidKeySpec(format!("failed to parse PKCS#8 RSA key: {e}")))?
    };

    Ok(PrivateKeyMaterial::new(private))
}

/// Read and load a PEM public key file.
pub fn load_public_key_file(path: &Path) -> Result<PublicKeyMaterial, Error> {
    let data = std::fs::read(path)?;
    load_public_key(&data)
}

/// Read and load a PEM private key file.
pub fn load_private_key_file(path: &Path) -> Result<PrivateKeyMaterial, Error> {
    let data = std::fs::read(path)?;
    load_private_key(&data)
}

// ── PEM helpers ──────────────────────────────────────────────────────

fn begin_marker(label: &str) -> String {
    format!("-----BEGIN {label}-----")
}

fn end_marker(label: &str) -> String {
    format!("-----END {label}-----")
}

fn pem_text(pem_data: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(pem_data)
        .map_err(|e| Error::InvalidPemFormat(format!("invalid PEM encoding: {e}")))
}

/// Decode the base64 body between the `label` markers.
fn pem_payload(pem_data: &[u8], label: &str) -> Result<Vec<u8>, Error> {
    let text = pem_text(pem_data)?;
    let begin = begin_marker(label);
    let end = end_marker(label);

    let start = text
        .find(&begin)
        .map(|i| i + begin.len())
        .ok_or_else(|| Error::InvalidPemFormat(format!("missing {begin} marker")))?;
    let stop = text[start..]
        .find(&end)
        .map(|i| start + i)
        .ok_or_else(|| Error::InvalidPemFormat(format!("missing {end} marker")))?;

    let body = &text[start..stop];
    if body.trim().is_empty() {
        return Err(Error::InvalidPemFormat(format!("empty {label} body")));
    }
    decode_base64(body).map_err(|e| Error::InvalidPemFormat(format!("invalid base64 in {label}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(name: &str) -> Vec<u8> {
        std::fs::read(format!("../../test-data/keys/{name}")).unwrap()
    }

    #[test]
    fn test_load_public_key() {
        let key = load_public_key(&read("rsa-2048-pubkey.pem")).unwrap();
        assert_eq!(key.bits(), 2048);
        assert_eq!(key.size(), 256);
        assert_eq!(key.exponent(), &rsa::BigUint::from(65537u32));
    }

    #[test]
    fn test_public_key_matches_private_key() {
        let public = load_public_key(&read("rsa-2048-pubkey.pem")).unwrap();
        let private = load_private_key(&read("rsa-2048-key.pem")).unwrap();
        assert_eq!(private.public_key(), public);
        assert_ne!(load_public_key(&read("other-rsa-2048-pubkey.pem")).unwrap(), public);
    }

    #[test]
    fn test_reflowed_pem_is_accepted() {
        let pem = String::from_utf8(read("rsa-2048-pubkey.pem")).unwrap();
        let body: String = pem
            .lines()
            .filter(|l| !l.starts_with("-----"))
            .collect();
        let reflowed = format!(
            "\r\n-----BEGIN PUBLIC KEY-----  {}\r\n   {}-----END PUBLIC KEY-----\n",
            &body[..100],
            &body[100..]
        );
        let a = load_public_key(reflowed.as_bytes()).unwrap();
        let b = load_public_key(pem.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_markers() {
        let err = load_public_key(b"MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8A").err().unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));

        let err = load_public_key(b"-----BEGIN PUBLIC KEY-----\nMIIB\n").err().unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));

        let err = load_public_key(b"-----END PUBLIC KEY-----\n-----BEGIN PUBLIC KEY-----\n")
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));
    }

    #[test]
    fn test_empty_and_bad_base64() {
        let err = load_public_key(b"-----BEGIN PUBLIC KEY-----\n\n-----END PUBLIC KEY-----")
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));

        let err = load_public_key(b"-----BEGIN PUBLIC KEY-----\n!!!!\n-----END PUBLIC KEY-----")
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));
    }

    #[test]
    fn test_not_spki_is_invalid_key_spec() {
        let err = load_public_key(b"-----BEGIN PUBLIC KEY-----\naGVsbG8gd29ybGQ=\n-----END PUBLIC KEY-----")
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidKeySpec(_)));
    }

    #[test]
    fn test_ec_key_is_unsupported() {
        let err = load_public_key(&read("ec-p256-pubkey.pem")).err().unwrap();
        assert!(matches!(err, Error::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_private_key_pem_is_not_a_public_key() {
        let err = load_public_key(&read("rsa-2048-key.pem")).err().unwrap();
        assert!(matches!(err, Error::InvalidPemFormat(_)));
    }

    #[test]
    fn test_load_key_files() {
        let dir = std::path::Path::new("../../test-data/keys");
        assert!(load_public_key_file(&dir.join("rsa-2048-pubkey.pem")).is_ok());
        assert!(load_private_key_file(&dir.join("rsa-2048-key.pem")).is_ok());
        let err = load_public_key_file(&dir.join("missing.pem")).err().unwrap();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_private_key_debug_hides_material() {
        let key = load_private_key(&read("rsa-2048-key.pem")).unwrap();
        assert_eq!(format!("{key:?}"), "RSA private key (2048 bits)");
    }
}
