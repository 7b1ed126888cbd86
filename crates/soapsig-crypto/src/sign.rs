#![forbid(unsafe_code)]

//! RSA PKCS#1 v1.5 signatures over SHA-512.

use crate::digest;
use rsa::traits::PublicKeyParts;
use signature::hazmat::{PrehashSigner, PrehashVerifier};
use signature::SignatureEncoding;
use soapsig_core::{algorithm, Error};

/// Key material for signature operations.
pub enum SigningKey {
    Rsa(rsa::RsaPrivateKey),
    RsaPublic(rsa::RsaPublicKey),
}

impl SigningKey {
    /// The public half of the key.
    pub fn public_key(&self) -> rsa::RsaPublicKey {
        match self {
            Self::Rsa(pk) => pk.to_public_key(),
            Self::RsaPublic(pk) => pk.clone(),
        }
    }

    /// Modulus length in bytes, which is also the signature length.
    pub fn size(&self) -> usize {
        match self {
            Self::Rsa(pk) => pk.size(),
            Self::RsaPublic(pk) => pk.size(),
        }
    }
}

/// Trait for signature algorithms.
pub trait SignatureAlgorithm: Send + Sync {
    /// JCA-style algorithm name (e.g. `SHA512withRSA`).
    fn name(&self) -> &'static str;
    fn uri(&self) -> &'static str;
    fn sign(&self, key: &SigningKey, data: &[u8]) -> Result<Vec<u8>, Error>;
    /// Verify `signature` over `data`.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for signatures
    /// that cannot be checked at all.
    fn verify(&self, key: &SigningKey, data: &[u8], signature: &[u8]) -> Result<bool, Error>;
}

// ── RSA PKCS#1 v1.5 / SHA-512 ────────────────────────────────────────

pub struct RsaPkcs1v15Sha512;

impl SignatureAlgorithm for RsaPkcs1v15Sha512 {
    fn name(&self) -> &'static str {
        algorithm::SHA512_WITH_RSA
    }

    fn uri(&self) -> &'static str {
        algorithm::RSA_SHA512
    }

    fn sign(&self, key: &SigningKey, data: &[u8]) -> Result<Vec<u8>, Error> {
        let SigningKey::Rsa(private_key) = key else {
            return Err(Error::Crypto("RSA private key required for signing".into()));
        };
        let hashed = digest::sha512(data);
        let sk = rsa::pkcs1v15::SigningKey::<sha2::Sha512>::new(private_key.clone());
        let sig = sk
            .sign_prehash(&hashed)
            .map_err(|e| Error::Crypto(format!("RSA signing failed: {e}")))?;
        Ok(sig.to_vec())
    }

    fn verify(&self, key: &SigningKey, data: &[u8], sig_bytes: &[u8]) -> Result<bool, Error> {
        let expected = key.size();
        if sig_bytes.len() != expected {
            return Err(Error::InvalidSignatureEncoding(format!(
                "signature is {} bytes, RSA key requires {expected}",
                sig_bytes.len()
            )));
        }
        let sig = rsa::pkcs1v15::Signature::try_from(sig_bytes)
            .map_err(|e| Error::InvalidSignatureEncoding(format!("invalid RSA signature: {e}")))?;

        let hashed = digest::sha512(data);
        let vk = rsa::pkcs1v15::VerifyingKey::<sha2::Sha512>::new(key.public_key());
        let valid = vk.verify_prehash(&hashed, &sig).is_ok();
        tracing::debug!(
            data_len = data.len(),
            key_bits = expected * 8,
            valid,
            "RSA PKCS#1 v1.5 SHA-512 verification"
        );
        Ok(valid)
    }
}
