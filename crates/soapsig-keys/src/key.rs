#![forbid(unsafe_code)]

//! RSA key material.

use rsa::traits::PublicKeyParts;
use soapsig_crypto::SigningKey;

/// RSA public-key parameters decoded from a SubjectPublicKeyInfo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    public: rsa::RsaPublicKey,
}

impl PublicKeyMaterial {
    pub fn new(public: rsa::RsaPublicKey) -> Self {
        Self { public }
    }

    pub fn modulus(&self) -> &rsa::BigUint {
        self.public.n()
    }

    pub fn exponent(&self) -> &rsa::BigUint {
        self.public.e()
    }

    /// Modulus length in bytes.
    pub fn size(&self) -> usize {
        self.public.size()
    }

    pub fn bits(&self) -> usize {
        self.public.n().bits()
    }

    /// Convert to a `SigningKey` for use with crypto algorithms.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::RsaPublic(self.public.clone())
    }
}

/// An RSA private key, used to produce signatures.
pub struct PrivateKeyMaterial {
    private: rsa::RsaPrivateKey,
}

impl PrivateKeyMaterial {
    pub fn new(private: rsa::RsaPrivateKey) -> Self {
        Self { private }
    }

    pub fn public_key(&self) -> PublicKeyMaterial {
        PublicKeyMaterial::new(self.private.to_public_key())
    }

    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::Rsa(self.private.clone())
    }
}

impl std::fmt::Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSA private key ({} bits)", self.private.n().bits())
    }
}
