#![forbid(unsafe_code)]

//! Key loading for legacy SOAP body signatures.
//!
//! Public keys arrive as PEM-wrapped SubjectPublicKeyInfo; private keys
//! (signing side only) as PKCS#8 or PKCS#1 PEM. Only RSA is accepted.

pub mod key;
pub mod loader;

pub use key::{PrivateKeyMaterial, PublicKeyMaterial};
pub use loader::{load_private_key, load_private_key_file, load_public_key, load_public_key_file};
