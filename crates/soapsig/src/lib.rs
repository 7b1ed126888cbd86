#![forbid(unsafe_code)]

//! Verify RSA/SHA-512 signatures over the body of legacy SOAP messages.
//!
//! ```no_run
//! let message = std::fs::read_to_string("message.xml")?;
//! let key = soapsig::load_public_key(&std::fs::read("public.pem")?)?;
//! let signature = soapsig::extract_signature(&message)?;
//! let valid = soapsig::verify(&message, &signature, &key)?;
//! println!("Signature is valid: {valid}");
//! # Ok::<(), soapsig::Error>(())
//! ```
//!
//! The library never prints; it emits `tracing` events that a caller may
//! collect by installing a subscriber.

pub use soapsig_c14n as c14n;
pub use soapsig_core as core;
pub use soapsig_crypto as crypto;
pub use soapsig_dsig as dsig;
pub use soapsig_keys as keys;
pub use soapsig_xml as xml;

pub use soapsig_core::{Error, Result};
pub use soapsig_dsig::{
    canonicalize_body, extract_signature, sign_message, verify, verify_message,
};
pub use soapsig_keys::{
    load_private_key, load_public_key, PrivateKeyMaterial, PublicKeyMaterial,
};

/// One-time, process-wide setup of the crypto support.
///
/// Safe to call from any thread, any number of times; only the first call
/// does any work. Verification also works without it, performing the same
/// setup on first use.
pub fn init() {
    soapsig_crypto::init();
}
