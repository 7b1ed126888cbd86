#![forbid(unsafe_code)]

//! Legacy SOAP body signatures.
//!
//! A message carries a base64 RSA/SHA-512 signature in
//! `/Envelope/Header/Signature`. The signed bytes are the concatenated
//! canonical forms of the body's child elements after all namespace
//! information has been stripped from them.

pub mod sign;
pub mod verify;

pub use sign::sign_message;
pub use verify::{canonicalize_body, decode_signature, extract_signature, verify, verify_message};
