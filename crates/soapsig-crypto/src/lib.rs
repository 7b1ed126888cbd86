#![forbid(unsafe_code)]

//! Cryptographic primitives for legacy SOAP body signatures.
//!
//! The profile uses a single signature scheme (RSA PKCS#1 v1.5 over
//! SHA-512), reachable through the process-wide [`AlgorithmRegistry`],
//! which is built once by [`init`].

pub mod digest;
pub mod registry;
pub mod sign;

pub use registry::{init, registry, AlgorithmRegistry};
pub use sign::{SignatureAlgorithm, SigningKey};
