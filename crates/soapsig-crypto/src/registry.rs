#![forbid(unsafe_code)]

//! Process-wide algorithm registry.
//!
//! The registry is built exactly once. [`init`] may be called from any
//! number of threads, concurrently or repeatedly; the first caller builds
//! the registry and everyone else gets the same instance.

use crate::sign::SignatureAlgorithm;
use soapsig_core::{algorithm, Error};
use std::sync::OnceLock;

static REGISTRY: OnceLock<AlgorithmRegistry> = OnceLock::new();

/// Initialize the process-wide registry. Idempotent.
pub fn init() -> &'static AlgorithmRegistry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("initializing algorithm registry");
        AlgorithmRegistry::with_defaults()
    })
}

/// The process-wide registry, initializing it on first use.
pub fn registry() -> &'static AlgorithmRegistry {
    init()
}

/// Central registry for the profile's algorithms.
pub struct AlgorithmRegistry {
    signatures: Vec<Box<dyn SignatureAlgorithm>>,
}

impl AlgorithmRegistry {
    fn with_defaults() -> Self {
        Self {
            signatures: vec![Box::new(crate::sign::RsaPkcs1v15Sha512)],
        }
    }

    /// Look up a signature algorithm by JCA name or URI.
    pub fn signature(&self, id: &str) -> Result<&dyn SignatureAlgorithm, Error> {
        self.signatures
            .iter()
            .find(|alg| alg.name() == id || alg.uri() == id)
            .map(|alg| &**alg)
            .ok_or_else(|| Error::UnsupportedAlgorithm(format!("signature algorithm: {id}")))
    }

    /// The signature algorithm of the legacy profile.
    pub fn profile_signature(&self) -> Result<&dyn SignatureAlgorithm, Error> {
        self.signature(algorithm::SHA512_WITH_RSA)
    }

    /// Names of all registered signature algorithms.
    pub fn signature_names(&self) -> Vec<&'static str> {
        self.signatures.iter().map(|alg| alg.name()).collect()
    }
}
