#![forbid(unsafe_code)]

/// Errors produced while verifying or producing a legacy SOAP body signature.
///
/// Every variant is terminal for the current call. A signature that decodes
/// correctly but does not match the body is not an error; verification
/// reports it as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("signature not found: {0}")]
    MissingSignature(String),

    #[error("SOAP body not found: {0}")]
    MissingBody(String),

    #[error("invalid PEM format: {0}")]
    InvalidPemFormat(String),

    #[error("invalid key specification: {0}")]
    InvalidKeySpec(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("cryptographic error: {0}")]
    Crypto(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short name of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MalformedXml(_) => "parse",
            Self::MissingSignature(_) => "signature lookup",
            Self::MissingBody(_) => "body canonicalization",
            Self::InvalidPemFormat(_) | Self::InvalidKeySpec(_) => "key loading",
            Self::InvalidSignatureEncoding(_) => "signature decoding",
            Self::UnsupportedAlgorithm(_) | Self::Crypto(_) => "crypto",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
