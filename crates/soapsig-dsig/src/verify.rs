#![forbid(unsafe_code)]

//! Signature lookup, body canonicalization and verification.
//!
//! Processing order:
//! 1. Parse the message (namespace aware)
//! 2. Read the signature text from `/Envelope/Header/Signature`
//! 3. Strip and canonicalize each element child of `/Envelope/Body`
//! 4. Decode the signature and check it against SHA-512 of the buffer

use soapsig_c14n::canonicalize_into;
use soapsig_core::encoding::decode_base64;
use soapsig_core::{ns, Error};
use soapsig_keys::PublicKeyMaterial;
use soapsig_xml::{path, strip_namespaces, Message};

/// Extract the trimmed base64 signature text from a message.
pub fn extract_signature(message: &str) -> Result<String, Error> {
    let msg = Message::parse(message)?;
    extract_signature_from(&msg)
}

/// Extract the trimmed base64 signature text from a parsed message.
///
/// The text is the string-value of the first `Signature` element under an
/// envelope header, trimmed of leading and trailing control characters and
/// spaces. An empty result is an error, never a failed verification.
pub fn extract_signature_from(msg: &Message<'_>) -> Result<String, Error> {
    if msg.envelope().is_none() {
        return Err(Error::MissingSignature(format!(
            "no {} element in namespace {} (expected {})",
            ns::node::ENVELOPE,
            ns::SOAP_ENV,
            ns::path::SIGNATURE
        )));
    }
    if msg.headers().is_empty() {
        return Err(Error::MissingSignature(format!(
            "no {} element in namespace {} (expected {})",
            ns::node::HEADER,
            ns::SOAP_ENV,
            ns::path::SIGNATURE
        )));
    }
    let sig_node = msg.signature_element().ok_or_else(|| {
        Error::MissingSignature(format!("no Signature element at {}", ns::path::SIGNATURE))
    })?;

    let value = path::string_value(sig_node);
    let trimmed = value.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return Err(Error::MissingSignature(format!(
            "Signature element at {} is empty",
            ns::path::SIGNATURE
        )));
    }
    tracing::debug!(chars = trimmed.len(), "extracted signature value");
    Ok(trimmed.to_owned())
}

/// Canonicalize the body of a message.
pub fn canonicalize_body(message: &str) -> Result<Vec<u8>, Error> {
    let msg = Message::parse(message)?;
    canonicalize_body_from(&msg)
}

/// Canonicalize the body of a parsed message.
///
/// Each element child of the body is stripped of namespaces and written in
/// canonical form; the results are concatenated in document order with
/// nothing in between. Text and comments directly under the body are
/// skipped. A body without element children yields an empty buffer.
pub fn canonicalize_body_from(msg: &Message<'_>) -> Result<Vec<u8>, Error> {
    if msg.envelope().is_none() {
        return Err(Error::MissingBody(format!(
            "no {} element in namespace {} (expected {})",
            ns::node::ENVELOPE,
            ns::SOAP_ENV,
            ns::path::BODY
        )));
    }
    let body = msg
        .body()
        .ok_or_else(|| Error::MissingBody(format!("no Body element at {}", ns::path::BODY)))?;

    let mut output = Vec::new();
    let mut elements = 0usize;
    for child in body.children() {
        if let Some(stripped) = strip_namespaces(child) {
            canonicalize_into(&stripped, &mut output);
            elements += 1;
        }
    }
    tracing::debug!(elements, bytes = output.len(), "canonicalized body");
    Ok(output)
}

/// Decode a base64 signature value.
pub fn decode_signature(signature_b64: &str) -> Result<Vec<u8>, Error> {
    let bytes = decode_base64(signature_b64)
        .map_err(|e| Error::InvalidSignatureEncoding(format!("signature is not base64: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::InvalidSignatureEncoding("signature is empty".into()));
    }
    Ok(bytes)
}

/// Verify `signature_b64` over the canonical body of `message`.
///
/// Returns `Ok(false)` when the signature is well formed but does not
/// match; every other failure is an error.
pub fn verify(message: &str, signature_b64: &str, key: &PublicKeyMaterial) -> Result<bool, Error> {
    let msg = Message::parse(message)?;
    verify_parsed(&msg, signature_b64, key)
}

/// Extract the signature from `message` and verify it.
pub fn verify_message(message: &str, key: &PublicKeyMaterial) -> Result<bool, Error> {
    let msg = Message::parse(message)?;
    let signature_b64 = extract_signature_from(&msg)?;
    verify_parsed(&msg, &signature_b64, key)
}

fn verify_parsed(
    msg: &Message<'_>,
    signature_b64: &str,
    key: &PublicKeyMaterial,
) -> Result<bool, Error> {
    let canonical = canonicalize_body_from(msg)?;
    let signature = decode_signature(signature_b64)?;
    let alg = soapsig_crypto::registry().profile_signature()?;
    alg.verify(&key.to_signing_key(), &canonical, &signature)
}
