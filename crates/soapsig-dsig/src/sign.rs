#![forbid(unsafe_code)]

//! Producing legacy SOAP body signatures.
//!
//! Signing works on a template: a message whose header already contains a
//! `Signature` element (usually empty). The body is canonicalized exactly
//! as the verifier does, signed with RSA PKCS#1 v1.5 over SHA-512, and the
//! base64 signature replaces the content of the `Signature` element. All
//! other bytes of the message are left untouched.

use crate::verify::canonicalize_body_from;
use soapsig_core::encoding::encode_base64;
use soapsig_core::{ns, Error};
use soapsig_keys::PrivateKeyMaterial;
use soapsig_xml::Message;

/// Sign the body of `template` and return the signed message text.
pub fn sign_message(template: &str, key: &PrivateKeyMaterial) -> Result<String, Error> {
    let msg = Message::parse(template)?;

    let sig_node = msg.signature_element().ok_or_else(|| {
        Error::MissingSignature(format!(
            "template has no Signature element at {}",
            ns::path::SIGNATURE
        ))
    })?;

    let canonical = canonicalize_body_from(&msg)?;
    let alg = soapsig_crypto::registry().profile_signature()?;
    let signature = alg.sign(&key.to_signing_key(), &canonical)?;
    let value = encode_base64(&signature);
    tracing::debug!(bytes = canonical.len(), "signed body");

    let range = sig_node.range();
    let source = &template[range.clone()];
    let mut out = String::with_capacity(template.len() + value.len());
    out.push_str(&template[..range.start]);

    if let Some(start_tag) = source.strip_suffix("/>") {
        // <Signature/> becomes <Signature>value</Signature>
        let qname = source[1..]
            .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .next()
            .unwrap_or(ns::node::SIGNATURE);
        out.push_str(start_tag.trim_end());
        out.push('>');
        out.push_str(&value);
        out.push_str("</");
        out.push_str(qname);
        out.push('>');
    } else {
        let end_tag = source.rfind("</").ok_or_else(|| {
            Error::MalformedXml("Signature element has no end tag".into())
        })?;
        let content_start = match sig_node.first_child() {
            Some(child) => child.range().start - range.start,
            None => end_tag,
        };
        out.push_str(&source[..content_start]);
        out.push_str(&value);
        out.push_str(&source[end_tag..]);
    }

    out.push_str(&template[range.end..]);
    Ok(out)
}
