#![forbid(unsafe_code)]

//! Parsed message wrapper over roxmltree.

use crate::path;
use soapsig_core::{ns, Error};

/// A parsed SOAP-like message.
///
/// Borrows the input text; the tree is immutable once parsed. Text nodes are
/// kept exactly as they appear, including whitespace-only ones.
pub struct Message<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> Message<'input> {
    /// Parse a message with namespace awareness.
    pub fn parse(text: &'input str) -> Result<Self, Error> {
        let doc = roxmltree::Document::parse_with_options(text, crate::parsing_options())
            .map_err(|e| Error::MalformedXml(e.to_string()))?;
        tracing::trace!(bytes = text.len(), "parsed message");
        Ok(Self { doc })
    }

    /// Parse a message from raw bytes, which must be UTF-8.
    pub fn parse_bytes(data: &'input [u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::MalformedXml(format!("invalid UTF-8: {e}")))?;
        Self::parse(text)
    }

    /// The raw message text.
    pub fn text(&self) -> &'input str {
        self.doc.input_text()
    }

    /// The underlying parsed document.
    pub fn document(&self) -> &roxmltree::Document<'input> {
        &self.doc
    }

    /// The document element, if it is the legacy `Envelope`.
    pub fn envelope(&self) -> Option<roxmltree::Node<'_, 'input>> {
        let root = self.doc.root_element();
        path::is_element(&root, ns::SOAP_ENV, ns::node::ENVELOPE).then_some(root)
    }

    /// All `Header` children of the envelope, in document order.
    pub fn headers(&self) -> Vec<roxmltree::Node<'_, 'input>> {
        match self.envelope() {
            Some(env) => path::find_child_elements(env, ns::SOAP_ENV, ns::node::HEADER),
            None => Vec::new(),
        }
    }

    /// The first `Body` child of the envelope.
    pub fn body(&self) -> Option<roxmltree::Node<'_, 'input>> {
        let env = self.envelope()?;
        path::find_child_element(env, ns::SOAP_ENV, ns::node::BODY)
    }

    /// The first `Signature` element under any envelope header.
    ///
    /// Only the local name is matched on this last step.
    pub fn signature_element(&self) -> Option<roxmltree::Node<'_, 'input>> {
        self.headers()
            .into_iter()
            .find_map(|header| path::find_child_by_local_name(header, ns::node::SIGNATURE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = r#"<s:Envelope xmlns:s="http://www.w3.org/2001/06/soap-envelope">
  <s:Header><Signature>abc</Signature></s:Header>
  <s:Body><Foo/></s:Body>
</s:Envelope>"#;

    #[test]
    fn test_parse_and_locate() {
        let msg = Message::parse(MSG).unwrap();
        assert!(msg.envelope().is_some());
        assert_eq!(msg.headers().len(), 1);
        assert_eq!(msg.body().unwrap().tag_name().name(), "Body");
        assert_eq!(msg.signature_element().unwrap().text(), Some("abc"));
        assert_eq!(msg.text(), MSG);
    }

    #[test]
    fn test_malformed() {
        let err = Message::parse("<Envelope><Body></Envelope>").err().unwrap();
        assert!(matches!(err, Error::MalformedXml(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Message::parse_bytes(&[0x3c, 0xff, 0x3e]).err().unwrap();
        assert!(matches!(err, Error::MalformedXml(_)));
    }

    #[test]
    fn test_standard_soap_namespace_is_not_the_envelope() {
        let xml = r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope"><s:Body/></s:Envelope>"#;
        let msg = Message::parse(xml).unwrap();
        assert!(msg.envelope().is_none());
        assert!(msg.body().is_none());
    }

    #[test]
    fn test_signature_in_any_namespace() {
        let xml = r#"<s:Envelope xmlns:s="http://www.w3.org/2001/06/soap-envelope">
  <s:Header><d:Signature xmlns:d="urn:x">q</d:Signature></s:Header>
</s:Envelope>"#;
        let msg = Message::parse(xml).unwrap();
        assert_eq!(msg.signature_element().unwrap().text(), Some("q"));
    }

    #[test]
    fn test_signature_outside_header_is_ignored() {
        let xml = r#"<s:Envelope xmlns:s="http://www.w3.org/2001/06/soap-envelope">
  <s:Body><Signature>q</Signature></s:Body>
</s:Envelope>"#;
        let msg = Message::parse(xml).unwrap();
        assert!(msg.signature_element().is_none());
    }
}
