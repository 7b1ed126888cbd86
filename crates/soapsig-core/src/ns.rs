#![forbid(unsafe_code)]

//! Namespace and element-name constants of the legacy message profile.

/// SOAP envelope namespace used by the legacy producer.
///
/// This is not the W3C SOAP 1.2 namespace. It must be matched verbatim.
pub const SOAP_ENV: &str = "http://www.w3.org/2001/06/soap-envelope";

/// Attribute names starting with this string are dropped when stripping
/// namespaces, whether or not they are real namespace declarations.
pub const XMLNS_ATTR_PREFIX: &str = "xmlns";

// ── Element names ────────────────────────────────────────────────────

pub mod node {
    pub const ENVELOPE: &str = "Envelope";
    pub const HEADER: &str = "Header";
    pub const BODY: &str = "Body";
    pub const SIGNATURE: &str = "Signature";
}

// ── Fixed paths (used in error messages) ─────────────────────────────

pub mod path {
    pub const ENVELOPE: &str = "/Envelope";
    pub const HEADER: &str = "/Envelope/Header";
    pub const SIGNATURE: &str = "/Envelope/Header/Signature";
    pub const BODY: &str = "/Envelope/Body";
}
