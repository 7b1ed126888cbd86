#![forbid(unsafe_code)]

//! XML handling for the soapsig workspace.
//!
//! Parses messages with `roxmltree` (namespace aware, whitespace preserved),
//! resolves the fixed envelope paths, and rebuilds body elements as owned,
//! namespace-free trees ready for canonicalization.

pub mod document;
pub mod path;
pub mod strip;
pub mod tree;

pub use document::Message;
pub use strip::strip_namespaces;
pub use tree::{Attribute, Element, XmlNode};

/// Return roxmltree parsing options that allow DTD.
///
/// DTD is allowed because roxmltree does not expand external entities or
/// perform entity substitution beyond internal entity declarations, so it
/// is safe. Legacy producers occasionally emit a DOCTYPE prologue.
pub fn parsing_options() -> roxmltree::ParsingOptions {
    roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    }
}
