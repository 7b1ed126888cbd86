#![forbid(unsafe_code)]

//! Canonical XML 1.0 without comments, applied to namespace-free element
//! trees produced by `soapsig_xml::strip`.
//!
//! Algorithm URI: `http://www.w3.org/TR/2001/REC-xml-c14n-20010315`
//!
//! Because the input trees carry no namespaces, no namespace declarations
//! are ever emitted. Output is written directly into a caller-owned buffer
//! so several subtrees can be concatenated without separators.

pub mod canonical;
pub mod escape;
pub mod render;

use soapsig_xml::Element;

/// Canonicalize a single element into a new buffer.
pub fn canonicalize(element: &Element) -> Vec<u8> {
    let mut output = Vec::new();
    canonical::write_element(element, &mut output);
    output
}

/// Canonicalize a single element, appending to `output`.
pub fn canonicalize_into(element: &Element, output: &mut Vec<u8>) {
    canonical::write_element(element, output);
}
