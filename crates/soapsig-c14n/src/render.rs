#![forbid(unsafe_code)]

//! Attribute rendering and ordering for C14N output.

use crate::escape;
use std::cmp::Ordering;

/// An unqualified attribute to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl Attr<'_> {
    /// Append ` name="value"` to `out`.
    pub fn render_into(&self, out: &mut Vec<u8>) {
        out.push(b' ');
        out.extend_from_slice(self.name.as_bytes());
        out.extend_from_slice(b"=\"");
        escape::write_attr(self.value, out);
        out.push(b'"');
    }
}

impl Ord for Attr<'_> {
    // Names compare by UTF-16 code units, which is the order the legacy
    // producer's canonicalizer uses. It differs from byte order only when
    // supplementary-plane characters meet U+E000..U+FFFF.
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .encode_utf16()
            .cmp(other.name.encode_utf16())
            .then_with(|| self.value.cmp(other.value))
    }
}

impl PartialOrd for Attr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
