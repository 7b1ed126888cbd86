#![forbid(unsafe_code)]

//! Entity escaping for C14N output.
//!
//! - Text nodes: `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `\r` → `&#xD;`
//! - Attribute values: `&`, `<`, `"` → `&quot;`, `\t` → `&#x9;`,
//!   `\n` → `&#xA;`, `\r` → `&#xD;`
//! - PI data: `\r` → `&#xD;`

/// Append escaped text node content.
pub fn write_text(s: &str, out: &mut Vec<u8>) {
    write_escaped(s, out, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\r' => Some("&#xD;"),
        _ => None,
    });
}

/// Append an escaped attribute value.
pub fn write_attr(s: &str, out: &mut Vec<u8>) {
    write_escaped(s, out, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        '\t' => Some("&#x9;"),
        '\n' => Some("&#xA;"),
        '\r' => Some("&#xD;"),
        _ => None,
    });
}

/// Append processing instruction data.
pub fn write_pi(s: &str, out: &mut Vec<u8>) {
    write_escaped(s, out, |ch| (ch == '\r').then_some("&#xD;"));
}

fn write_escaped(s: &str, out: &mut Vec<u8>, entity: impl Fn(char) -> Option<&'static str>) {
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        if let Some(rep) = entity(ch) {
            out.extend_from_slice(s[start..i].as_bytes());
            out.extend_from_slice(rep.as_bytes());
            start = i + ch.len_utf8();
        }
    }
    out.extend_from_slice(s[start..].as_bytes());
}
