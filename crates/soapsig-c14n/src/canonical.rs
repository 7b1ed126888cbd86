#![forbid(unsafe_code)]

//! Serializer for owned elements.
//!
//! The canonical form:
//! - has no XML declaration and no namespace declarations
//! - outputs attributes sorted by name
//! - renders empty elements as a start/end tag pair
//! - escapes text and attribute values per C14N rules
//! - drops comments

use crate::escape;
use crate::render::Attr;
use soapsig_xml::{Element, XmlNode};

/// Write `element` and its subtree in canonical form.
pub fn write_element(element: &Element, output: &mut Vec<u8>) {
    let mut attrs: Vec<Attr<'_>> = element
        .attributes()
        .iter()
        .map(|a| Attr {
            name: &a.name,
            value: &a.value,
        })
        .collect();
    attrs.sort();

    output.push(b'<');
    output.extend_from_slice(element.name().as_bytes());
    for attr in &attrs {
        attr.render_into(output);
    }
    output.push(b'>');

    for child in element.children() {
        write_node(child, output);
    }

    output.extend_from_slice(b"</");
    output.extend_from_slice(element.name().as_bytes());
    output.push(b'>');
}

fn write_node(node: &XmlNode, output: &mut Vec<u8>) {
    match node {
        XmlNode::Element(e) => write_element(e, output),
        XmlNode::Text(text) => escape::write_text(text, output),
        XmlNode::Comment(_) => {}
        XmlNode::ProcessingInstruction { target, data } => {
            output.extend_from_slice(b"<?");
            output.extend_from_slice(target.as_bytes());
            if let Some(data) = data.as_deref().filter(|d| !d.is_empty()) {
                output.push(b' ');
                escape::write_pi(data, output);
            }
            output.extend_from_slice(b"?>");
        }
    }
}
