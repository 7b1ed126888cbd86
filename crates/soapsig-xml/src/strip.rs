#![forbid(unsafe_code)]

//! Namespace stripping.
//!
//! Rebuilds a parsed element as an owned tree in which:
//! - every element is renamed to its local name;
//! - attributes whose name starts with `xmlns` are dropped;
//! - attributes bound to a namespace (written with a prefix such as
//!   `cus:version` or `xml:lang`) are dropped entirely, not renamed;
//! - every other node is copied unchanged, in order.
//!
//! Dropping namespaced attributes matches the legacy producer, which signs
//! bodies without them. The source tree is never modified.

use crate::tree::{Element, XmlNode};
use soapsig_core::ns;

/// Strip namespaces from an element subtree.
///
/// Returns `None` if `node` is not an element.
pub fn strip_namespaces(node: roxmltree::Node<'_, '_>) -> Option<Element> {
    if !node.is_element() {
        return None;
    }

    let mut element = Element::new(node.tag_name().name());

    for attr in node.attributes() {
        if keep_attribute(&attr) {
            element.set_attribute(attr.name(), attr.value());
        }
    }

    for child in node.children() {
        if let Some(stripped) = strip_node(child) {
            element.append_child(stripped);
        }
    }

    Some(element)
}

fn keep_attribute(attr: &roxmltree::Attribute<'_, '_>) -> bool {
    !attr.name().starts_with(ns::XMLNS_ATTR_PREFIX) && attr.namespace().is_none()
}

fn strip_node(node: roxmltree::Node<'_, '_>) -> Option<XmlNode> {
    match node.node_type() {
        roxmltree::NodeType::Element => strip_namespaces(node).map(XmlNode::Element),
        roxmltree::NodeType::Text => node.text().map(|t| XmlNode::Text(t.to_owned())),
        roxmltree::NodeType::Comment => node.text().map(|t| XmlNode::Comment(t.to_owned())),
        roxmltree::NodeType::PI => node.pi().map(|pi| XmlNode::ProcessingInstruction {
            target: pi.target.to_owned(),
            data: pi.value.map(str::to_owned),
        }),
        roxmltree::NodeType::Root => None,
    }
}
