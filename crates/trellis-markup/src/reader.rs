//! Lenient event-driven parser for screen markup.
//!
//! Parse failures are swallowed, never surfaced: the interactive editor
//! feeds transient invalid states through here while the user is typing,
//! and the contract is an empty forest rather than an error.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use trellis_core::{Node, PropValue};

/// Parse markup text into an ordered forest of nodes.
///
/// The root wrapper element is unwrapped; its immediate element children
/// become the top-level forest entries. Empty, whitespace-only, or
/// malformed input yields an empty forest.
pub fn parse_document(source: &str) -> Vec<Node> {
    parse_inner(source).unwrap_or_default()
}

fn parse_inner(source: &str) -> Option<Vec<Node>> {
    let mut reader = Reader::from_str(source);
    let mut roots: Vec<Node> = Vec::new();
    // One frame per open element; `None` marks the root wrapper, which is
    // unwrapped rather than turned into a node.
    let mut stack: Vec<Option<Node>> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.is_empty() {
                    stack.push(None);
                } else {
                    stack.push(Some(node_from_element(&e)?));
                }
            }
            Ok(Event::Empty(e)) => {
                if !stack.is_empty() {
                    let node = node_from_element(&e)?;
                    attach(&mut stack, &mut roots, node);
                }
                // A self-closed element at the top level is the wrapper of
                // an empty document.
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(Some(node)) => attach(&mut stack, &mut roots, node),
                Some(None) => {}
                None => return None,
            },
            Ok(Event::Eof) => {
                if !stack.is_empty() {
                    return None;
                }
                return Some(roots);
            }
            // The format is attribute-only; text, CDATA, comments and
            // declarations carry no model content.
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

/// Attach a completed node to the innermost open element, or to the forest
/// when the wrapper is the innermost frame.
fn attach(stack: &mut [Option<Node>], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(Some(parent)) => parent.children.push(node),
        _ => roots.push(node),
    }
}

/// Build a node from an element tag and its attributes.
///
/// `id` and `name` are reserved; every other attribute is coerced into the
/// property map. A repeated attribute name keeps the last value.
fn node_from_element(e: &BytesStart) -> Option<Node> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut id = String::new();
    let mut name: Option<String> = None;
    let mut properties: Vec<(String, PropValue)> = Vec::new();

    let mut attrs = e.attributes();
    attrs.with_checks(false);
    for attr in attrs {
        let attr = attr.ok()?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().ok()?;
        match key.as_str() {
            "id" => id = value.into_owned(),
            "name" => name = Some(value.into_owned()),
            _ => properties.push((key, PropValue::coerce(&value))),
        }
    }

    let mut node = Node::with_id(tag, id);
    if let Some(name) = name {
        node.name = name;
    }
    for (key, value) in properties {
        node.properties.insert(key, value);
    }
    Some(node)
}
