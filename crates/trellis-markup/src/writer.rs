//! Canonical writer for screen markup.
//!
//! The writer is the exact inverse surface of the reader for any forest the
//! reader could have produced: attribute order is fixed (`id`, `name`, then
//! properties in insertion order), indentation is two spaces per depth, and
//! leaves self-close.

use trellis_core::Node;

/// Wrapper element name of the canonical document.
pub const WRAPPER_TAG: &str = "lvgl";

/// Format version stamped on the wrapper element.
pub const FORMAT_VERSION: &str = "1.0";

/// Serialize a forest into canonical markup text.
pub fn serialize_document(forest: &[Node]) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "<{} version=\"{}\">",
        WRAPPER_TAG, FORMAT_VERSION
    ));
    for node in forest {
        write_node(node, 1, &mut lines);
    }
    lines.push(format!("</{}>", WRAPPER_TAG));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn write_node(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let tag = node.stripped_kind();

    let mut attrs = vec![
        format!("id=\"{}\"", escape_attr(node.id())),
        format!("name=\"{}\"", escape_attr(&node.name)),
    ];
    for (key, value) in &node.properties {
        attrs.push(format!(
            "{}=\"{}\"",
            key,
            escape_attr(&value.to_markup_string())
        ));
    }

    if node.children.is_empty() {
        lines.push(format!("{}<{} {}/>", indent, tag, attrs.join(" ")));
    } else {
        lines.push(format!("{}<{} {}>", indent, tag, attrs.join(" ")));
        for child in &node.children {
            write_node(child, depth + 1, lines);
        }
        lines.push(format!("{}</{}>", indent, tag));
    }
}

/// Escape an attribute value for double-quoted markup.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn empty_forest_serializes_to_bare_wrapper() {
        let text = serialize_document(&[]);
        assert_eq!(text, "<lvgl version=\"1.0\">\n</lvgl>\n");
        assert!(parse_document(&text).is_empty());
    }

    #[test]
    fn id_and_name_come_first_then_properties_in_insertion_order() {
        let node = Node::with_id("label", "t")
            .with_name("title")
            .with_property("text", "Hi")
            .with_property("x", 10.0);

        let text = serialize_document(&[node]);
        assert_eq!(
            text,
            "<lvgl version=\"1.0\">\n  <label id=\"t\" name=\"title\" text=\"Hi\" x=\"10\"/>\n</lvgl>\n"
        );
    }

    #[test]
    fn children_are_nested_and_indented() {
        let tree = Node::with_id("obj", "p").with_name("panel").with_child(
            Node::with_id("label", "t").with_name("title"),
        );

        let text = serialize_document(&[tree]);
        let expected = "<lvgl version=\"1.0\">\n\
                        \x20\x20<obj id=\"p\" name=\"panel\">\n\
                        \x20\x20\x20\x20<label id=\"t\" name=\"title\"/>\n\
                        \x20\x20</obj>\n\
                        </lvgl>\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn quotes_and_ampersands_are_escaped() {
        let node = Node::with_id("label", "t").with_property("text", r#"say "hi" & <go>"#);
        let text = serialize_document(&[node]);
        assert!(text.contains(r#"text="say &quot;hi&quot; &amp; &lt;go&gt;""#));

        let back = parse_document(&text);
        assert_eq!(
            back[0].get_property("text").unwrap().as_str(),
            Some(r#"say "hi" & <go>"#)
        );
    }

    #[test]
    fn serialize_is_idempotent_over_parse() {
        let source = r##"<lvgl version="1.0">
            <obj id="p" name="panel" bg_color="#112233">
              <label id="t" name="title" text="Hi"/>
              <switch id="s" name="power" checked="true"/>
            </obj>
        </lvgl>"##;

        let first = serialize_document(&parse_document(source));
        let second = serialize_document(&parse_document(&first));
        assert_eq!(first, second);
    }
}
