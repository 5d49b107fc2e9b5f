//! hast → HTML serialization.
//!
//! Renders a tree back to markup text. Property names are emitted verbatim
//! apart from `className`, which maps to the `class` attribute with its
//! tokens space-joined. No attribute-name sanitization happens here: a
//! transform that set an odd attribute name reaches the output as-is.

use prelang_core::{Element, Node, PropertyValue};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes a tree to an HTML string.
pub fn to_html(tree: &Node) -> String {
    let mut out = String::new();
    render_node(tree, &mut out);
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                render_node(child, out);
            }
        }
        Node::Element(element) => render_element(element, out),
        Node::Text(text) => push_escaped_text(&text.value, out),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.value);
            out.push_str("-->");
        }
    }
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag_name);

    for (name, value) in element.properties.iter() {
        let attr_name = if name == "className" { "class" } else { name };
        match value {
            // An empty plain value renders as a bare boolean attribute.
            PropertyValue::Plain(value) if value.is_empty() => {
                out.push(' ');
                out.push_str(attr_name);
            }
            PropertyValue::Plain(value) => {
                push_attribute(attr_name, value, out);
            }
            PropertyValue::Tokens(tokens) => {
                push_attribute(attr_name, &tokens.join(" "), out);
            }
        }
    }

    if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        render_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn push_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped_attr(value, out);
    out.push('"');
}

/// Escapes a string for use in a double-quoted HTML attribute value.
fn push_escaped_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escapes text content.
fn push_escaped_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}
