//! mdast → hast conversion.
//!
//! Covers the node kinds ordinary GFM documents produce. The interesting case
//! for this workspace is fenced code: a fence with an info string becomes
//! `pre > code` with a `language-<lang>` class token on the code element,
//! which is what the pre-language transform later reads.

use markdown::mdast;
use prelang_core::{Element, Node, PropertyValue, Root};

/// Converts an mdast tree into a hast [`Node`] rooted at [`Root`].
///
/// A non-root input is wrapped in a fresh root.
pub fn to_hast(tree: &mdast::Node) -> Node {
    match tree {
        mdast::Node::Root(root) => Root::new(convert_children(&root.children)).into(),
        other => {
            let mut children = Vec::new();
            convert_node(other, &mut children);
            Root::new(children).into()
        }
    }
}

fn convert_children(nodes: &[mdast::Node]) -> Vec<Node> {
    let mut out = Vec::new();
    for node in nodes {
        convert_node(node, &mut out);
    }
    out
}

fn convert_node(node: &mdast::Node, out: &mut Vec<Node>) {
    match node {
        mdast::Node::Root(root) => out.extend(convert_children(&root.children)),
        mdast::Node::Text(text) => out.push(Node::text(text.value.clone())),
        mdast::Node::Paragraph(para) => {
            out.push(container("p", convert_children(&para.children)));
        }
        mdast::Node::Heading(heading) => {
            let depth = heading.depth.clamp(1, 6);
            out.push(container(
                &format!("h{}", depth),
                convert_children(&heading.children),
            ));
        }
        mdast::Node::Code(code) => out.push(convert_code(code)),
        mdast::Node::InlineCode(code) => {
            out.push(container("code", vec![Node::text(code.value.clone())]));
        }
        mdast::Node::Emphasis(em) => out.push(container("em", convert_children(&em.children))),
        mdast::Node::Strong(strong) => {
            out.push(container("strong", convert_children(&strong.children)));
        }
        mdast::Node::Delete(del) => out.push(container("del", convert_children(&del.children))),
        mdast::Node::Link(link) => out.push(convert_link(link)),
        mdast::Node::Image(image) => out.push(convert_image(image)),
        mdast::Node::List(list) => out.push(convert_list(list)),
        mdast::Node::ListItem(item) => out.push(convert_list_item(item)),
        mdast::Node::Blockquote(quote) => {
            out.push(container("blockquote", convert_children(&quote.children)));
        }
        mdast::Node::Break(_) => out.push(Element::new("br").into()),
        mdast::Node::ThematicBreak(_) => out.push(Element::new("hr").into()),
        mdast::Node::Table(table) => out.push(convert_table(table)),
        mdast::Node::Html(html) => {
            // Raw HTML is demoted to text; the serializer escapes it.
            log::debug!("Raw HTML in markdown will be escaped: {}", html.value);
            out.push(Node::text(html.value.clone()));
        }
        other => {
            log::warn!("Unhandled markdown node type: {:?}", other);
        }
    }
}

fn container(tag: &str, children: Vec<Node>) -> Node {
    let mut element = Element::new(tag);
    element.children = children;
    element.into()
}

/// Fenced or indented code: `pre > code`, with a `language-<lang>` class on
/// the code element when the fence carried an info string. The code text gets
/// a trailing newline, matching how fenced content renders.
fn convert_code(code: &mdast::Code) -> Node {
    let mut inner = Element::new("code");
    if let Some(lang) = &code.lang {
        inner
            .properties
            .set("className", PropertyValue::Tokens(vec![format!("language-{}", lang)]));
    }
    if !code.value.is_empty() {
        inner.children.push(Node::text(format!("{}\n", code.value)));
    }
    Element::new("pre").with_child(inner).into()
}

fn convert_link(link: &mdast::Link) -> Node {
    let mut element = Element::new("a").with_property("href", link.url.as_str());
    if let Some(title) = &link.title {
        element.properties.set("title", PropertyValue::from(title.as_str()));
    }
    element.children = convert_children(&link.children);
    element.into()
}

fn convert_image(image: &mdast::Image) -> Node {
    let mut element = Element::new("img")
        .with_property("src", image.url.as_str())
        .with_property("alt", image.alt.as_str());
    if let Some(title) = &image.title {
        element.properties.set("title", PropertyValue::from(title.as_str()));
    }
    element.into()
}

fn convert_list(list: &mdast::List) -> Node {
    let tag = if list.ordered { "ol" } else { "ul" };
    let mut element = Element::new(tag);
    if list.ordered
        && let Some(start) = list.start
        && start != 1
    {
        element.properties.set("start", PropertyValue::Plain(start.to_string()));
    }
    element.children = convert_children(&list.children);
    element.into()
}

/// List items keep their paragraph wrappers; task-list items (GFM) get the
/// `task-list-item` class and a leading disabled checkbox.
fn convert_list_item(item: &mdast::ListItem) -> Node {
    let mut element = Element::new("li");
    if let Some(checked) = item.checked {
        element
            .properties
            .set("className", PropertyValue::Tokens(vec!["task-list-item".to_string()]));
        let mut input = Element::new("input")
            .with_property("type", "checkbox")
            .with_property("disabled", "");
        if checked {
            input.properties.set("checked", PropertyValue::from(""));
        }
        element.children.push(input.into());
    }
    element.children.extend(convert_children(&item.children));
    element.into()
}

fn convert_table(table: &mdast::Table) -> Node {
    let mut element = Element::new("table");

    if let Some(mdast::Node::TableRow(head)) = table.children.first() {
        let head_row = convert_table_row(head, true, &table.align);
        element.children.push(container("thead", vec![head_row]));
    }

    if table.children.len() > 1 {
        let mut body_rows = Vec::new();
        for row in table.children.iter().skip(1) {
            if let mdast::Node::TableRow(row) = row {
                body_rows.push(convert_table_row(row, false, &table.align));
            }
        }
        element.children.push(container("tbody", body_rows));
    }

    element.into()
}

fn convert_table_row(row: &mdast::TableRow, is_header: bool, aligns: &[mdast::AlignKind]) -> Node {
    let tag = if is_header { "th" } else { "td" };
    let mut cells = Vec::new();

    for (i, cell) in row.children.iter().enumerate() {
        if let mdast::Node::TableCell(cell) = cell {
            let mut element = Element::new(tag);
            let align = match aligns.get(i) {
                Some(mdast::AlignKind::Left) => Some("left"),
                Some(mdast::AlignKind::Right) => Some("right"),
                Some(mdast::AlignKind::Center) => Some("center"),
                _ => None,
            };
            if let Some(align) = align {
                element.properties.set("align", PropertyValue::from(align));
            }
            element.children = convert_children(&cell.children);
            cells.push(element.into());
        }
    }

    container("tr", cells)
}
