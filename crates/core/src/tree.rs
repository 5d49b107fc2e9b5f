//! The hast-like tree model: element nodes, text, comments, and properties.

use serde::Serialize;
use serde::ser::SerializeMap;

/// A node in the document tree.
///
/// Serializes to hast-compatible JSON (`{"type": "element", "tagName": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// The document root.
    Root(Root),
    /// A markup element with a tag name, properties, and children.
    Element(Element),
    /// A text node.
    Text(Text),
    /// An HTML comment.
    Comment(Comment),
}

impl Node {
    /// Returns the node's children, if it is a kind that carries any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    /// Returns the inner element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Builds a text node.
    pub fn text(value: impl Into<String>) -> Node {
        Node::Text(Text {
            value: value.into(),
        })
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Node {
        Node::Root(root)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

/// The document root; holds top-level children only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Root {
    /// Top-level child nodes in document order.
    pub children: Vec<Node>,
}

impl Root {
    /// Builds a root node over the given children.
    pub fn new(children: Vec<Node>) -> Root {
        Root { children }
    }
}

/// A markup element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lowercased tag name (`pre`, `code`, ...). Casing is the builder's
    /// responsibility; the tree does not normalize it.
    pub tag_name: String,
    /// Attribute map with unique keys, in insertion order.
    pub properties: Properties,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Builds an empty element with the given tag name.
    pub fn new(tag_name: impl Into<String>) -> Element {
        Element {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Adds a property, replacing any previous value under the same key.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Element {
        self.properties.set(name, value.into());
        self
    }

    /// Adds a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Element {
        self.children.push(child.into());
        self
    }
}

/// A text node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    /// The literal text value, unescaped.
    pub value: String,
}

/// An HTML comment node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comment {
    /// The comment body, without the `<!--`/`-->` delimiters.
    pub value: String,
}

/// An element property value: a single string or an ordered token list.
///
/// Absence is expressed by the key not being present in [`Properties`], so a
/// read site narrows in two steps: lookup, then shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A plain string value (`data-language="rust"`).
    Plain(String),
    /// An ordered list of whitespace-separable tokens (`class="a b"`).
    Tokens(Vec<String>),
}

impl PropertyValue {
    /// Narrows to a plain string value.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            PropertyValue::Plain(value) => Some(value),
            PropertyValue::Tokens(_) => None,
        }
    }

    /// Narrows to an ordered token list.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Plain(_) => None,
            PropertyValue::Tokens(tokens) => Some(tokens),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> PropertyValue {
        PropertyValue::Plain(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> PropertyValue {
        PropertyValue::Plain(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(tokens: Vec<String>) -> PropertyValue {
        PropertyValue::Tokens(tokens)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(tokens: Vec<&str>) -> PropertyValue {
        PropertyValue::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

/// An ordered property map with unique keys.
///
/// Insertion order is preserved so serialization stays deterministic; lookups
/// are linear, which is fine for the handful of attributes elements carry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties(Vec<(String, PropertyValue)>);

impl Properties {
    /// Builds an empty property map.
    pub fn new() -> Properties {
        Properties(Vec::new())
    }

    /// True when no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up a property value by key.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Sets a property, replacing any previous value under the same key.
    pub fn set(&mut self, name: impl Into<String>, value: PropertyValue) {
        let name = name.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Appends a token to the list stored under `name`.
    ///
    /// A missing entry becomes a single-token list; a `Plain` value is
    /// promoted to a list with the new token appended after it. Tokens are
    /// never deduplicated.
    pub fn append_token(&mut self, name: &str, token: String) {
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => match slot {
                PropertyValue::Tokens(tokens) => tokens.push(token),
                PropertyValue::Plain(existing) => {
                    let promoted = vec![std::mem::take(existing), token];
                    *slot = PropertyValue::Tokens(promoted);
                }
            },
            None => {
                self.0
                    .push((name.to_string(), PropertyValue::Tokens(vec![token])));
            }
        }
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
