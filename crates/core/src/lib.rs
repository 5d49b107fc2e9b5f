#![deny(missing_docs)]
//! prelang core: the hast-like tree model, element visitor, and parse glue.

/// Core error types.
pub mod error;
/// Markdown parsing utilities.
pub mod parse;
/// The hast-like tree model.
pub mod tree;
/// Depth-first element traversal with parent access.
pub mod visit;

pub use error::{PrelangError, SourceLocation};
pub use parse::{ParseOptions, parse_mdast, parse_mdast_with_options};
pub use tree::{Comment, Element, Node, Properties, PropertyValue, Root, Text};
pub use visit::{VisitParent, VisitorResult, visit_elements};
