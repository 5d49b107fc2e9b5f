#![deny(missing_docs)]
//! prelang html engine: mdast conversion, HTML rendering, and tree transforms.

/// mdast → hast conversion.
pub mod from_mdast;
/// hast → HTML serialization.
pub mod render;
/// Tree transforms (pre-language annotation).
pub mod transform;

pub use from_mdast::to_hast;
pub use render::to_html;
pub use transform::pre_language::{CLASS_LIST_PROPERTY, PreLanguage};
