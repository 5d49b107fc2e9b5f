//! Copies the detected code-block language onto the wrapping `<pre>` element.
//!
//! Markdown pipelines leave the language on the `<code>` child as a
//! `language-<name>` class token; themes and copy-button UIs usually want it
//! on the `<pre>` wrapper instead. This transform walks the tree once and,
//! for every `pre > code` pair, writes the language to a configurable target
//! property on the `<pre>` element.
//!
//! Policy choices, in case a downstream consumer relies on a different
//! lineage of this transform:
//! - only `language-` class tokens are recognized (not `lang-`);
//! - a `diff-` sub-prefix is stripped (`language-diff-python` → `python`);
//! - the parent must be tagged `pre`, so inline code is never annotated;
//! - the token's casing is preserved.

use prelang_core::{Node, Properties, PropertyValue, VisitParent, VisitorResult, visit_elements};

/// Property key of the class list; also the default annotation target.
pub const CLASS_LIST_PROPERTY: &str = "className";

const LANGUAGE_PREFIX: &str = "language-";
const DIFF_PREFIX: &str = "diff-";

/// Annotates `<pre>` wrappers with the language of their `<code>` child.
///
/// Built once from an optional target-property name, then applied to any
/// number of trees with [`annotate`](PreLanguage::annotate).
#[derive(Clone, Debug)]
pub struct PreLanguage {
    property: String,
}

impl PreLanguage {
    /// Resolves the target property from the option string.
    ///
    /// - `None` or empty: the class list; the language is appended as a class
    ///   token next to whatever classes the `<pre>` already has.
    /// - A name starting with `on`: the remainder after those two characters.
    ///   This lets callers name attributes a sanitizing serializer would
    ///   reject when spelled directly (`onmouseover` → `mouseover`). The
    ///   resulting name is not validated; whether it is safe to emit is the
    ///   serializer's concern, not this transform's.
    /// - Anything else: used verbatim (`data-language`).
    pub fn new(option: Option<&str>) -> Self {
        let property = match option {
            None => CLASS_LIST_PROPERTY.to_string(),
            Some("") => CLASS_LIST_PROPERTY.to_string(),
            Some(name) => match name.strip_prefix("on") {
                Some(rest) => rest.to_string(),
                None => name.to_string(),
            },
        };
        Self { property }
    }

    /// The resolved target property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Annotates every `pre > code` pair in the tree, in place.
    ///
    /// Never fails: a code node with no recognizable language, a parent that
    /// is not a `<pre>` element, or a class value of the wrong shape is a
    /// silent no-op for that node, and the walk continues.
    pub fn annotate(&self, tree: &mut Node) {
        visit_elements(tree, &mut |node, _index, parent| {
            if node.tag_name != "code" {
                return VisitorResult::Continue;
            }
            let VisitParent::Element {
                tag_name,
                properties,
            } = parent
            else {
                return VisitorResult::Continue;
            };
            if tag_name != "pre" {
                return VisitorResult::Continue;
            }
            let Some(language) = detect_language(&node.properties) else {
                return VisitorResult::Continue;
            };

            log::trace!("annotating <pre> with language {:?}", language);
            if self.property == CLASS_LIST_PROPERTY {
                properties.append_token(CLASS_LIST_PROPERTY, language);
            } else {
                properties.set(&*self.property, PropertyValue::Plain(language));
            }
            VisitorResult::Continue
        });
    }
}

impl Default for PreLanguage {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Extracts the language from a code element's class tokens.
///
/// Takes the first `language-` token, strips a `diff-` sub-prefix, and
/// rejects an empty remainder (a bare `language-` or `language-diff-` class
/// carries no language).
fn detect_language(properties: &Properties) -> Option<String> {
    let tokens = properties.get(CLASS_LIST_PROPERTY)?.as_tokens()?;
    let matched = tokens
        .iter()
        .find_map(|token| token.strip_prefix(LANGUAGE_PREFIX))?;
    let language = matched.strip_prefix(DIFF_PREFIX).unwrap_or(matched);
    if language.is_empty() {
        return None;
    }
    Some(language.to_string())
}
