//! Markdown parsing utilities.

use crate::{PrelangError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
    /// Allow raw HTML nodes in the AST.
    pub raw_html: bool,
}

impl ParseOptions {
    /// Markdown-friendly defaults.
    pub const fn markdown() -> Self {
        Self {
            gfm: true,
            code_indented: true,
            raw_html: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            code_indented: self.code_indented,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Parse markdown into an MDAST tree using core options.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, PrelangError> {
    parse_mdast_with_options(input, &options.to_markdown())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, PrelangError> {
    markdown::to_mdast(input, options).map_err(|err| PrelangError::MarkdownAdapter {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_code_with_info_string() {
        let tree = parse_mdast(
            "```javascript\nconsole.log(\"hi\");\n```\n",
            &ParseOptions::markdown(),
        )
        .unwrap();

        let Node::Root(root) = tree else {
            panic!("expected root")
        };
        let Node::Code(code) = &root.children[0] else {
            panic!("expected code block")
        };
        assert_eq!(code.lang.as_deref(), Some("javascript"));
        assert_eq!(code.value, "console.log(\"hi\");");
    }

    #[test]
    fn bare_fence_has_no_lang() {
        let tree = parse_mdast("```\nplain\n```\n", &ParseOptions::markdown()).unwrap();
        let Node::Root(root) = tree else {
            panic!("expected root")
        };
        let Node::Code(code) = &root.children[0] else {
            panic!("expected code block")
        };
        assert_eq!(code.lang, None);
    }
}
