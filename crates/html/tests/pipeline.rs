//! End-to-end pipeline tests: markdown → mdast → hast → annotate → HTML.

use insta::assert_snapshot;
use once_cell::sync::Lazy;
use prelang_core::{ParseOptions, parse_mdast};
use prelang_html::{PreLanguage, to_hast, to_html};

static OPTIONS: Lazy<ParseOptions> = Lazy::new(ParseOptions::markdown);

fn process(markdown: &str, option: Option<&str>) -> String {
    let mdast = parse_mdast(markdown, &OPTIONS).expect("markdown should parse");
    let mut tree = to_hast(&mdast);
    PreLanguage::new(option).annotate(&mut tree);
    to_html(&tree)
}

const SOURCE_WITH_LANGUAGE: &str = "```javascript\nconsole.log(\"ipikuka\");\n```\n";
const SOURCE_DIFF_LANGUAGE: &str = "```diff-javascript\nconsole.log(\"ipikuka\");\n```\n";
const SOURCE_NO_LANGUAGE: &str = "```\nconsole.log(\"ipikuka\");\n```\n";

#[test]
fn with_no_option() {
    assert_snapshot!(process(SOURCE_WITH_LANGUAGE, None), @r#"
    <pre class="javascript"><code class="language-javascript">console.log("ipikuka");
    </code></pre>
    "#);

    assert_snapshot!(process(SOURCE_DIFF_LANGUAGE, None), @r#"
    <pre class="javascript"><code class="language-diff-javascript">console.log("ipikuka");
    </code></pre>
    "#);

    assert_snapshot!(process(SOURCE_NO_LANGUAGE, None), @r#"
    <pre><code>console.log("ipikuka");
    </code></pre>
    "#);
}

#[test]
fn with_a_named_property() {
    assert_snapshot!(process(SOURCE_WITH_LANGUAGE, Some("data-language")), @r#"
    <pre data-language="javascript"><code class="language-javascript">console.log("ipikuka");
    </code></pre>
    "#);

    assert_snapshot!(process(SOURCE_DIFF_LANGUAGE, Some("data-language")), @r#"
    <pre data-language="javascript"><code class="language-diff-javascript">console.log("ipikuka");
    </code></pre>
    "#);

    assert_snapshot!(process(SOURCE_NO_LANGUAGE, Some("data-language")), @r#"
    <pre><code>console.log("ipikuka");
    </code></pre>
    "#);
}

#[test]
fn class_name_spelled_out_matches_the_default() {
    let example = "```javascript\nconst me = \"ipikuka\";\n```\n";
    assert_eq!(process(example, None), process(example, Some("className")));

    assert_snapshot!(process(example, Some("className")), @r#"
    <pre class="javascript"><code class="language-javascript">const me = "ipikuka";
    </code></pre>
    "#);
}

#[test]
fn event_attribute_escape_hatch_is_not_sanitized() {
    // The info string doubles as an injection vector; the transform passes it
    // through untouched and only the serializer's value escaping applies.
    let example = "```;alert(\"alert\")\nconst me = \"ipikuka\";\n```\n";

    assert_snapshot!(process(example, Some("onmouseover")), @r#"
    <pre mouseover=";alert(&quot;alert&quot;)"><code class="language-;alert(&quot;alert&quot;)">const me = "ipikuka";
    </code></pre>
    "#);
}

#[test]
fn surrounding_document_is_rendered_untouched() {
    let example = "# Title\n\nSome *text* with `inline` code.\n\n```rust\nfn main() {}\n```\n";

    assert_snapshot!(process(example, None), @r#"
    <h1>Title</h1><p>Some <em>text</em> with <code>inline</code> code.</p><pre class="rust"><code class="language-rust">fn main() {}
    </code></pre>
    "#);
}

#[test]
fn annotating_twice_appends_twice_to_the_class_list() {
    let mdast = parse_mdast(SOURCE_WITH_LANGUAGE, &OPTIONS).unwrap();
    let mut tree = to_hast(&mdast);
    let annotator = PreLanguage::new(None);
    annotator.annotate(&mut tree);
    annotator.annotate(&mut tree);

    // Class-list annotation is a monotonic append with no deduplication.
    assert_snapshot!(to_html(&tree), @r#"
    <pre class="javascript javascript"><code class="language-javascript">console.log("ipikuka");
    </code></pre>
    "#);
}

#[test]
fn annotated_tree_serializes_to_hast_compatible_json() {
    let mdast = parse_mdast("```rust\nfn main() {}\n```\n", &OPTIONS).unwrap();
    let mut tree = to_hast(&mdast);
    PreLanguage::new(Some("data-language")).annotate(&mut tree);

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        serde_json::json!({
            "type": "root",
            "children": [{
                "type": "element",
                "tagName": "pre",
                "properties": { "data-language": "rust" },
                "children": [{
                    "type": "element",
                    "tagName": "code",
                    "properties": { "className": ["language-rust"] },
                    "children": [{ "type": "text", "value": "fn main() {}\n" }]
                }]
            }]
        })
    );
}
