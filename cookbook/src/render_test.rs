use super::*;
use crate::markdown::all_headings;

#[test]
fn output_is_wrapped_in_markdown_body() {
    let html = render_markdown("Hello");
    assert!(html.starts_with("<div class=\"markdown-body\">"));
    assert!(html.trim_end().ends_with("</div>"));
}

#[test]
fn headings_carry_slug_ids_and_anchor() {
    let html = render_body("## Getting Started\n");
    assert!(html.contains(
        "<h2 id=\"getting-started\" class=\"markdown-heading\"><a href=\"#getting-started\">Getting Started</a></h2>"
    ));
}

#[test]
fn heading_ids_match_extracted_slugs() {
    let doc = "# Intro\n\n## Overview\n\n#### Deep\n\n## Overview\n";
    let html = render_body(doc);
    for heading in all_headings(doc) {
        assert!(html.contains(&format!("id=\"{}\"", heading.slug)), "missing {}", heading.slug);
    }
    assert!(html.contains("id=\"overview-1\""));
}

#[test]
fn paragraphs_and_inline_code_are_classed() {
    let html = render_body("Run `pip install` now.\n");
    assert!(html.contains("<p class=\"markdown-paragraph\">Run "));
    assert!(html.contains("<code class=\"markdown-inline-code\">pip install</code>"));
}

#[test]
fn links_are_classed() {
    let html = render_body("[docs](https://example.com \"Docs\")\n");
    assert!(html.contains(
        "<a href=\"https://example.com\" title=\"Docs\" class=\"markdown-link\">docs</a>"
    ));
}

#[test]
fn links_inside_headings_keep_only_text() {
    let html = render_body("## See [api](https://example.com)\n");
    assert!(html.contains("<a href=\"#see-api\">See api</a></h2>"));
    assert!(!html.contains("markdown-link"));
}

#[test]
fn fenced_code_gets_language_class() {
    let html = render_body("```python {linenos}\nprint(\"hi\")\n```\n");
    assert!(html.contains("<pre class=\"language-python\"><code class=\"markdown-code-block\">"));
    assert!(html.contains("print("));
    assert!(html.contains("</code></pre>"));
}

#[test]
fn code_without_language_has_plain_pre() {
    let html = render_body("```\nplain\n```\n");
    assert!(html.contains("<pre><code class=\"markdown-code-block\">plain"));
}

#[test]
fn tables_are_classed_with_alignment() {
    let html = render_body("| a | b |\n|:--|--:|\n| 1 | 2 |\n");
    assert!(html.contains("<table class=\"markdown-table\">"));
    assert!(html.contains("<th class=\"markdown-table-header\" style=\"text-align: left\">a</th>"));
    assert!(html.contains("<th class=\"markdown-table-header\" style=\"text-align: right\">b</th>"));
    assert!(html.contains("<td class=\"markdown-table-cell\" style=\"text-align: left\">1</td>"));
    assert!(html.contains("<td class=\"markdown-table-cell\" style=\"text-align: right\">2</td>"));
    assert!(html.contains("</tbody></table>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_body("<script>alert(1)</script>\n\nText with <b>bold</b>.\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("bold"));
}

#[test]
fn text_is_escaped() {
    let html = render_body("a < b & c\n");
    assert!(html.contains("a &lt; b &amp; c"));
}

#[test]
fn strikethrough_and_tasklists_are_enabled() {
    let html = render_body("~~old~~\n\n- [x] done\n");
    assert!(html.contains("<del>old</del>"));
    assert!(html.contains("checkbox"));
}

#[test]
fn escape_html_covers_quotes() {
    assert_eq!(escape_html("<\"'&>"), "&lt;&quot;&#39;&amp;&gt;");
}
