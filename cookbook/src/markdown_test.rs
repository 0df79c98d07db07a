use super::*;

const DOC: &str = "\
# Agent Basics

Intro text.

## Overview

### Setup `pip`

#### Deep detail

## Overview

```python
# not a heading
```
";

#[test]
fn all_headings_in_document_order() {
    let headings = all_headings(DOC);
    let slugs: Vec<&str> = headings.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, vec!["agent-basics", "overview", "setup-pip", "deep-detail", "overview-1"]);
}

#[test]
fn inline_code_contributes_to_heading_text() {
    let headings = all_headings(DOC);
    assert_eq!(headings[2].text, "Setup pip");
    assert_eq!(headings[2].depth, 3);
}

#[test]
fn extraction_caps_at_max_depth() {
    let headings = extract_headings(DOC, 2);
    let depths: Vec<u8> = headings.iter().map(|h| h.depth).collect();
    assert_eq!(depths, vec![1, 2, 2]);
}

#[test]
fn capped_extraction_keeps_full_sequence_slugs() {
    let doc = "#### Overview\n\n## Overview\n";
    let headings = extract_headings(doc, 2);
    assert_eq!(headings.len(), 1);
    // The skipped h4 still claimed `overview` first.
    assert_eq!(headings[0].slug, "overview-1");
}

#[test]
fn max_depth_is_clamped() {
    assert_eq!(extract_headings(DOC, 0).len(), 1);
    assert_eq!(extract_headings(DOC, 9).len(), 5);
}

#[test]
fn duplicate_overview_headings_are_unique() {
    let headings = extract_headings("## Overview\n\n## Overview\n", DEFAULT_MAX_DEPTH);
    assert_eq!(headings[0].slug, "overview");
    assert_eq!(headings[1].slug, "overview-1");
}

#[test]
fn title_is_first_level_one_heading() {
    assert_eq!(extract_title(DOC).as_deref(), Some("Agent Basics"));
    assert_eq!(extract_title("## Only h2\n"), None);
    assert_eq!(extract_title("Setext Title\n============\n").as_deref(), Some("Setext Title"));
}

#[test]
fn fallback_title_from_file_name() {
    assert_eq!(fallback_title_from_path("guides/getting-started.md"), "Getting Started");
    assert_eq!(fallback_title_from_path("multi_agent_chat.MD"), "Multi Agent Chat");
    assert_eq!(fallback_title_from_path(".md"), "Untitled");
}

#[test]
fn strip_md_extension_is_case_insensitive() {
    assert_eq!(strip_md_extension("a/b.md"), "a/b");
    assert_eq!(strip_md_extension("a/b.Md"), "a/b");
    assert_eq!(strip_md_extension("a/b.txt"), "a/b.txt");
    assert_eq!(strip_md_extension("md"), "md");
}
