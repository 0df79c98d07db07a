use super::*;
use cookbook::LoadOptions;

fn corpus() -> DocSet {
    DocSet::from_sources(
        vec![
            (Language::Zh, "intro.md", "# 介绍\n".to_owned()),
            (Language::En, "intro.md", "# Intro\n\n## Install\n\n### Pip\n".to_owned()),
            (Language::En, "guide/memory.md", "# Memory\n".to_owned()),
        ],
        LoadOptions::default(),
    )
    .unwrap()
}

#[test]
fn list_prints_sorted_sidebar() {
    let out = list(&corpus(), Language::En, "");
    assert_eq!(out, "en:intro\tIntro\nen:guide/memory\tMemory\n");
}

#[test]
fn list_applies_query() {
    let out = list(&corpus(), Language::En, "MEM");
    assert_eq!(out, "en:guide/memory\tMemory\n");
}

#[test]
fn list_all_spans_languages_in_load_order() {
    assert_eq!(list_all(&corpus()), "zh:intro\nen:intro\nen:guide/memory\n");
}

#[test]
fn headings_are_indented_by_depth() {
    let out = headings(&corpus(), "en:intro").unwrap();
    assert_eq!(out, "Intro #intro\n  Install #install\n    Pip #pip\n");
}

#[test]
fn unknown_doc_is_an_error() {
    assert!(matches!(headings(&corpus(), "en:nope"), Err(CliError::UnknownDoc(id)) if id == "en:nope"));
    assert!(matches!(render(&corpus(), "fr:intro"), Err(CliError::UnknownDoc(_))));
}

#[test]
fn resolve_describes_suffix_match() {
    let out = resolve(&corpus(), "#en:memory:x", Language::Zh);
    assert!(out.contains("language: en\n"));
    assert!(out.contains("doc: en:guide/memory\n"));
    assert!(out.contains("heading: x\n"));
}

#[test]
fn resolve_empty_fragment_uses_preference() {
    let out = resolve(&corpus(), "", Language::Zh);
    assert!(out.contains("doc: zh:intro\n"));
    assert!(out.contains("heading: -\n"));
}

#[test]
fn render_wraps_markdown_body() {
    let html = render(&corpus(), "en:guide/memory").unwrap();
    assert!(html.starts_with("<div class=\"markdown-body\">"));
    assert!(html.contains("id=\"memory\""));
}
