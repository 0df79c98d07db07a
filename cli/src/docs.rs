//! Cookbook corpus inspection from the terminal.
//!
//! Every command loads the corpus from disk, so the output matches what
//! the server would serve for the same directory and heading depth.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use std::fmt::Write as _;

use cookbook::router::resolve_fragment;
use cookbook::sidebar::sidebar;
use cookbook::{DocSet, Language, render_markdown};

use crate::CliError;

/// One `id<TAB>title` line per sidebar entry.
#[must_use]
pub fn list(docs: &DocSet, language: Language, query: &str) -> String {
    let mut out = String::new();
    for item in sidebar(docs, language, query) {
        let _ = writeln!(out, "{}\t{}", item.id, item.title);
    }
    out
}

/// Every document id across languages, in load order.
#[must_use]
pub fn list_all(docs: &DocSet) -> String {
    let mut out = String::new();
    for id in docs.ids() {
        let _ = writeln!(out, "{id}");
    }
    out
}

/// Indented outline of a document's headings.
///
/// # Errors
///
/// Returns [`CliError::UnknownDoc`] when `id` is not in the corpus.
pub fn headings(docs: &DocSet, id: &str) -> Result<String, CliError> {
    let doc = docs.get(id).ok_or_else(|| CliError::UnknownDoc(id.to_owned()))?;
    let mut out = String::new();
    for heading in &doc.headings {
        let indent = "  ".repeat(usize::from(heading.depth.saturating_sub(1)));
        let _ = writeln!(out, "{indent}{} #{}", heading.text, heading.slug);
    }
    Ok(out)
}

/// Resolve `fragment` the way the viewer would and describe the result.
#[must_use]
pub fn resolve(docs: &DocSet, fragment: &str, preferred: Language) -> String {
    let route = resolve_fragment(fragment, docs, preferred);
    let mut out = String::new();
    let _ = writeln!(out, "language: {}", route.language);
    let _ = writeln!(out, "doc: {}", route.doc_id.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "heading: {}", route.heading.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "fragment: {}", route.fragment(docs).unwrap_or_default());
    out
}

/// Rendered HTML of one document.
///
/// # Errors
///
/// Returns [`CliError::UnknownDoc`] when `id` is not in the corpus.
pub fn render(docs: &DocSet, id: &str) -> Result<String, CliError> {
    let doc = docs.get(id).ok_or_else(|| CliError::UnknownDoc(id.to_owned()))?;
    Ok(render_markdown(&doc.content))
}
