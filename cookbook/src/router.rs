//! URL fragment routing for the cookbook.
//!
//! DESIGN
//! ======
//! The fragment encodes `(language, document, heading)` as
//! `#lang:docPath[:headingSlug]`, each segment percent-encoded. Older links
//! use `#docPath[:headingSlug]` with no language; those are still accepted.
//!
//! Parsing never fails. A fragment that names nothing we know degrades step
//! by step (exact id, filename suffix in the language, first document of the
//! language, first document overall) so the page always shows something.
//!
//! Writing back goes through [`HistorySink`], which hides the browser's
//! `history.replaceState` and lets the no-op guard be tested natively.

use std::borrow::Cow;

use crate::doc::{Doc, DocSet, Language, doc_id};

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

/// A resolved fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub language: Language,
    pub doc_id: Option<String>,
    pub heading: Option<String>,
}

impl Route {
    /// Route for `doc`, keeping `heading`.
    #[must_use]
    pub fn to_doc(doc: &Doc, heading: Option<String>) -> Self {
        Self { language: doc.language, doc_id: Some(doc.id.clone()), heading }
    }

    fn fallback(doc: Option<&Doc>, language: Language) -> Self {
        match doc {
            Some(doc) => Self::to_doc(doc, None),
            None => Self { language, doc_id: None, heading: None },
        }
    }

    /// Encoded fragment for this route, or `None` without a document.
    #[must_use]
    pub fn fragment(&self, docs: &DocSet) -> Option<String> {
        let doc = docs.get(self.doc_id.as_deref()?)?;
        Some(encode_fragment(doc.language, doc.stem(), self.heading.as_deref()))
    }
}

/// Fragment pieces before resolution against a corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFragment {
    pub language: Option<Language>,
    pub doc: String,
    pub heading: Option<String>,
}

/// Split and percent-decode a fragment. A leading `#` is optional.
#[must_use]
pub fn split_fragment(fragment: &str) -> RawFragment {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut segments = fragment.split(':').map(decode_segment);
    let first = segments.next().unwrap_or_default();

    match Language::from_code(&first) {
        Some(language) => RawFragment {
            language: Some(language),
            doc: segments.next().unwrap_or_default(),
            heading: segments.next().filter(|slug| !slug.is_empty()),
        },
        None => RawFragment {
            language: None,
            doc: first,
            heading: segments.next().filter(|slug| !slug.is_empty()),
        },
    }
}

/// Resolve a fragment with the default language as the preference.
#[must_use]
pub fn parse_fragment(fragment: &str, docs: &DocSet) -> Route {
    resolve_fragment(fragment, docs, Language::default())
}

/// Resolve a fragment against `docs`.
///
/// `preferred` picks the language when the fragment is empty.
#[must_use]
pub fn resolve_fragment(fragment: &str, docs: &DocSet, preferred: Language) -> Route {
    let raw = split_fragment(fragment);
    match raw.language {
        Some(language) => resolve_in_language(docs, language, &raw.doc, raw.heading),
        None if raw.doc.is_empty() => {
            Route::fallback(docs.first_of(preferred).or_else(|| docs.first()), preferred)
        }
        None => resolve_legacy(docs, &raw.doc, raw.heading),
    }
}

fn resolve_in_language(docs: &DocSet, language: Language, doc: &str, heading: Option<String>) -> Route {
    if !doc.is_empty() {
        if let Some(found) = docs.get(&doc_id(language, doc)) {
            return Route::to_doc(found, heading);
        }
        if let Some(found) = find_by_suffix(docs, language, doc) {
            return Route::to_doc(found, heading);
        }
    }
    match docs.first_of(language) {
        Some(first) => Route::to_doc(first, None),
        None => Route::fallback(docs.first(), language),
    }
}

fn resolve_legacy(docs: &DocSet, doc: &str, heading: Option<String>) -> Route {
    for language in Language::ALL {
        if let Some(found) = docs.get(&doc_id(language, doc)) {
            return Route::to_doc(found, heading);
        }
    }
    Route::fallback(docs.first(), Language::ALL[0])
}

/// A document of `language` whose path is `name` or ends in `/name`.
fn find_by_suffix<'a>(docs: &'a DocSet, language: Language, name: &str) -> Option<&'a Doc> {
    let name = crate::markdown::strip_md_extension(name);
    let suffix = format!("/{name}");
    docs.docs()
        .iter()
        .filter(|doc| doc.language == language)
        .find(|doc| {
            let stem = doc.stem();
            stem == name || stem.ends_with(&suffix)
        })
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_owned(), Cow::into_owned)
}

/// `#lang:enc(docPath)[:enc(slug)]`.
#[must_use]
pub fn encode_fragment(language: Language, doc_path: &str, heading: Option<&str>) -> String {
    let mut out = format!("#{}:{}", language.code(), urlencoding::encode(doc_path));
    if let Some(slug) = heading.filter(|slug| !slug.is_empty()) {
        out.push(':');
        out.push_str(&urlencoding::encode(slug));
    }
    out
}

// =============================================================================
// HISTORY
// =============================================================================

/// Where the current fragment is read from and written to.
pub trait HistorySink {
    /// The current fragment, including the leading `#` (empty when none).
    fn current_hash(&self) -> String;

    /// Replace the current history entry's fragment without adding one.
    fn replace_hash(&mut self, hash: &str);
}

/// Write `fragment` unless it is already current. Returns whether a write
/// happened.
pub fn sync_history<H: HistorySink + ?Sized>(sink: &mut H, fragment: &str) -> bool {
    if sink.current_hash() == fragment {
        return false;
    }
    sink.replace_hash(fragment);
    true
}
