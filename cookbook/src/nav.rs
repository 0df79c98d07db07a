//! Cookbook navigation state: which language, document and heading are shown.
//!
//! Every transition takes the corpus by reference and reports whether the
//! state changed, so UI code can skip redundant history writes and renders.

use crate::doc::{Doc, DocSet, Language};
use crate::router::Route;

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;

pub const SITE_TITLE: &str = "Agentscope Cookbook";

/// `localStorage` key holding the preferred language code.
pub const LANGUAGE_STORAGE_KEY: &str = "cookbook-language";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    language: Language,
    doc_id: Option<String>,
    heading: Option<String>,
}

impl Navigator {
    #[must_use]
    pub fn from_route(route: Route) -> Self {
        Self { language: route.language, doc_id: route.doc_id, heading: route.heading }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    #[must_use]
    pub fn active_doc<'a>(&self, docs: &'a DocSet) -> Option<&'a Doc> {
        docs.get(self.doc_id.as_deref()?)
    }

    /// Show document `id`. Unknown ids and the active id are ignored.
    pub fn select_doc(&mut self, docs: &DocSet, id: &str) -> bool {
        if self.doc_id.as_deref() == Some(id) {
            return false;
        }
        let Some(doc) = docs.get(id) else {
            return false;
        };
        self.language = doc.language;
        self.doc_id = Some(doc.id.clone());
        self.heading = None;
        true
    }

    /// Mark `slug` as the current heading if the active document has it.
    pub fn navigate_heading(&mut self, docs: &DocSet, slug: &str) -> bool {
        if self.heading.as_deref() == Some(slug) {
            return false;
        }
        match self.active_doc(docs) {
            Some(doc) if doc.has_heading(slug) => {
                self.heading = Some(slug.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Change language, moving to the same page in the new language when it
    /// exists and to the language's first page otherwise. A language with no
    /// pages leaves no active document.
    pub fn switch_language(&mut self, docs: &DocSet, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        let target = self
            .active_doc(docs)
            .and_then(|doc| docs.counterpart(doc, language))
            .or_else(|| docs.first_of(language))
            .map(|doc| doc.id.clone());
        self.language = language;
        self.doc_id = target;
        self.heading = None;
        true
    }

    /// Bring the state back in line with the corpus: the active document
    /// belongs to the current language and the heading exists in it.
    pub fn reconcile(&mut self, docs: &DocSet) -> bool {
        let before = self.clone();
        let in_language = self.active_doc(docs).is_some_and(|doc| doc.language == self.language);
        if !in_language {
            let target = self
                .active_doc(docs)
                .and_then(|doc| docs.counterpart(doc, self.language))
                .or_else(|| docs.first_of(self.language))
                .map(|doc| doc.id.clone());
            self.doc_id = target;
            self.heading = None;
        }
        let keep_heading = match (self.active_doc(docs), self.heading.as_deref()) {
            (Some(doc), Some(slug)) => doc.has_heading(slug),
            _ => false,
        };
        if !keep_heading {
            self.heading = None;
        }
        *self != before
    }

    /// The current route, for serialisation.
    #[must_use]
    pub fn route(&self) -> Route {
        Route { language: self.language, doc_id: self.doc_id.clone(), heading: self.heading.clone() }
    }

    /// Encoded fragment for the current state.
    #[must_use]
    pub fn fragment(&self, docs: &DocSet) -> Option<String> {
        self.route().fragment(docs)
    }

    /// Value for `document.title`.
    #[must_use]
    pub fn title(&self, docs: &DocSet) -> String {
        match self.active_doc(docs) {
            Some(doc) => format!("{} · {SITE_TITLE}", doc.title),
            None => SITE_TITLE.to_owned(),
        }
    }
}
