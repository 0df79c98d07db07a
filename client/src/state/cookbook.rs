//! Cookbook viewer state: the loaded corpus plus navigation.
//!
//! The corpus arrives once from `/api/docs` and is shared behind an `Arc`
//! so reading the signal never copies document bodies.

#[cfg(test)]
#[path = "cookbook_test.rs"]
mod cookbook_test;

use std::sync::Arc;

use cookbook::router::{resolve_fragment, split_fragment};
use cookbook::sidebar::{SidebarItem, sidebar};
use cookbook::{Doc, DocSet, Heading, Language, Navigator};

pub const NO_SELECTION: &str = "Please select a document";
pub const NO_DOCUMENTS: &str = "No documents available";
pub const NO_MATCHES: &str = "No matching documents found";

/// Loading lifecycle for the corpus fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct CookbookState {
    pub docs: Arc<DocSet>,
    pub nav: Navigator,
    /// Sidebar search box contents.
    pub query: String,
    pub status: LoadStatus,
}

impl CookbookState {
    /// Install a freshly fetched corpus and resolve the initial fragment.
    pub fn load(&mut self, docs: DocSet, fragment: &str, preferred: Language) {
        let mut nav = Navigator::from_route(resolve_fragment(fragment, &docs, preferred));
        nav.reconcile(&docs);
        self.docs = Arc::new(docs);
        self.nav = nav;
        self.status = LoadStatus::Ready;
    }

    pub fn fail(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    /// Re-resolve after the fragment changed underneath us (back/forward,
    /// or a bare `#slug` heading anchor inside the rendered document).
    pub fn apply_fragment(&mut self, fragment: &str) -> bool {
        let raw = split_fragment(fragment);
        if raw.language.is_none()
            && raw.heading.is_none()
            && self.active_doc().is_some_and(|doc| doc.has_heading(&raw.doc))
        {
            return self.navigate_heading(&raw.doc);
        }
        let mut nav = Navigator::from_route(resolve_fragment(fragment, &self.docs, self.nav.language()));
        nav.reconcile(&self.docs);
        if nav == self.nav {
            return false;
        }
        self.nav = nav;
        true
    }

    #[must_use]
    pub fn active_doc(&self) -> Option<&Doc> {
        self.nav.active_doc(&self.docs)
    }

    #[must_use]
    pub fn active_headings(&self) -> Vec<Heading> {
        self.active_doc().map(|doc| doc.headings.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        sidebar(&self.docs, self.nav.language(), &self.query)
    }

    /// Header label: the active document's title, or a prompt to pick one.
    #[must_use]
    pub fn active_title(&self) -> &str {
        self.active_doc().map_or(NO_SELECTION, |doc| doc.title.as_str())
    }

    #[must_use]
    pub fn fragment(&self) -> Option<String> {
        self.nav.fragment(&self.docs)
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.nav.title(&self.docs)
    }

    pub fn select_doc(&mut self, id: &str) -> bool {
        self.nav.select_doc(&self.docs, id)
    }

    pub fn navigate_heading(&mut self, slug: &str) -> bool {
        self.nav.navigate_heading(&self.docs, slug)
    }

    pub fn switch_language(&mut self, language: Language) -> bool {
        let changed = self.nav.switch_language(&self.docs, language);
        if changed {
            self.query.clear();
        }
        changed
    }
}
