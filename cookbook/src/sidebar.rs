//! Sidebar entries and the search box filter.

use serde::{Deserialize, Serialize};

use crate::doc::{Doc, DocSet, Language};

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub id: String,
    pub title: String,
}

impl From<&Doc> for SidebarItem {
    fn from(doc: &Doc) -> Self {
        Self { id: doc.id.clone(), title: doc.title.clone() }
    }
}

/// Docs whose title contains `query`, ignoring case. A blank query keeps
/// everything.
#[must_use]
pub fn filter_items<'a>(docs: &[&'a Doc], query: &str) -> Vec<&'a Doc> {
    let needle = query.trim().to_lowercase();
    docs.iter()
        .copied()
        .filter(|doc| needle.is_empty() || doc.title.to_lowercase().contains(&needle))
        .collect()
}

/// Sidebar for `language`, in display order, filtered by `query`.
#[must_use]
pub fn sidebar(docs: &DocSet, language: Language, query: &str) -> Vec<SidebarItem> {
    filter_items(&docs.for_language(language), query)
        .into_iter()
        .map(SidebarItem::from)
        .collect()
}
