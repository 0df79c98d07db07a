//! GitHub-style heading slugs.
//!
//! `slugify` lowercases, drops punctuation and turns spaces into hyphens.
//! [`Slugger`] remembers what it has handed out so repeated heading text gets
//! `-1`, `-2`, ... suffixes. A rendered page and its table of contents must
//! run one slugger over the same headings in the same order.

use std::collections::HashMap;

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;

/// Slug of `text` without deduplication.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Deduplicating slug generator, one per document.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique slug for `text` within this slugger.
    pub fn slug(&mut self, text: &str) -> String {
        let original = slugify(text);
        let mut candidate = original.clone();
        while self.occurrences.contains_key(&candidate) {
            let count = self.occurrences.entry(original.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{original}-{count}");
        }
        self.occurrences.insert(candidate.clone(), 0);
        candidate
    }
}
