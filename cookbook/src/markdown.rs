//! Title and heading metadata extracted from Markdown source.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::slug::Slugger;

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

/// Depth limit used for the table of contents when none is configured.
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// One entry of a document's table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub text: String,
    pub slug: String,
}

/// Parser options shared by extraction and rendering so both see the same
/// heading sequence.
#[must_use]
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

#[must_use]
pub fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Plain text of the inline events making up a heading.
#[must_use]
pub fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_owned()
}

/// Every heading of `content`, in document order, with unique slugs.
#[must_use]
pub fn all_headings(content: &str) -> Vec<Heading> {
    let mut slugger = Slugger::new();
    let mut headings = Vec::new();
    let mut current: Option<(u8, Vec<Event<'_>>)> = None;

    for event in Parser::new_ext(content, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_depth(level), Vec::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, events)) = current.take() {
                    let text = plain_text(&events);
                    let slug = slugger.slug(&text);
                    headings.push(Heading { depth, text, slug });
                }
            }
            other => {
                if let Some((_, events)) = current.as_mut() {
                    events.push(other);
                }
            }
        }
    }
    headings
}

/// Headings no deeper than `max_depth` (clamped to 1..=6).
///
/// Slugs are assigned over all headings first, so they match the ids the
/// renderer emits even when deeper headings are left out.
#[must_use]
pub fn extract_headings(content: &str, max_depth: u8) -> Vec<Heading> {
    let max_depth = max_depth.clamp(1, 6);
    all_headings(content)
        .into_iter()
        .filter(|heading| heading.depth <= max_depth)
        .collect()
}

/// Text of the first non-empty level-1 heading.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
    all_headings(content)
        .into_iter()
        .find(|heading| heading.depth == 1 && !heading.text.is_empty())
        .map(|heading| heading.text)
}

/// Title derived from a file path: `guides/getting-started.md` becomes
/// `Getting Started`.
#[must_use]
pub fn fallback_title_from_path(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = strip_md_extension(file);
    let words: Vec<String> = stem
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        "Untitled".to_owned()
    } else {
        words.join(" ")
    }
}

/// `path` without a trailing `.md` (any case).
#[must_use]
pub fn strip_md_extension(path: &str) -> &str {
    let len = path.len();
    if len >= 3 && path.is_char_boundary(len - 3) && path[len - 3..].eq_ignore_ascii_case(".md") {
        &path[..len - 3]
    } else {
        path
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
