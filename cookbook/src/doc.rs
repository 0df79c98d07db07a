//! Document loader: Markdown files from per-language trees.
//!
//! DESIGN
//! ======
//! A corpus root holds one directory per language (`zh/`, `en/`). Every
//! `*.md` file below those becomes a [`Doc`] whose id is
//! `"{language}:{path without .md}"`. Documents are built once and never
//! mutated; [`DocSet`] keeps load order (sorted paths, languages in
//! [`Language::ALL`] order) because "first document" decisions depend on it.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::markdown::{DEFAULT_MAX_DEPTH, Heading, extract_headings, extract_title, fallback_title_from_path, strip_md_extension};

#[cfg(test)]
#[path = "doc_test.rs"]
mod tests;

// =============================================================================
// LANGUAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// Every language, in resolution order.
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Label for the language switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
        }
    }

    /// Parse a code, returning `None` for anything but `zh` or `en`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DocError::UnknownLanguage(s.to_owned()))
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("duplicate document id: {0}")]
    DuplicateId(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

// =============================================================================
// DOCUMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Deepest heading level kept in [`Doc::headings`].
    pub max_depth: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub id: String,
    /// Path below the language root, `/`-separated, extension included.
    pub path: String,
    pub title: String,
    pub content: String,
    pub headings: Vec<Heading>,
    pub language: Language,
}

impl Doc {
    #[must_use]
    pub fn new(language: Language, path: &str, content: String, options: LoadOptions) -> Self {
        let path = path.trim_start_matches('/').replace('\\', "/");
        let id = doc_id(language, &path);
        let title = extract_title(&content).unwrap_or_else(|| fallback_title_from_path(&path));
        let headings = extract_headings(&content, options.max_depth);
        Self { id, path, title, content, headings, language }
    }

    /// Path without the `.md` extension, as used in URL fragments.
    #[must_use]
    pub fn stem(&self) -> &str {
        strip_md_extension(&self.path)
    }

    #[must_use]
    pub fn has_heading(&self, slug: &str) -> bool {
        self.headings.iter().any(|heading| heading.slug == slug)
    }
}

#[must_use]
pub fn doc_id(language: Language, path: &str) -> String {
    format!("{language}:{}", strip_md_extension(path))
}

/// Immutable set of loaded documents.
#[derive(Clone, Debug, Default)]
pub struct DocSet {
    docs: Vec<Doc>,
    index: HashMap<String, usize>,
}

impl DocSet {
    /// Load `root/zh/**/*.md` and `root/en/**/*.md`.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Io`] when a directory or file cannot be read and
    /// [`DocError::DuplicateId`] when two files map to the same id.
    pub fn load_dir(root: &Path, options: LoadOptions) -> Result<Self, DocError> {
        let mut sources = Vec::new();
        for language in Language::ALL {
            let lang_root = root.join(language.code());
            if !lang_root.is_dir() {
                continue;
            }
            let mut files = Vec::new();
            collect_markdown(&lang_root, &mut files)?;
            files.sort();
            for file in files {
                let content = fs::read_to_string(&file).map_err(|source| DocError::Io { path: file.clone(), source })?;
                let relative = relative_path(&lang_root, &file);
                sources.push((language, relative, content));
            }
        }
        Self::from_sources(sources, options)
    }

    /// Build a set from in-memory `(language, path, content)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] when two sources map to the same id.
    pub fn from_sources<I, P>(sources: I, options: LoadOptions) -> Result<Self, DocError>
    where
        I: IntoIterator<Item = (Language, P, String)>,
        P: AsRef<str>,
    {
        let mut set = Self::default();
        for (language, path, content) in sources {
            set.insert(Doc::new(language, path.as_ref(), content, options))?;
        }
        Ok(set)
    }

    /// Rebuild a set from documents loaded elsewhere (such as the server's
    /// JSON), keeping their headings as they are.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] when two documents share an id.
    pub fn from_docs(docs: Vec<Doc>) -> Result<Self, DocError> {
        let mut set = Self::default();
        for doc in docs {
            set.insert(doc)?;
        }
        Ok(set)
    }

    fn insert(&mut self, doc: Doc) -> Result<(), DocError> {
        if self.index.contains_key(&doc.id) {
            return Err(DocError::DuplicateId(doc.id));
        }
        self.index.insert(doc.id.clone(), self.docs.len());
        self.docs.push(doc);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Doc> {
        self.index.get(id).map(|&i| &self.docs[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every id in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|doc| doc.id.as_str())
    }

    /// Every document in load order.
    #[must_use]
    pub fn docs(&self) -> &[Doc] {
        &self.docs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents of `language`, sorted by title (case-insensitive), then path.
    #[must_use]
    pub fn for_language(&self, language: Language) -> Vec<&Doc> {
        let mut docs: Vec<&Doc> = self.docs.iter().filter(|doc| doc.language == language).collect();
        docs.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.path.cmp(&b.path))
        });
        docs
    }

    /// First document of `language` in load order.
    #[must_use]
    pub fn first_of(&self, language: Language) -> Option<&Doc> {
        self.docs.iter().find(|doc| doc.language == language)
    }

    /// First document overall.
    #[must_use]
    pub fn first(&self) -> Option<&Doc> {
        self.docs.first()
    }

    /// The document with the same path in `language`.
    #[must_use]
    pub fn counterpart(&self, doc: &Doc, language: Language) -> Option<&Doc> {
        self.get(&doc_id(language, &doc.path))
    }
}

fn collect_markdown(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), DocError> {
    let io_err = |source| DocError::Io { path: dir.to_path_buf(), source };
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            collect_markdown(&path, out)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            out.push(path);
        }
    }
    Ok(())
}

fn relative_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
