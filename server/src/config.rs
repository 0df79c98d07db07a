//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use cookbook::{DEFAULT_MAX_DEPTH, LoadOptions};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub docs_dir: PathBuf,
    pub heading_max_depth: u8,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DOCS_DIR`: default `docs/` next to this crate
    /// - `HEADING_MAX_DEPTH`: default 3, clamped to 1..=6
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let heading_max_depth = env_parse("HEADING_MAX_DEPTH", DEFAULT_MAX_DEPTH)?.clamp(1, 6);
        let docs_dir = std::env::var("DOCS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_docs_dir());
        Ok(Self { port, docs_dir, heading_max_depth })
    }

    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { max_depth: self.heading_max_depth }
    }
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../docs")
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
