// src/config/mod.rs
pub mod types;

pub use self::types::{Config, ContentConfig, CorpusConfig, FilterConfig, NetworkConfig};

use std::fs;
use std::path::Path;

use crate::error::{BiblioError, Result};
use crate::stopwords::StopWords;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "biblionet.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `biblionet.toml` from the working directory if present,
    /// or the defaults.
    ///
    /// # Errors
    /// Returns error if an explicit path is unreadable or any file fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE)),
            None => Ok(Self::new()),
        }
    }

    /// # Errors
    /// Returns error if the file is unreadable or not valid TOML for this shape.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BiblioError::io(e, path))?;
        Self::parse_toml(&content)
            .map_err(|e| BiblioError::Config(format!("{}: {e}", path.display())))
    }

    /// # Errors
    /// Returns error if `content` is not valid TOML for this shape.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BiblioError::Config(e.to_string()))
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if `top_n` is zero or the id field is blank.
    pub fn validate(&self) -> Result<()> {
        if self.network.top_n == 0 {
            return Err(BiblioError::Config("network.top_n must be at least 1".into()));
        }
        if self.corpus.id_field.trim().is_empty() {
            return Err(BiblioError::Config("corpus.id_field must not be empty".into()));
        }
        Ok(())
    }

    /// The stop-word set for the content socket: the configured file or the
    /// English list, plus the domain extension and any extra words.
    ///
    /// # Errors
    /// Returns an I/O error if `stopwords_file` cannot be read.
    pub fn stopwords(&self) -> Result<StopWords> {
        let mut stop = match &self.content.stopwords_file {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::english(),
        }
        .with_domain_extension();
        stop.extend(&self.content.extra_stopwords);
        Ok(stop)
    }
}
