use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::Socket;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_socket")]
    pub socket: Socket,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            socket: default_socket(),
            top_n: default_top_n(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Column holding the article identifier.
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Only files with this extension are read; empty reads every file.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            id_field: default_id_field(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Replaces the built-in English list when set.
    #[serde(default)]
    pub stopwords_file: Option<PathBuf>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub from_year: Option<u32>,
    #[serde(default)]
    pub min_citations: u32,
}

impl FilterConfig {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.from_year.is_some() || self.min_citations > 0
    }
}

/// On-disk shape of `biblionet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

const fn default_socket() -> Socket { Socket::Citation }
const fn default_top_n() -> usize { 100 }
fn default_output() -> PathBuf { PathBuf::from("network.net") }
fn default_id_field() -> String { "UT".to_string() }
fn default_extension() -> String { "txt".to_string() }
