// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiblioError {
    #[error("article {article} has no `{field}` field")]
    MissingField { article: String, field: String },

    #[error("article {article}: field `{field}` is not {expected}")]
    FieldKind {
        article: String,
        field: String,
        expected: &'static str,
    },

    #[error("malformed citation (expected `surname, year, ...`): {0:?}")]
    MalformedCitation(String),

    #[error("rank {rank} is outside a {size}x{size} matrix")]
    RankOutOfRange { rank: usize, size: usize },

    #[error("no label for vertex rank {0}")]
    MissingLabel(usize),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BiblioError>;

impl BiblioError {
    pub(crate) fn missing(article: &str, field: &str) -> Self {
        Self::MissingField {
            article: article.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Bare I/O errors carry no path; prefer `BiblioError::io` where one is known.
impl From<std::io::Error> for BiblioError {
    fn from(source: std::io::Error) -> Self {
        BiblioError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Loop-detection errors from walkdir have no io::Error underneath.
impl From<walkdir::Error> for BiblioError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => BiblioError::Io { source, path },
            None => BiblioError::Config(format!("directory walk failed at {}", path.display())),
        }
    }
}
