// src/types.rs
//! Corpus data model shared by every stage of the pipeline.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BiblioError, Result};

/// A single field value: raw text from the parser, or a list derived by a socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for Field {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// One article: field name -> value.
pub type Record = BTreeMap<String, Field>;

/// Article identifier -> record, in load order.
///
/// Insertion order is the "first seen" order used for frequency ties; a
/// repeated id replaces the record in its original slot.
pub type Corpus = IndexMap<String, Record>;

/// Reads a raw text field, failing if it is absent or already a derived list.
///
/// # Errors
/// Returns `MissingField` or `FieldKind`.
pub fn text_field<'a>(article: &str, record: &'a Record, field: &str) -> Result<&'a str> {
    match record.get(field) {
        Some(Field::Text(s)) => Ok(s),
        Some(Field::List(_)) => Err(BiblioError::FieldKind {
            article: article.to_string(),
            field: field.to_string(),
            expected: "raw text",
        }),
        None => Err(BiblioError::missing(article, field)),
    }
}

/// Reads a derived list field, failing if it is absent or still raw text.
///
/// # Errors
/// Returns `MissingField` or `FieldKind`.
pub fn list_field<'a>(article: &str, record: &'a Record, field: &str) -> Result<&'a [String]> {
    match record.get(field) {
        Some(Field::List(items)) => Ok(items),
        Some(Field::Text(_)) => Err(BiblioError::FieldKind {
            article: article.to_string(),
            field: field.to_string(),
            expected: "a derived list",
        }),
        None => Err(BiblioError::missing(article, field)),
    }
}

/// Builds a corpus from `(id, [(field, value)])` pairs. Handy in tests and demos.
#[must_use]
pub fn corpus_from<I, F>(articles: I) -> Corpus
where
    I: IntoIterator<Item = (&'static str, F)>,
    F: IntoIterator<Item = (&'static str, &'static str)>,
{
    articles
        .into_iter()
        .map(|(id, fields)| {
            let record = fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), Field::from(v)))
                .collect();
            (id.to_string(), record)
        })
        .collect()
}

/// The annotation mode selecting which derived field gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Socket {
    Citation,
    #[serde(alias = "organization")]
    #[value(alias = "organization")]
    Organisation,
    Content,
}

impl Socket {
    /// The fixed key under which the derived list is stored.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Citation => "F1",
            Self::Organisation => "F2",
            Self::Content => "F3",
        }
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Citation => "citation",
            Self::Organisation => "organisation",
            Self::Content => "content",
        };
        f.write_str(name)
    }
}
