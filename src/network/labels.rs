// src/network/labels.rs
//! Display labels for ranked items.

use std::collections::HashMap;

use crate::error::{BiblioError, Result};
use crate::index::FrequencyTable;
use crate::types::Socket;

/// Rank -> display label. Indexed by the same ranks as the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels(Vec<String>);

impl Labels {
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&str> {
        self.0.get(rank).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Labels {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

/// Builds the label for every rank in `table`.
///
/// # Errors
/// Returns `MalformedCitation` for a citation key without surname and year.
pub fn resolve(socket: Socket, table: &FrequencyTable) -> Result<Labels> {
    match socket {
        Socket::Citation => citation_labels(table),
        Socket::Organisation | Socket::Content => Ok(table
            .items()
            .iter()
            .map(|r| plain_label(&r.item))
            .collect::<Vec<_>>()
            .into()),
    }
}

/// Item text with spaces turned into underscores.
#[must_use]
pub fn plain_label(item: &str) -> String {
    item.replace(' ', "_")
}

/// `SURNAME_YEAR` from a `"surname, year, ..."` citation key.
///
/// # Errors
/// Returns `MalformedCitation` if the key has fewer than two parts.
pub fn citation_base(key: &str) -> Result<String> {
    let mut parts = key.split(", ");
    let (Some(name), Some(year)) = (parts.next(), parts.next()) else {
        return Err(BiblioError::MalformedCitation(key.to_string()));
    };

    let label = format!("{} {}", name.to_uppercase(), year.to_uppercase());
    Ok(label.replace(' ', "_").replace(&['.', '"'][..], ""))
}

/// Different works collapse onto one `SURNAME_YEAR`; each collision group is
/// numbered `_0, _1, ...` in rank order so every rank keeps its own label.
fn citation_labels(table: &FrequencyTable) -> Result<Labels> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(table.len());

    for ranked in table.items() {
        let base = citation_base(&ranked.item)?;
        let n = seen.entry(base.clone()).or_insert(0);
        labels.push(format!("{base}_{n}"));
        *n += 1;
    }

    Ok(Labels(labels))
}
