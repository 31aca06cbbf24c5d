// src/index/project.rs
//! Per-article projection of derived items onto frequency ranks.

use std::collections::BTreeMap;

use tracing::debug;

use super::frequency::FrequencyTable;
use crate::annotate::split_list;
use crate::error::Result;
use crate::types::{list_field, text_field, Corpus};

/// Article id -> ranks of its ranked items, in field order, duplicates kept.
pub type PerArticleIndex = BTreeMap<String, Vec<usize>>;

/// Rank -> ids of the articles whose raw field contains that item.
pub type DualIndex = BTreeMap<usize, Vec<String>>;

/// Maps each article to the ranks of the items in its derived `field`.
///
/// Articles with no ranked item are left out entirely.
///
/// # Errors
/// Returns `MissingField` or `FieldKind` if an article lacks the derived list.
pub fn project(field: &str, table: &FrequencyTable, corpus: &Corpus) -> Result<PerArticleIndex> {
    let mut index = PerArticleIndex::new();
    let mut skipped = 0usize;

    for (id, record) in corpus {
        let ranks: Vec<usize> = list_field(id, record, field)?
            .iter()
            .filter_map(|item| table.rank(item))
            .collect();

        if ranks.is_empty() {
            skipped += 1;
        } else {
            index.insert(id.clone(), ranks);
        }
    }

    debug!(field, indexed = index.len(), skipped, "projected articles onto ranks");
    Ok(index)
}

/// Inverse projection read from the RAW `field`, re-split on `"; "`.
///
/// Independent of any derived list, so a table built from one socket can be
/// traced back to the articles carrying each ranked item.
///
/// # Errors
/// Returns `MissingField` or `FieldKind` if an article lacks the raw field.
pub fn project_dual(field: &str, table: &FrequencyTable, corpus: &Corpus) -> Result<DualIndex> {
    let mut dual = DualIndex::new();

    for (id, record) in corpus {
        let raw = text_field(id, record, field)?;
        for rank in split_list(raw).filter_map(|token| table.rank(token)) {
            dual.entry(rank).or_default().push(id.clone());
        }
    }

    debug!(field, ranks = dual.len(), "built dual index");
    Ok(dual)
}
