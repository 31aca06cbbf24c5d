// src/index/frequency.rs
//! Top-N frequency ranking of derived items.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::types::{list_field, Corpus};

/// An item with its dense rank and corpus-wide occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub rank: usize,
    pub item: String,
    pub count: usize,
}

/// Item -> dense rank over the top-N non-empty items of one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    items: Vec<RankedItem>,
    ranks: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Builds a table whose ranks follow the order of `items`.
    pub fn from_counts<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let items: Vec<RankedItem> = items
            .into_iter()
            .enumerate()
            .map(|(rank, (item, count))| RankedItem { rank, item, count })
            .collect();
        let ranks = items.iter().map(|r| (r.item.clone(), r.rank)).collect();
        Self { items, ranks }
    }

    #[must_use]
    pub fn rank(&self, item: &str) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.ranks.contains_key(item)
    }

    /// Items in rank order.
    #[must_use]
    pub fn items(&self) -> &[RankedItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&RankedItem> {
        self.items.get(rank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ranks the items of `field` across the corpus and keeps the top `n`.
///
/// Counts are descending; ties keep the order in which items were first
/// seen (articles in corpus order, items in list order). The empty string is
/// never ranked: the top `n + 1` are taken and the empty string dropped if
/// present, otherwise the last of them is discarded.
///
/// # Errors
/// Returns `MissingField` or `FieldKind` if an article lacks the derived list.
pub fn build_index(n: usize, field: &str, corpus: &Corpus) -> Result<FrequencyTable> {
    let counted = count_items(field, corpus)?;
    let total = counted.len();
    let top = select_top(n, counted);

    debug!(field, distinct = total, kept = top.len(), n, "built frequency table");
    Ok(FrequencyTable::from_counts(top))
}

/// Occurrence counts in first-seen order.
fn count_items(field: &str, corpus: &Corpus) -> Result<Vec<(String, usize)>> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for (id, record) in corpus {
        for item in list_field(id, record, field)? {
            match slot.get(item) {
                Some(&i) => order[i].1 += 1,
                None => {
                    slot.insert(item.clone(), order.len());
                    order.push((item.clone(), 1));
                }
            }
        }
    }

    Ok(order)
}

fn select_top(n: usize, mut counted: Vec<(String, usize)>) -> Vec<(String, usize)> {
    // Stable sort: equal counts keep first-seen order.
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(n.saturating_add(1));

    if let Some(pos) = counted.iter().position(|(item, _)| item.is_empty()) {
        counted.remove(pos);
    } else {
        counted.truncate(n);
    }
    counted
}
