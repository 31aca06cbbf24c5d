// src/metadata.rs
//! Publication year and citation count, used to filter a corpus before analysis.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::FilterConfig;
use crate::error::{BiblioError, Result};
use crate::types::{text_field, Corpus};

pub const YEAR: &str = "PY";
pub const TIMES_CITED: &str = "TC";

/// Year assumed for records exported before their issue is dated.
pub const DEFAULT_YEAR: u32 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub year: u32,
    pub cited: u32,
}

/// # Errors
/// Returns `MissingField` if `PY` or `TC` is absent, or `Config` if either is
/// not a number.
pub fn extract(corpus: &Corpus) -> Result<BTreeMap<String, Metadata>> {
    corpus
        .iter()
        .map(|(id, record)| {
            let year = number(id, YEAR, text_field(id, record, YEAR)?, DEFAULT_YEAR)?;
            let cited = number(id, TIMES_CITED, text_field(id, record, TIMES_CITED)?, 0)?;
            Ok((id.clone(), Metadata { year, cited }))
        })
        .collect()
}

fn number(id: &str, field: &str, raw: &str, default: u32) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .map_err(|_| BiblioError::Config(format!("article {id}: `{field}` is not a number: {raw:?}")))
}

/// Keeps articles passing the year and citation thresholds.
#[must_use]
pub fn filter(corpus: &Corpus, metadata: &BTreeMap<String, Metadata>, rules: &FilterConfig) -> Corpus {
    corpus
        .iter()
        .filter(|(id, _)| {
            metadata.get(*id).is_some_and(|m| {
                rules.from_year.map_or(true, |y| m.year >= y) && m.cited >= rules.min_citations
            })
        })
        .map(|(id, record)| (id.clone(), record.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::corpus_from;

    fn corpus() -> Corpus {
        corpus_from(vec![
            ("A", vec![("PY", "1999"), ("TC", "12")]),
            ("B", vec![("PY", ""), ("TC", "")]),
            ("C", vec![("PY", "2010"), ("TC", "3")]),
        ])
    }

    #[test]
    fn blanks_take_defaults() {
        let meta = extract(&corpus()).unwrap();
        assert_eq!(meta["B"], Metadata { year: DEFAULT_YEAR, cited: 0 });
        assert_eq!(meta["A"], Metadata { year: 1999, cited: 12 });
    }

    #[test]
    fn non_numeric_year_is_reported() {
        let bad = corpus_from(vec![("A", vec![("PY", "MMX"), ("TC", "1")])]);
        assert!(matches!(extract(&bad), Err(BiblioError::Config(_))));
    }

    #[test]
    fn filter_applies_both_thresholds() {
        let corpus = corpus();
        let meta = extract(&corpus).unwrap();
        let rules = FilterConfig { from_year: Some(2000), min_citations: 1 };
        let kept = filter(&corpus, &meta, &rules);
        assert_eq!(kept.keys().collect::<Vec<_>>(), vec!["C"]);
    }
}
