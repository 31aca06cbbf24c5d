// src/annotate/content.rs
//! Content socket: cleaned, case-folded tokens from title, keywords and abstract.

use std::sync::LazyLock;

use regex::Regex;

use super::split_list;
use crate::error::Result;
use crate::stopwords::StopWords;
use crate::types::{text_field, Record};

pub const TITLE: &str = "TI";
pub const KEYWORDS_PLUS: &str = "ID";
pub const AUTHOR_KEYWORDS: &str = "DE";
pub const ABSTRACT: &str = "AB";

static COPYRIGHT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(C\)\s\d{4}").unwrap_or_else(|_| panic!("Invalid Regex")));
static RIGHTS_RESERVED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\sAll rights reserved\.$").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static PUBLISHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\sElsevier (Inc\.|Science Inc\.|B\.V\.)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// # Errors
/// Returns `MissingField` if any of `TI`, `ID`, `DE`, `AB` is absent.
pub fn derive(id: &str, record: &Record, stop: &StopWords) -> Result<Vec<String>> {
    let title = text_field(id, record, TITLE)?;
    let database = text_field(id, record, KEYWORDS_PLUS)?;
    let keywords = text_field(id, record, AUTHOR_KEYWORDS)?;
    let abstract_text = strip_copyright(text_field(id, record, ABSTRACT)?);

    let tokens = title
        .split(' ')
        .chain(split_list(database))
        .chain(split_list(keywords))
        .chain(abstract_text.split(' '));

    Ok(clean(tokens, stop))
}

/// Removes the trailing copyright notice publishers append to abstracts.
#[must_use]
pub fn strip_copyright(text: &str) -> String {
    let text = COPYRIGHT_YEAR.replace_all(text, "");
    let text = RIGHTS_RESERVED.replace_all(&text, "");
    PUBLISHER.replace_all(&text, "").into_owned()
}

/// Folds case, drops stop-words, strips ASCII punctuation, drops empties.
pub fn clean<'a, I>(tokens: I, stop: &StopWords) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(str::to_lowercase)
        .filter(|t| !stop.contains(t))
        .map(|t| t.chars().filter(|c| !c.is_ascii_punctuation()).collect::<String>())
        .filter(|t| !t.is_empty())
        .collect()
}
