// src/annotate/organisation.rs
//! Organisation socket: one organisation name per address group.

use std::sync::LazyLock;

use regex::Regex;

use super::split_list;
use crate::error::Result;
use crate::types::{text_field, Record};

/// Raw field holding author addresses.
pub const FIELD: &str = "C1";

static AUTHOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.+?\]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// # Errors
/// Returns `MissingField` if the record has no `C1` field.
pub fn derive(id: &str, record: &Record) -> Result<Vec<String>> {
    let raw = text_field(id, record, FIELD)?;
    Ok(addresses(raw)
        .iter()
        .map(|address| organisation(address).to_string())
        .collect())
}

/// Address groups with bracketed author lists removed and leading space trimmed.
#[must_use]
pub fn addresses(raw: &str) -> Vec<String> {
    let stripped = AUTHOR_PREFIX.replace_all(raw, "");
    split_list(&stripped)
        .map(|a| a.trim_start().to_string())
        .collect()
}

/// The part of an address before its first `", "`.
#[must_use]
pub fn organisation(address: &str) -> &str {
    address.split(", ").next().unwrap_or(address)
}
