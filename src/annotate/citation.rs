// src/annotate/citation.rs
//! Citation socket: the cited-reference field as a list of verbatim keys.

use super::split_list;
use crate::error::Result;
use crate::types::{text_field, Record};

/// Raw field holding the cited references.
pub const FIELD: &str = "CR";

/// # Errors
/// Returns `MissingField` if the record has no `CR` field.
pub fn derive(id: &str, record: &Record) -> Result<Vec<String>> {
    let raw = text_field(id, record, FIELD)?;
    Ok(split_list(raw).map(str::to_string).collect())
}
