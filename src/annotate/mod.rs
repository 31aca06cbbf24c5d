// src/annotate/mod.rs
//! Field annotation: derives one list-valued field per article.
//!
//! Each socket reads raw parsed fields and writes its derived list under the
//! socket's fixed key. The input corpus is never touched; every record in the
//! result is a fresh clone with the derived field added.

pub mod citation;
pub mod content;
pub mod organisation;

use tracing::debug;

use crate::error::Result;
use crate::stopwords::StopWords;
use crate::types::{Corpus, Field, Record, Socket};

/// Produces a copy of `corpus` with the socket's derived field on every record.
///
/// `stop` is only consulted by the content socket.
///
/// # Errors
/// Returns `MissingField` for the first article lacking a field the socket needs.
pub fn annotate(socket: Socket, corpus: &Corpus, stop: &StopWords) -> Result<Corpus> {
    let annotated = corpus
        .iter()
        .map(|(id, record)| {
            let derived = derive(socket, id, record, stop)?;
            let mut fresh = record.clone();
            fresh.insert(socket.key().to_string(), Field::List(derived));
            Ok((id.clone(), fresh))
        })
        .collect::<Result<Corpus>>()?;

    debug!(%socket, articles = annotated.len(), "annotated corpus");
    Ok(annotated)
}

fn derive(socket: Socket, id: &str, record: &Record, stop: &StopWords) -> Result<Vec<String>> {
    match socket {
        Socket::Citation => citation::derive(id, record),
        Socket::Organisation => organisation::derive(id, record),
        Socket::Content => content::derive(id, record, stop),
    }
}

/// Splits a `"; "`-delimited list field verbatim.
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split("; ")
}
