// src/corpus.rs
//! Tab-delimited export loading into a [`Corpus`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::CorpusConfig;
use crate::error::{BiblioError, Result};
use crate::types::{Corpus, Field, Record};

/// Loads every matching file directly inside `dir`, in file-name order.
///
/// # Errors
/// Returns error if the directory cannot be walked, a file cannot be read, or
/// a record lacks the identifier column.
pub fn load_dir(dir: &Path, config: &CorpusConfig) -> Result<Corpus> {
    let files = list_files(dir, &config.extension)?;
    if files.is_empty() {
        warn!(dir = %dir.display(), "no corpus files found");
    }

    let mut corpus = Corpus::new();
    for path in &files {
        let text = fs::read_to_string(path).map_err(|e| BiblioError::io(e, path))?;
        let before = corpus.len();
        let origin = path.file_name().map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
        parse_tsv(&text, &origin, &config.id_field, &mut corpus)?;
        debug!(file = %path.display(), added = corpus.len() - before, "parsed corpus file");
    }

    debug!(files = files.len(), articles = corpus.len(), "loaded corpus");
    Ok(corpus)
}

fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    extension.is_empty()
        || path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Parses one export: a tab-separated header line, then one record per line.
///
/// Cells are zipped onto the header; short rows simply lack the trailing
/// fields. Records keep file order; a record whose id repeats an earlier one
/// replaces it in the earlier one's position. `origin` names the source in
/// errors.
///
/// # Errors
/// Returns `MissingField` naming `origin:line` if a record has no value for
/// `id_field`.
pub fn parse_tsv(text: &str, origin: &str, id_field: &str, corpus: &mut Corpus) -> Result<()> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // Tabs are significant: a trailing tab is an empty last field.
    let mut lines = text
        .lines()
        .map(|l| l.trim_matches(|c: char| c.is_whitespace() && c != '\t'))
        .enumerate()
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        return Ok(());
    };
    let header: Vec<&str> = header.split('\t').collect();

    for (n, line) in lines {
        let record: Record = header
            .iter()
            .zip(line.split('\t'))
            .map(|(k, v)| ((*k).to_string(), Field::from(v)))
            .collect();

        let id = match record.get(id_field) {
            Some(Field::Text(id)) if !id.is_empty() => id.clone(),
            _ => return Err(BiblioError::missing(&format!("<{origin}:{}>", n + 1), id_field)),
        };
        corpus.insert(id, record);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::text_field;

    const EXPORT: &str = "\u{feff}PT\tAU\tCR\tUT\r\nJ\tSmith\ta; b\tWOS:1\r\nJ\tJones\tb\tWOS:2\r\n";

    #[test]
    fn parses_header_and_rows() {
        let mut corpus = Corpus::new();
        parse_tsv(EXPORT, "export.txt", "UT", &mut corpus).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(text_field("WOS:1", &corpus["WOS:1"], "CR").unwrap(), "a; b");
        assert_eq!(text_field("WOS:2", &corpus["WOS:2"], "PT").unwrap(), "J");
    }

    #[test]
    fn short_rows_lack_trailing_fields() {
        let mut corpus = Corpus::new();
        parse_tsv("UT\tCR\tAB\nX1\tc", "short.txt", "UT", &mut corpus).unwrap();
        assert!(corpus["X1"].contains_key("CR"));
        assert!(!corpus["X1"].contains_key("AB"));
    }

    #[test]
    fn row_without_id_is_rejected() {
        let mut corpus = Corpus::new();
        let err = parse_tsv("CR\tUT\n\nb\tWOS:1\na\t\n", "savedrecs2.txt", "UT", &mut corpus).unwrap_err();
        match err {
            BiblioError::MissingField { article, field } => {
                assert_eq!(field, "UT");
                assert_eq!(article, "<savedrecs2.txt:4>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_dir_reads_matching_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "UT\tCR\nA\tnew\n").unwrap();
        fs::write(dir.path().join("a.txt"), "UT\tCR\nA\told\nB\tx\n").unwrap();
        fs::write(dir.path().join("notes.md"), "UT\tCR\nC\ty\n").unwrap();

        let corpus = load_dir(dir.path(), &CorpusConfig::default()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(text_field("A", &corpus["A"], "CR").unwrap(), "new");
        // the replaced record keeps its first slot
        assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn records_keep_file_order_not_id_order() {
        let mut corpus = Corpus::new();
        parse_tsv("UT\tCR\nWOS:Z\tz\nWOS:A\ta\nWOS:M\tm\n", "export.txt", "UT", &mut corpus).unwrap();
        assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["WOS:Z", "WOS:A", "WOS:M"]);
    }

    #[test]
    fn missing_id_in_load_dir_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "UT\tCR\nA\tx\n").unwrap();
        fs::write(dir.path().join("b.txt"), "CR\tUT\nx\t\n").unwrap();

        let err = load_dir(dir.path(), &CorpusConfig::default()).unwrap_err();
        assert!(err.to_string().contains("<b.txt:2>"), "{err}");
    }
}
