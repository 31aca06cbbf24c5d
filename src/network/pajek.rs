// src/network/pajek.rs
//! Pajek `.net` serialization.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::cooccur::Matrix;
use super::labels::Labels;
use crate::error::{BiblioError, Result};

/// Renders vertices (1-based, labelled by rank) and positive upper-triangle edges.
///
/// # Errors
/// Returns `MissingLabel` if a matrix rank has no label.
pub fn render(labels: &Labels, matrix: &Matrix) -> Result<String> {
    let n = matrix.size();
    let mut out = String::new();

    let _ = writeln!(out, "*Vertices {n}");
    for i in 0..n {
        let label = labels.get(i).ok_or(BiblioError::MissingLabel(i))?;
        let _ = writeln!(out, "{} {label}", i + 1);
    }

    // Trailing space is expected by downstream readers.
    out.push_str("*Edges \n");
    for (i, j, count) in matrix.edges() {
        let _ = writeln!(out, "{} {} {count}", i + 1, j + 1);
    }

    Ok(out)
}

/// Renders and writes the graph to `path`.
///
/// # Errors
/// Returns `MissingLabel`, or an I/O error carrying the path.
pub fn write(path: &Path, labels: &Labels, matrix: &Matrix) -> Result<()> {
    let text = render(labels, matrix)?;
    fs::write(path, text).map_err(|e| BiblioError::io(e, path))?;
    tracing::info!(path = %path.display(), vertices = matrix.size(), "wrote pajek network");
    Ok(())
}
