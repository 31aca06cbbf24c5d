// src/network/mod.rs
//! Co-occurrence network assembly: annotate, rank, project, count, label.

pub mod cooccur;
pub mod labels;
pub mod pajek;

pub use cooccur::{compute, isolated, Matrix};
pub use labels::{resolve, Labels};

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::annotate;
use crate::error::Result;
use crate::index::{self, DualIndex, FrequencyTable, PerArticleIndex};
use crate::stopwords::StopWords;
use crate::types::{Corpus, Socket};

/// One built network. Table, index, matrix and labels share one rank space.
#[derive(Debug, Clone)]
pub struct Network {
    pub socket: Socket,
    pub table: FrequencyTable,
    pub index: PerArticleIndex,
    pub matrix: Matrix,
    pub labels: Labels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub vertices: usize,
    pub edges: usize,
    pub isolated: usize,
    pub max_weight: u32,
    pub articles_indexed: usize,
}

impl Network {
    /// Runs the full pipeline over `corpus` for the top `top_n` items of `socket`.
    ///
    /// # Errors
    /// Propagates missing-field and malformed-citation errors from any stage.
    pub fn build(socket: Socket, top_n: usize, corpus: &Corpus, stop: &StopWords) -> Result<Self> {
        let annotated = annotate::annotate(socket, corpus, stop)?;
        let field = socket.key();

        let table = index::build_index(top_n, field, &annotated)?;
        let index = index::project(field, &table, &annotated)?;
        let matrix = cooccur::compute(table.len(), &index)?;
        let labels = labels::resolve(socket, &table)?;

        let network = Self {
            socket,
            table,
            index,
            matrix,
            labels,
        };
        let s = network.summary();
        info!(%socket, vertices = s.vertices, edges = s.edges, isolated = s.isolated, "built network");
        Ok(network)
    }

    /// Articles whose raw `field` contains each ranked item.
    ///
    /// # Errors
    /// Returns `MissingField` if an article lacks the raw field.
    pub fn dual(&self, field: &str, corpus: &Corpus) -> Result<DualIndex> {
        index::project_dual(field, &self.table, corpus)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let (edges, max_weight) = self
            .matrix
            .edges()
            .fold((0, 0), |(n, max), (_, _, c)| (n + 1, max.max(c)));
        Summary {
            vertices: self.matrix.size(),
            edges,
            isolated: isolated(&self.matrix).len(),
            max_weight,
            articles_indexed: self.index.len(),
        }
    }

    /// Pajek text for this network.
    ///
    /// # Errors
    /// Returns `MissingLabel` if the label set does not cover every rank.
    pub fn render(&self) -> Result<String> {
        pajek::render(&self.labels, &self.matrix)
    }

    /// Writes the network as a Pajek `.net` file.
    ///
    /// # Errors
    /// Returns an I/O error carrying the path.
    pub fn export(&self, path: &Path) -> Result<()> {
        pajek::write(path, &self.labels, &self.matrix)
    }
}

/// Dense 0-based numbering of articles in corpus order.
#[must_use]
pub fn article_labels(corpus: &Corpus) -> Vec<&str> {
    corpus.keys().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parse_tsv;

    #[test]
    fn frequency_ties_follow_load_order() {
        let mut corpus = Corpus::new();
        parse_tsv(
            "UT\tCR\nWOS:Z\tZeta, 1990, J\nWOS:A\tAlpha, 1991, K\n",
            "savedrecs.txt",
            "UT",
            &mut corpus,
        )
        .unwrap();

        let network = Network::build(Socket::Citation, 1, &corpus, &StopWords::new()).unwrap();
        let kept: Vec<&str> = network.table.items().iter().map(|r| r.item.as_str()).collect();
        assert_eq!(kept, vec!["Zeta, 1990, J"]);
        assert_eq!(article_labels(&corpus), vec!["WOS:Z", "WOS:A"]);
    }

    #[test]
    fn summary_serializes_counts() {
        let mut corpus = Corpus::new();
        parse_tsv("UT\tCR\nWOS:1\tA, 1990, J; B, 1991, K\n", "savedrecs.txt", "UT", &mut corpus).unwrap();
        let network = Network::build(Socket::Citation, 2, &corpus, &StopWords::new()).unwrap();

        let value = serde_json::to_value(network.summary()).unwrap();
        assert_eq!(value["vertices"], 2);
        assert_eq!(value["edges"], 1);
        assert_eq!(value["max_weight"], 1);
    }
}
