// src/network/cooccur.rs
//! Dense symmetric co-occurrence counts over ranked items.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{BiblioError, Result};
use crate::index::PerArticleIndex;

/// A `size x size` symmetric count matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    cells: Vec<u32>,
}

impl Matrix {
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Count at `[i, j]`; zero outside the matrix.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        if i < self.size && j < self.size {
            self.cells[i * self.size + j]
        } else {
            0
        }
    }

    fn bump_pair(&mut self, a: usize, b: usize) {
        self.cells[a * self.size + b] += 1;
        self.cells[b * self.size + a] += 1;
    }

    /// Positive cells above the diagonal, row-major: `(i, j, count)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.size).flat_map(move |i| {
            (i + 1..self.size).filter_map(move |j| {
                let count = self.get(i, j);
                (count > 0).then_some((i, j, count))
            })
        })
    }

    /// Sum over all cells.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Accumulates pairwise co-occurrence for a `k x k` rank space.
///
/// Each article's ranks are deduplicated first; an article with fewer than
/// two distinct ranks adds nothing, otherwise every unordered pair adds one
/// to both of its symmetric cells.
///
/// # Errors
/// Returns `RankOutOfRange` if an index list holds a rank `>= k`.
pub fn compute(k: usize, index: &PerArticleIndex) -> Result<Matrix> {
    let mut matrix = Matrix::zeros(k);
    let mut contributing = 0usize;

    for ranks in index.values() {
        let distinct: BTreeSet<usize> = ranks.iter().copied().collect();
        if let Some(&rank) = distinct.iter().find(|&&r| r >= k) {
            return Err(BiblioError::RankOutOfRange { rank, size: k });
        }
        if distinct.len() < 2 {
            continue;
        }

        contributing += 1;
        let uniq: Vec<usize> = distinct.into_iter().collect();
        for (pos, &a) in uniq.iter().enumerate() {
            for &b in &uniq[pos + 1..] {
                matrix.bump_pair(a, b);
            }
        }
    }

    if contributing == 0 && k > 1 {
        warn!(size = k, "no article contributes a co-occurring pair");
    }
    debug!(size = k, contributing, "computed co-occurrence matrix");
    Ok(matrix)
}

/// Ranks with no positive edge to any other rank.
#[must_use]
pub fn isolated(matrix: &Matrix) -> Vec<usize> {
    (0..matrix.size())
        .filter(|&i| (0..matrix.size()).all(|j| matrix.get(i, j) == 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(lists: &[(&str, &[usize])]) -> PerArticleIndex {
        lists
            .iter()
            .map(|(id, ranks)| ((*id).to_string(), ranks.to_vec()))
            .collect()
    }

    #[test]
    fn pairs_count_once_per_article() {
        let m = compute(3, &index(&[("A", &[0, 1, 1, 0]), ("B", &[1, 0]), ("C", &[2])])).unwrap();
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 2);
        assert_eq!(m.get(0, 2), 0);
        assert_eq!(m.get(0, 0), 0);
        assert!(m.is_symmetric());
    }

    #[test]
    fn article_with_m_distinct_ranks_adds_m_times_m_minus_one() {
        let m = compute(5, &index(&[("A", &[4, 0, 2, 3, 2])])).unwrap();
        assert_eq!(m.total(), 4 * 3);
        assert_eq!(m.edges().count(), 6);
    }

    #[test]
    fn out_of_range_rank_is_reported() {
        let err = compute(2, &index(&[("A", &[0, 2])])).unwrap_err();
        assert!(matches!(err, BiblioError::RankOutOfRange { rank: 2, size: 2 }));
    }

    #[test]
    fn edges_are_row_major_upper_triangle() {
        let m = compute(3, &index(&[("A", &[2, 0]), ("B", &[1, 2]), ("C", &[0, 1])])).unwrap();
        let edges: Vec<_> = m.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
    }

    #[test]
    fn isolated_lists_unconnected_ranks() {
        let m = compute(4, &index(&[("A", &[0, 2])])).unwrap();
        assert_eq!(isolated(&m), vec![1, 3]);
    }
}
