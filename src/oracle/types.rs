//! Oracle contract and its output.

use crate::error::{CliqueError, Result};
use crate::graph::AdjacencyMatrix;

/// All cliques of maximum size in a graph, plus that size.
///
/// Invariants enforced by [`ExactCliques::new`]:
/// - the set is non-empty;
/// - every clique has exactly `max_size` vertices;
/// - each clique is sorted ascending and the set is ordered
///   lexicographically, which defines enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactCliques {
    cliques: Vec<Vec<usize>>,
    max_size: usize,
}

impl ExactCliques {
    /// Validates and normalizes an externally supplied clique set.
    ///
    /// # Errors
    /// Returns [`CliqueError::InvalidExactCliques`] if `cliques` is empty or a
    /// clique's length differs from `max_size`.
    pub fn new(mut cliques: Vec<Vec<usize>>, max_size: usize) -> Result<Self> {
        if cliques.is_empty() {
            return Err(CliqueError::InvalidExactCliques {
                reason: "clique set is empty".into(),
            });
        }
        for clique in &mut cliques {
            if clique.len() != max_size {
                return Err(CliqueError::InvalidExactCliques {
                    reason: format!(
                        "clique {clique:?} has {} vertices, expected {max_size}",
                        clique.len()
                    ),
                });
            }
            clique.sort_unstable();
        }
        cliques.sort();
        cliques.dedup();
        Ok(Self { cliques, max_size })
    }

    /// The maximum cliques in enumeration order.
    pub fn cliques(&self) -> &[Vec<usize>] {
        &self.cliques
    }

    /// The maximum clique size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The first clique in enumeration order.
    pub fn first(&self) -> &[usize] {
        // Non-empty by construction.
        &self.cliques[0]
    }

    /// Returns `true` if `vertices` (sorted ascending) is one of the maximum cliques.
    pub fn contains(&self, vertices: &[usize]) -> bool {
        self.cliques.iter().any(|c| c.as_slice() == vertices)
    }
}

/// Computes the exact set of maximum cliques of a graph.
pub trait ExactCliqueOracle {
    /// Returns every clique of maximum size in `graph`.
    fn maximum_cliques(&self, graph: &AdjacencyMatrix) -> ExactCliques;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_order() {
        let exact = ExactCliques::new(vec![vec![3, 2], vec![1, 0], vec![0, 1]], 2).unwrap();
        assert_eq!(exact.cliques(), &[vec![0, 1], vec![2, 3]]);
        assert_eq!(exact.first(), &[0, 1]);
        assert!(exact.contains(&[2, 3]));
        assert!(!exact.contains(&[1, 2]));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            ExactCliques::new(vec![], 0),
            Err(CliqueError::InvalidExactCliques { .. })
        ));
    }

    #[test]
    fn test_new_rejects_size_mismatch() {
        assert!(matches!(
            ExactCliques::new(vec![vec![0, 1, 2], vec![3, 4]], 3),
            Err(CliqueError::InvalidExactCliques { .. })
        ));
    }
}
