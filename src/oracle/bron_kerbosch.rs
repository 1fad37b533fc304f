//! Bron–Kerbosch maximal clique enumeration with Tomita pivoting.

use super::types::{ExactCliqueOracle, ExactCliques};
use crate::graph::AdjacencyMatrix;
use tracing::debug;

/// Exact oracle that enumerates all maximal cliques and keeps the largest.
///
/// Exponential in the worst case; intended for graphs small enough to
/// cross-check a heuristic against.
///
/// # Examples
///
/// ```
/// use clique_ga::graph::AdjacencyMatrix;
/// use clique_ga::oracle::{BronKerbosch, ExactCliqueOracle};
///
/// let g = AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 2)]).unwrap();
/// let exact = BronKerbosch.maximum_cliques(&g);
/// assert_eq!(exact.max_size(), 3);
/// assert_eq!(exact.cliques(), &[vec![0, 1, 2]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BronKerbosch;

impl BronKerbosch {
    /// Enumerates every maximal clique, each sorted ascending.
    pub fn maximal_cliques(&self, graph: &AdjacencyMatrix) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let candidates: Vec<usize> = (0..graph.vertex_count()).collect();
        expand(graph, &mut Vec::new(), candidates, Vec::new(), &mut out);
        for clique in &mut out {
            clique.sort_unstable();
        }
        out
    }
}

impl ExactCliqueOracle for BronKerbosch {
    fn maximum_cliques(&self, graph: &AdjacencyMatrix) -> ExactCliques {
        let maximal = self.maximal_cliques(graph);
        let max_size = maximal.iter().map(Vec::len).max().unwrap_or(0);
        let maximum: Vec<Vec<usize>> = maximal
            .into_iter()
            .filter(|c| c.len() == max_size)
            .collect();
        debug!(
            max_size,
            count = maximum.len(),
            "enumerated maximum cliques"
        );
        // A graph with at least one vertex always has a maximal clique, so the
        // set is non-empty and every member has `max_size` vertices.
        match ExactCliques::new(maximum, max_size) {
            Ok(exact) => exact,
            Err(err) => unreachable!("bron-kerbosch produced an invalid clique set: {err}"),
        }
    }
}

fn expand(
    graph: &AdjacencyMatrix,
    current: &mut Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() {
            out.push(current.clone());
        }
        return;
    }

    // Pivot: the vertex in P ∪ X with the most neighbours in P.
    let pivot = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|&u| {
            candidates
                .iter()
                .filter(|&&v| graph.is_adjacent(u, v))
                .count()
        })
        .unwrap_or(candidates[0]);

    let branch: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&v| !graph.is_adjacent(pivot, v))
        .collect();

    for v in branch {
        let next_candidates = candidates
            .iter()
            .copied()
            .filter(|&u| graph.is_adjacent(v, u))
            .collect();
        let next_excluded = excluded
            .iter()
            .copied()
            .filter(|&u| graph.is_adjacent(v, u))
            .collect();

        current.push(v);
        expand(graph, current, next_candidates, next_excluded, out);
        current.pop();

        candidates.retain(|&u| u != v);
        excluded.push(v);
    }
}
