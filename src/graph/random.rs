//! G(n, p) random graph generation.

use super::adjacency::AdjacencyMatrix;
use crate::error::{CliqueError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates an Erdős–Rényi G(n, p) graph.
///
/// Each unordered pair `{u, v}` is included independently with probability
/// `edge_probability`, visiting pairs in row-major order `(0,1), (0,2), …`.
/// The same `seed` always yields the same graph.
///
/// # Errors
///
/// - [`CliqueError::EmptyGraph`] if `vertex_count == 0`.
/// - [`CliqueError::InvalidProbability`] if `edge_probability` is outside `[0, 1]`.
/// - [`CliqueError::GraphTooLarge`] if `vertex_count²` overflows `usize`.
///
/// # Examples
///
/// ```
/// use clique_ga::graph::gnp_random_graph;
///
/// let g = gnp_random_graph(10, 1.0, 7).unwrap();
/// assert_eq!(g.edge_count(), 45);
/// ```
pub fn gnp_random_graph(
    vertex_count: usize,
    edge_probability: f64,
    seed: u64,
) -> Result<AdjacencyMatrix> {
    if vertex_count == 0 {
        return Err(CliqueError::EmptyGraph);
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(CliqueError::InvalidProbability {
            value: edge_probability,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyMatrix::empty(vertex_count)?;
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.random_bool(edge_probability) {
                graph.set_edge(u, v);
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_graph() {
        let a = gnp_random_graph(15, 0.4, 99).unwrap();
        let b = gnp_random_graph(15, 0.4, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extreme_probabilities() {
        assert_eq!(gnp_random_graph(6, 0.0, 1).unwrap().edge_count(), 0);
        assert_eq!(gnp_random_graph(6, 1.0, 1).unwrap().edge_count(), 15);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            gnp_random_graph(0, 0.5, 1).unwrap_err(),
            CliqueError::EmptyGraph
        );
        assert!(matches!(
            gnp_random_graph(5, 1.5, 1),
            Err(CliqueError::InvalidProbability { .. })
        ));
        assert!(matches!(
            gnp_random_graph(5, f64::NAN, 1),
            Err(CliqueError::InvalidProbability { .. })
        ));
        assert_eq!(
            gnp_random_graph(usize::MAX, 0.5, 1).unwrap_err(),
            CliqueError::GraphTooLarge {
                vertex_count: usize::MAX
            }
        );
    }
}
