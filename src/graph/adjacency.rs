//! Dense symmetric adjacency matrix.

use crate::error::{CliqueError, Result};
use std::fmt::Write as _;

/// An undirected graph stored as a dense `V × V` boolean matrix.
///
/// The matrix is validated on construction (square, symmetric, at least one
/// vertex) and immutable afterwards. Diagonal entries are ignored: a vertex is
/// never considered adjacent to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds a graph from row-major boolean rows.
    ///
    /// # Errors
    ///
    /// - [`CliqueError::EmptyGraph`] if there are no rows.
    /// - [`CliqueError::NotSquare`] if any row length differs from the row count.
    /// - [`CliqueError::NotSymmetric`] if `rows[i][j] != rows[j][i]` for `i != j`.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(CliqueError::EmptyGraph);
        }

        let mut cells = Vec::with_capacity(cell_count(n)?);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(CliqueError::NotSquare {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if cells[i * n + j] != cells[j * n + i] {
                    return Err(CliqueError::NotSymmetric { i, j });
                }
            }
        }

        // Self-loops carry no meaning for cliques.
        for i in 0..n {
            cells[i * n + i] = false;
        }

        Ok(Self { n, cells })
    }

    /// Builds a graph with `vertex_count` vertices from an undirected edge list.
    ///
    /// Duplicate edges and self-loops are accepted and have no effect.
    ///
    /// # Errors
    ///
    /// - [`CliqueError::EmptyGraph`] if `vertex_count == 0`.
    /// - [`CliqueError::VertexOutOfRange`] if an edge endpoint is `>= vertex_count`.
    /// - [`CliqueError::GraphTooLarge`] if `vertex_count²` overflows `usize`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(CliqueError::EmptyGraph);
        }
        let mut graph = Self::empty(vertex_count)?;
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(CliqueError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if u != v {
                graph.set_edge(u, v);
            }
        }
        Ok(graph)
    }

    /// Creates a graph with no edges.
    pub(crate) fn empty(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            n: vertex_count,
            cells: vec![false; cell_count(vertex_count)?],
        })
    }

    pub(crate) fn set_edge(&mut self, u: usize, v: usize) {
        self.cells[u * self.n + v] = true;
        self.cells[v * self.n + u] = true;
    }

    /// Number of vertices `V`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Returns `true` if `u` and `v` are distinct and joined by an edge.
    ///
    /// # Panics
    /// Panics if either vertex is out of range.
    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        assert!(u < self.n && v < self.n, "vertex out of range");
        self.cells[u * self.n + v]
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.cells[v * self.n..(v + 1) * self.n];
        row.iter()
            .enumerate()
            .filter_map(|(u, &adjacent)| adjacent.then_some(u))
    }

    /// Number of neighbours of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).count()
    }

    /// All edges `(u, v)` with `u < v`, in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if self.cells[u * self.n + v] {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns `true` if every pair of distinct vertices in `vertices` is adjacent.
    ///
    /// The empty set and singletons are trivially cliques.
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(k, &u)| {
            vertices[k + 1..]
                .iter()
                .all(|&v| u != v && self.is_adjacent(u, v))
        })
    }

    /// Renders the graph in Graphviz DOT format for an external renderer.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph G {\n");
        for v in 0..self.n {
            let _ = writeln!(out, "  {v};");
        }
        for (u, v) in self.edges() {
            let _ = writeln!(out, "  {u} -- {v};");
        }
        out.push_str("}\n");
        out
    }
}

/// Number of matrix cells for `n` vertices, or an error if `n²` overflows.
fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or(CliqueError::GraphTooLarge { vertex_count: n })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_isolated() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 2)]).unwrap()
    }

    #[test]
    fn test_from_edges_is_symmetric() {
        let g = triangle_plus_isolated();
        assert_eq!(g.vertex_count(), 4);
        assert!(g.is_adjacent(0, 1) && g.is_adjacent(1, 0));
        assert!(!g.is_adjacent(0, 3));
        assert_eq!(g.edges(), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![false, true], vec![true]];
        let err = AdjacencyMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            CliqueError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let rows = vec![
            vec![false, true, false],
            vec![true, false, true],
            vec![false, false, false],
        ];
        let err = AdjacencyMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(err, CliqueError::NotSymmetric { i: 1, j: 2 });
    }

    #[test]
    fn test_from_rows_ignores_diagonal() {
        let rows = vec![vec![true, true], vec![true, true]];
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert!(!g.is_adjacent(0, 0));
        assert!(g.is_adjacent(0, 1));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let rows: Vec<Vec<bool>> = vec![];
        assert_eq!(
            AdjacencyMatrix::from_rows(&rows).unwrap_err(),
            CliqueError::EmptyGraph
        );
        assert_eq!(
            AdjacencyMatrix::from_edges(0, &[]).unwrap_err(),
            CliqueError::EmptyGraph
        );
    }

    #[test]
    fn test_edge_out_of_range() {
        let err = AdjacencyMatrix::from_edges(3, &[(0, 3)]).unwrap_err();
        assert_eq!(
            err,
            CliqueError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_oversized_graph_rejected() {
        let vertex_count = usize::MAX / 2;
        assert_eq!(
            AdjacencyMatrix::from_edges(vertex_count, &[]).unwrap_err(),
            CliqueError::GraphTooLarge { vertex_count }
        );
        assert!(CliqueError::GraphTooLarge { vertex_count }.is_configuration());
    }

    #[test]
    fn test_is_clique() {
        let g = triangle_plus_isolated();
        assert!(g.is_clique(&[]));
        assert!(g.is_clique(&[3]));
        assert!(g.is_clique(&[0, 1, 2]));
        assert!(!g.is_clique(&[0, 1, 3]));
    }

    #[test]
    fn test_to_dot() {
        let g = AdjacencyMatrix::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(g.to_dot(), "graph G {\n  0;\n  1;\n  0 -- 1;\n}\n");
    }
}
