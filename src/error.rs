//! Error types for the clique search.
//!
//! Every error here is raised by upfront validation: once a run has been
//! accepted, evaluation, selection, crossover and mutation are total and
//! cannot fail mid-run.

use thiserror::Error;

/// Errors surfaced before a run starts.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliqueError {
    /// A GA parameter is outside its valid domain.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// The graph has no vertices.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// `vertex_count²` does not fit in `usize`.
    #[error("graph with {vertex_count} vertices is too large for a dense adjacency matrix")]
    GraphTooLarge {
        /// The requested vertex count.
        vertex_count: usize,
    },

    /// A row of the adjacency matrix has the wrong length.
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Row index.
        row: usize,
        /// Number of rows, which every row length must equal.
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// `adj[i][j] != adj[j][i]`.
    #[error("adjacency matrix is not symmetric at ({i}, {j})")]
    NotSymmetric {
        /// Row of the asymmetric entry.
        i: usize,
        /// Column of the asymmetric entry.
        j: usize,
    },

    /// An edge or clique references a vertex that does not exist.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The referenced vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Edge probability outside `[0, 1]`.
    #[error("edge probability {value} is outside [0, 1]")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },

    /// The exact clique set is empty or inconsistent with its maximum size.
    #[error("invalid exact clique set: {reason}")]
    InvalidExactCliques {
        /// What was wrong with the set.
        reason: String,
    },
}

impl CliqueError {
    /// Stable machine-readable code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CONFIGURATION_INVALID",
            Self::EmptyGraph => "CONFIGURATION_EMPTY_GRAPH",
            Self::GraphTooLarge { .. } => "CONFIGURATION_GRAPH_TOO_LARGE",
            Self::NotSquare { .. } => "INPUT_NOT_SQUARE",
            Self::NotSymmetric { .. } => "INPUT_NOT_SYMMETRIC",
            Self::VertexOutOfRange { .. } => "INPUT_VERTEX_OUT_OF_RANGE",
            Self::InvalidProbability { .. } => "INPUT_INVALID_PROBABILITY",
            Self::InvalidExactCliques { .. } => "INPUT_INVALID_EXACT_CLIQUES",
        }
    }

    /// Returns `true` for configuration errors (as opposed to input mismatches).
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::EmptyGraph | Self::GraphTooLarge { .. }
        )
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Convenient result alias for this crate.
pub type Result<T, E = CliqueError> = std::result::Result<T, E>;
