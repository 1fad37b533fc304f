//! Undirected graph input.
//!
//! The GA consumes a validated [`AdjacencyMatrix`] and nothing else. How the
//! matrix was produced is irrelevant to the search; [`gnp_random_graph`] is
//! provided as the usual collaborator for generating test instances.
//!
//! # References
//!
//! - Erdős & Rényi (1959), "On Random Graphs I"
//! - Gilbert (1959), "Random Graphs"

mod adjacency;
mod random;

pub use adjacency::AdjacencyMatrix;
pub use random::gnp_random_graph;
