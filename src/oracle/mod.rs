//! Exact maximum-clique oracle.
//!
//! The GA never depends on how ground truth is obtained; it only consumes an
//! [`ExactCliques`] value. [`ExactCliqueOracle`] is the seam, and
//! [`BronKerbosch`] is the bundled implementation.
//!
//! # References
//!
//! - Bron & Kerbosch (1973), "Algorithm 457: Finding All Cliques of an
//!   Undirected Graph"
//! - Tomita, Tanaka & Takahashi (2006), "The worst-case time complexity for
//!   generating all maximal cliques and computational experiments"

mod bron_kerbosch;
mod types;

pub use bron_kerbosch::BronKerbosch;
pub use types::{ExactCliqueOracle, ExactCliques};
