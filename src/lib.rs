//! Maximum clique search with a genetic algorithm, cross-checked against an
//! exact oracle.
//!
//! - **Graph**: Validated dense adjacency matrix and a seeded G(n, p)
//!   generator for test instances.
//! - **Genetic Algorithm (GA)**: Bit-vector encoding, clique-validity
//!   fitness, tournament selection, one-point crossover, bit-flip mutation
//!   and full generational replacement.
//! - **Oracle**: Exact maximum cliques via Bron–Kerbosch with pivoting,
//!   behind the [`oracle::ExactCliqueOracle`] trait.
//! - **Compare**: Agreement verdict between the GA's best individual and
//!   the exact answer.
//!
//! # Example
//!
//! ```
//! use clique_ga::compare::compare;
//! use clique_ga::ga::{GaConfig, GaRunner};
//! use clique_ga::graph::gnp_random_graph;
//! use clique_ga::oracle::{BronKerbosch, ExactCliqueOracle};
//!
//! let graph = gnp_random_graph(10, 0.5, 50)?;
//! let exact = BronKerbosch.maximum_cliques(&graph);
//! let result = GaRunner::run(&graph, &GaConfig::default())?;
//! let report = compare(&result.best, &exact);
//! println!("{}", report.verdict);
//! # Ok::<(), clique_ga::CliqueError>(())
//! ```

pub mod compare;
pub mod error;
pub mod ga;
pub mod graph;
pub mod oracle;

pub use error::{CliqueError, Result};
