//! Genetic Algorithm for maximum clique search.
//!
//! Candidates are bit vectors over the graph's vertices. A candidate scores
//! its vertex count if the selected vertices form a clique and `0` otherwise.
//! Each generation evaluates the population, fills a parent pool by
//! tournament, recombines consecutive parent pairs with one-point crossover,
//! mutates every child bit-wise, and replaces the population wholesale.
//!
//! # Key Types
//!
//! - [`Individual`]: Fixed-length bit vector, one bit per vertex
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual plus per-generation statistics
//!
//! # Submodules
//!
//! - [`fitness`]: Clique-validity scoring
//! - [`selection`]: Tournament selection without replacement
//! - [`operators`]: One-point crossover and bit-flip mutation
//!
//! # Determinism
//!
//! All randomness comes from one [`StdRng`](rand::rngs::StdRng) seeded from
//! [`GaConfig::seed`] and threaded explicitly through initialization,
//! selection, crossover and mutation. Identical seed, configuration and graph
//! reproduce every population exactly.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Bui & Eppley (1995), "A Hybrid Genetic Algorithm for the Maximum Clique Problem"

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{random_population, Fitness, Individual};
