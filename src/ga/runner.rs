//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → repeat, then a final evaluation to extract the best
//! individual.

use super::config::GaConfig;
use super::fitness::{best_index, evaluate_population};
use super::operators::{bit_flip_mutation, one_point_crossover};
use super::selection::select_parents;
use super::types::{random_population, Fitness, Individual};
use crate::error::{CliqueError, Result};
use crate::graph::AdjacencyMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Fitness summary of one evaluated population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; `0` is the initial population.
    pub generation: usize,

    /// Highest score in the population.
    pub best_fitness: Fitness,

    /// Mean score across the population.
    pub mean_fitness: f64,

    /// Number of individuals with a non-zero score.
    pub valid_count: usize,
}

impl GenerationStats {
    fn from_scores(generation: usize, scores: &[Fitness]) -> Self {
        let best_fitness = scores.iter().copied().max().unwrap_or(0);
        let total: usize = scores.iter().sum();
        let mean_fitness = if scores.is_empty() {
            0.0
        } else {
            total as f64 / scores.len() as f64
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
            valid_count: scores.iter().filter(|&&s| s > 0).count(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Highest-scoring individual of the final population, ties going to the
    /// earliest position.
    pub best: Individual,

    /// Score of `best`.
    pub best_fitness: Fitness,

    /// Number of generations executed (always the configured count).
    pub generations: usize,

    /// Statistics for the initial population and after every generation
    /// (`generations + 1` entries).
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    /// Vertices selected by the best individual, ascending.
    pub fn clique(&self) -> Vec<usize> {
        self.best.selected_vertices()
    }
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use clique_ga::ga::{GaConfig, GaRunner};
/// use clique_ga::graph::AdjacencyMatrix;
///
/// let graph = AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 2)]).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&graph, &config).unwrap();
/// assert!(result.best_fitness <= 3);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `graph`.
    ///
    /// # Errors
    /// Returns [`CliqueError::InvalidConfig`] if the configuration is
    /// invalid. No run is attempted in that case.
    pub fn run(graph: &AdjacencyMatrix, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(graph, config, |_, _| {})
    }

    /// Runs the GA, calling `observer(generation, population)` at every
    /// generation boundary.
    ///
    /// Generation `0` is the initial population and generation
    /// `config.generations` is the final one, so the observer is invoked
    /// `generations + 1` times.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    #[instrument(
        name = "ga.run",
        err,
        skip(graph, config, observer),
        fields(
            vertices = graph.vertex_count(),
            population_size = config.population_size,
            generations = config.generations,
            seed = config.seed,
        ),
    )]
    pub fn run_with_observer<F>(
        graph: &AdjacencyMatrix,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(usize, &[Individual]),
    {
        config.validate()?;
        let vertices = graph.vertex_count();
        if vertices == 0 {
            return Err(CliqueError::EmptyGraph);
        }

        let mut rng = StdRng::seed_from_u64(config.seed);

        // 1. Initialize population
        let mut population = random_population(config.population_size, vertices, &mut rng);
        let mut history = Vec::with_capacity(config.generations + 1);

        // 2. Generational loop, full replacement, no early stop
        for gen in 0..config.generations {
            observer(gen, &population);

            let scores = evaluate_population(&population, graph, config.parallel);
            let stats = GenerationStats::from_scores(gen, &scores);
            debug!(
                generation = gen,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                valid = stats.valid_count,
                "evaluated population"
            );
            history.push(stats);

            let parents = select_parents(&population, &scores, config.tournament_size, &mut rng);
            population = breed(&parents, config, &mut rng);
        }

        // 3. Final evaluation and best extraction
        observer(config.generations, &population);
        let scores = evaluate_population(&population, graph, config.parallel);
        history.push(GenerationStats::from_scores(config.generations, &scores));

        let best_idx = best_index(&scores).unwrap_or(0);
        let best = population.swap_remove(best_idx);
        let best_fitness = scores[best_idx];

        info!(
            best_fitness,
            clique = ?best.selected_vertices(),
            "ga run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.generations,
            history,
        })
    }
}

/// Produces the next population from a parent pool.
///
/// Parents are consumed in pairs `(0, 1), (2, 3), …`; each pair is crossed
/// over and both children are then mutated, first child first.
fn breed<R: Rng>(parents: &[Individual], config: &GaConfig, rng: &mut R) -> Vec<Individual> {
    let mut offspring = Vec::with_capacity(parents.len());
    for pair in parents.chunks_exact(2) {
        let (c1, c2) = one_point_crossover(&pair[0], &pair[1], config.crossover_rate, rng);
        offspring.push(bit_flip_mutation(&c1, config.mutation_rate, rng));
        offspring.push(bit_flip_mutation(&c2, config.mutation_rate, rng));
    }
    offspring
}

// ============================================================================
// Tests
// ============================================================================
