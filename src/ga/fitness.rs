//! Clique-validity fitness.
//!
//! The score of an individual is the size of its selected vertex set if that
//! set is a clique, and `0` otherwise. There is no partial credit: a single
//! non-adjacent pair zeroes the score, as does the empty selection.

use super::types::{Fitness, Individual};
use crate::graph::AdjacencyMatrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores one individual against `graph`.
///
/// Checks every unordered pair of selected vertices and returns `0` at the
/// first non-adjacent pair.
///
/// # Complexity
/// O(|S|²) where `S` is the selected set.
///
/// # Panics
/// Panics if `individual` is longer than the graph's vertex count.
pub fn evaluate(individual: &Individual, graph: &AdjacencyMatrix) -> Fitness {
    let selected = individual.selected_vertices();
    for (k, &i) in selected.iter().enumerate() {
        for &j in &selected[k + 1..] {
            if !graph.is_adjacent(i, j) {
                return 0;
            }
        }
    }
    selected.len()
}

/// Scores a whole population, preserving order.
///
/// With the `parallel` feature enabled and `parallel == true`, individuals are
/// scored on the rayon pool. Evaluation is read-only and draws no randomness,
/// so the result is identical to the sequential path.
pub fn evaluate_population(
    population: &[Individual],
    graph: &AdjacencyMatrix,
    parallel: bool,
) -> Vec<Fitness> {
    if parallel {
        evaluate_parallel(population, graph)
    } else {
        population.iter().map(|ind| evaluate(ind, graph)).collect()
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(population: &[Individual], graph: &AdjacencyMatrix) -> Vec<Fitness> {
    population
        .par_iter()
        .map(|ind| evaluate(ind, graph))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(population: &[Individual], graph: &AdjacencyMatrix) -> Vec<Fitness> {
    population.iter().map(|ind| evaluate(ind, graph)).collect()
}

/// Index of the highest score, ties going to the earliest position.
///
/// Returns `None` for an empty slice.
pub fn best_index(scores: &[Fitness]) -> Option<usize> {
    let mut best: Option<(usize, Fitness)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
