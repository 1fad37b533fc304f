//! Tournament selection.
//!
//! Each output slot is filled by an independent tournament: `k` distinct
//! individuals are drawn uniformly without replacement and the one with the
//! highest score wins. The same individual may win several slots.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection, and
//!   the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Fitness, Individual};
use rand::seq::index;
use rand::Rng;

/// Runs one tournament and returns the winner's index.
///
/// Draws `min(k, n)` distinct indices. Ties go to the contestant drawn
/// first, so a later contestant must be strictly better to win.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn tournament<R: Rng>(scores: &[Fitness], k: usize, rng: &mut R) -> usize {
    let n = scores.len();
    assert!(n > 0, "cannot select from empty population");

    let contestants = index::sample(rng, n, k.clamp(1, n));
    let mut draws = contestants.iter();
    let mut winner = draws.next().unwrap_or(0);
    for idx in draws {
        if scores[idx] > scores[winner] {
            winner = idx;
        }
    }
    winner
}

/// Fills a parent pool of the same size as `population` by tournament.
///
/// # Complexity
/// O(n·k)
///
/// # Panics
/// Panics if `population` and `scores` differ in length or are empty.
pub fn select_parents<R: Rng>(
    population: &[Individual],
    scores: &[Fitness],
    k: usize,
    rng: &mut R,
) -> Vec<Individual> {
    assert_eq!(
        population.len(),
        scores.len(),
        "population and scores must have equal length"
    );
    (0..population.len())
        .map(|_| population[tournament(scores, k, rng)].clone())
        .collect()
}
