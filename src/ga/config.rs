//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{CliqueError, Result};

/// Configuration for the clique-search GA.
///
/// # Defaults
///
/// ```
/// use clique_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use clique_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.02)
///     .with_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals `P`. Must be even and at least 2, since
    /// offspring are produced from consecutive parent pairs.
    pub population_size: usize,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that a parent pair is recombined (0.0–1.0).
    ///
    /// Otherwise the children are copies of the parents.
    pub crossover_rate: f64,

    /// Number of generations. The loop always runs all of them.
    pub generations: usize,

    /// Contestants per tournament, drawn without replacement.
    ///
    /// Capped at the population size when drawing.
    pub tournament_size: usize,

    /// Seed of the single random stream shared by every stochastic step.
    pub seed: u64,

    /// Whether to score individuals in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature; never changes the result.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.01,
            crossover_rate: 0.9,
            generations: 50,
            tournament_size: 3,
            seed: 50,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-bit mutation rate.
    ///
    /// Values are not clamped; [`validate`](Self::validate) rejects
    /// anything outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`CliqueError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(CliqueError::invalid_config(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(CliqueError::invalid_config(
                "population_size",
                format!("must be even, got {}", self.population_size),
            ));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        if self.tournament_size == 0 {
            return Err(CliqueError::invalid_config(
                "tournament_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn check_rate(field: &'static str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(CliqueError::invalid_config(
            field,
            format!("must be within [0, 1], got {rate}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert_eq!(config.generations, 50);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.seed, 50);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(64)
            .with_mutation_rate(0.05)
            .with_crossover_rate(0.7)
            .with_generations(10)
            .with_tournament_size(2)
            .with_seed(42)
            .with_parallel(true);

        assert_eq!(config.population_size, 64);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert!((config.crossover_rate - 0.7).abs() < 1e-12);
        assert_eq!(config.generations, 10);
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.seed, 42);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(2).validate().is_ok());
        assert!(GaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let err = GaConfig::default()
                .with_population_size(n)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                CliqueError::InvalidConfig {
                    field: "population_size",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_population_odd() {
        let err = GaConfig::default()
            .with_population_size(21)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be even, got 21"
        );
    }

    #[test]
    fn test_validate_rates() {
        for rate in [-0.1, 1.5, f64::NAN] {
            assert!(GaConfig::default()
                .with_mutation_rate(rate)
                .validate()
                .is_err());
            assert!(GaConfig::default()
                .with_crossover_rate(rate)
                .validate()
                .is_err());
        }
        assert!(GaConfig::default()
            .with_mutation_rate(0.0)
            .with_crossover_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default()
            .with_tournament_size(0)
            .validate()
            .is_err());
    }
}
