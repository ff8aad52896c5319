//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;
use crate::operators::Mutation;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_elite_count(4)
///     .with_mutation_rate(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of generations to run. One history entry per generation.
    pub generations: usize,

    /// Number of best tours copied unchanged into the next generation.
    ///
    /// Must be in `[1, population_size]`.
    pub elite_count: usize,

    /// Tournament size `k` used to pick each parent.
    ///
    /// Must be in `[1, population_size]`.
    pub tournament_size: usize,

    /// Probability of recombining two parents (0.0–1.0).
    ///
    /// When crossover is skipped, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    ///
    /// Rolled independently of whether crossover happened.
    pub mutation_rate: f64,

    /// Mutation operator applied to offspring.
    pub mutation: Mutation,

    /// Whether to evaluate tours in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are
    /// identical either way.
    pub parallel: bool,

    /// Report every new best cost through `log::info!`.
    pub verbose: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            elite_count: 2,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            mutation: Mutation::Inversion,
            parallel: false,
            verbose: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables progress reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.elite_count == 0 || self.elite_count > self.population_size {
            return Err(ConfigError::EliteCount {
                elite: self.elite_count,
                population: self.population_size,
            });
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                size: self.tournament_size,
                population: self.population_size,
            });
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
