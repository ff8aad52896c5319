//! Tabu Search configuration.

use crate::error::ConfigError;
use crate::operators::Mutation;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_tenure(10)
///     .with_neighborhood_size(30);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_tenure, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations. One history entry per iteration.
    pub iterations: usize,
    /// How many recently visited tours stay forbidden. `0` disables the
    /// tabu list.
    pub tabu_tenure: usize,
    /// Candidate neighbors sampled per iteration. Must be at least 1.
    pub neighborhood_size: usize,
    /// Move used to sample each neighbor.
    pub mutation: Mutation,
    /// Report every new best cost through `log::info!`.
    pub verbose: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_tenure: 7,
            neighborhood_size: 20,
            mutation: Mutation::Inversion,
            verbose: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the tabu memory).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of candidates per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the neighbor move.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Enables or disables progress reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighborhood_size == 0 {
            return Err(ConfigError::EmptyNeighborhood);
        }
        Ok(())
    }
}
