//! SA configuration.

use crate::error::ConfigError;
use crate::operators::Mutation;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature follows a geometric schedule: `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.999)
///     .with_iterations(50_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    ///
    /// Values `<= 0` are legal and turn the search into greedy descent.
    pub initial_temperature: f64,

    /// Geometric cooling factor, expected in (0, 1).
    ///
    /// `0.0` freezes the search after the first iteration.
    pub cooling_rate: f64,

    /// Number of neighbor evaluations. One history entry per iteration.
    pub iterations: usize,

    /// Neighbor move.
    pub mutation: Mutation,

    /// Report every new best cost through `log::info!`.
    pub verbose: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            iterations: 10_000,
            mutation: Mutation::Inversion,
            verbose: false,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cooling_rate) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
