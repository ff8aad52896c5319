//! Error types.
//!
//! Configuration problems are reported by each engine's `validate` before
//! any randomness is drawn. Numeric failures found during a run surface as
//! [`SearchError::NonFiniteCost`].

use thiserror::Error;

/// Invalid engine configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The GA population has no members.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// The GA would run no generation at all.
    #[error("generations must be at least 1")]
    ZeroGenerations,

    /// Elite count outside `[1, population_size]`.
    #[error("elite_count must be in [1, {population}], got {elite}")]
    EliteCount { elite: usize, population: usize },

    /// Tournament cannot draw `size` distinct individuals.
    #[error("tournament size must be in [1, {population}], got {size}")]
    TournamentSize { size: usize, population: usize },

    /// Tabu search with no candidate neighbors never moves.
    #[error("neighborhood_size must be at least 1")]
    EmptyNeighborhood,

    /// A probability parameter outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// Geometric cooling factor outside `[0, 1]`.
    #[error("cooling_rate must be in [0, 1], got {0}")]
    CoolingRate(f64),
}

/// Failure of a search run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A tour evaluated to NaN or an infinite cost.
    #[error("tour cost is not finite: {cost}")]
    NonFiniteCost { cost: f64 },
}
