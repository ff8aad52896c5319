//! Genetic Algorithm for the TSP.
//!
//! Generational search over a population of tours with elitism. Each
//! generation keeps the `elite_count` cheapest tours unchanged and fills
//! the rest with offspring built from tournament-selected parents, order
//! crossover and inversion mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::GaRunner;
