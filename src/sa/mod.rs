//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search that accepts worsening moves with a
//! probability that shrinks as the temperature cools geometrically. Once
//! the temperature drops below [`FROZEN_TEMPERATURE`] the search becomes
//! greedy descent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{AnnealingState, SaRunner, FROZEN_TEMPERATURE};
