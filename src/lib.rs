//! Metaheuristic search for the Traveling Salesman Problem.
//!
//! Three independent engines look for a low-cost closed tour over a
//! distance matrix:
//!
//! - **Genetic Algorithm (GA)**: generational population search with
//!   elitism, tournament selection, order crossover and inversion mutation.
//! - **Simulated Annealing (SA)**: single-tour search accepting worsening
//!   moves with a probability that decays under geometric cooling.
//! - **Tabu Search (TS)**: single-tour neighborhood search with a bounded
//!   memory of recently visited tours and an aspiration override.
//!
//! Every engine takes a [`TspInstance`], its own config and an explicit
//! random source, and returns a [`SearchResult`]: the best tour, its cost
//! and the best cost after every generation or iteration.
//!
//! ```
//! use tsp_metaheur::sa::{SaConfig, SaRunner};
//! use tsp_metaheur::{create_rng, TspInstance};
//!
//! let instance = TspInstance::new(
//!     "square",
//!     vec![
//!         vec![0.0, 1.0, 1.4, 1.0],
//!         vec![1.0, 0.0, 1.0, 1.4],
//!         vec![1.4, 1.0, 0.0, 1.0],
//!         vec![1.0, 1.4, 1.0, 0.0],
//!     ],
//! );
//! let config = SaConfig::default().with_iterations(1_000);
//! let result = SaRunner::run(&instance, &config, &mut create_rng(42)).unwrap();
//! assert!((result.best_cost - 4.0).abs() < 1e-9);
//! ```
//!
//! The shared building blocks live in [`tour`] (cost evaluation, random
//! initialization) and [`operators`] (selection, crossover, mutation).
//! Distance matrices are trusted as given; checking them is the caller's
//! job.

pub mod error;
pub mod ga;
pub mod instance;
pub mod operators;
pub mod random;
pub mod sa;
pub mod tabu;
pub mod tour;

pub use error::{ConfigError, SearchError};
pub use instance::TspInstance;
pub use random::create_rng;
pub use tour::{evaluate, SearchResult, Tour};
