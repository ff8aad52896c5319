//! Tabu Search (TS).
//!
//! A single-solution trajectory search that remembers recently visited
//! tours and refuses to return to them, unless doing so yields a new global
//! best (aspiration). Tabu status is tested on the whole tour, not on the
//! move that produced it.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{StepOutcome, TabuRunner, TabuState};
