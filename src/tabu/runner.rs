//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial tour
//! 2. At each iteration:
//!    a. Sample `neighborhood_size` mutations of the current tour
//!    b. Pick the cheapest candidate that is not tabu, or that beats the
//!       global best (aspiration)
//!    c. Move to it and add it to the tabu memory
//!    d. Update the global best if improved
//! 3. Terminate after the configured number of iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::error::SearchError;
use crate::instance::TspInstance;
use crate::tour::{checked_cost, random_tour, SearchResult, Tour};
use rand::Rng;

/// What a single tabu iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to a candidate.
    Moved {
        /// The candidate was tabu and admitted by aspiration.
        aspiration: bool,
        /// The move produced a new global best.
        improved: bool,
    },
    /// Every candidate was tabu without beating the global best.
    Stalled,
}

/// Search state of a tabu trajectory.
#[derive(Debug, Clone)]
pub struct TabuState {
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    memory: TabuMemory,
}

impl TabuState {
    /// Starts from a random tour with an empty tabu memory.
    pub fn new<R: Rng>(
        instance: &TspInstance,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<Self, SearchError> {
        let current = random_tour(instance.num_cities(), rng);
        let current_cost = checked_cost(&current, &instance.distances)?;
        Ok(Self {
            best: current.clone(),
            best_cost: current_cost,
            current,
            current_cost,
            memory: TabuMemory::new(config.tabu_tenure),
        })
    }

    /// Performs one tabu iteration.
    ///
    /// Candidates are siblings: each one mutates its own copy of the
    /// current tour. Ties between admissible candidates go to the first
    /// sampled.
    pub fn step<R: Rng>(
        &mut self,
        distances: &[Vec<f64>],
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<StepOutcome, SearchError> {
        let mut chosen: Option<(Tour, f64, bool)> = None;

        for _ in 0..config.neighborhood_size {
            let mut candidate = self.current.clone();
            config.mutation.apply(&mut candidate, rng);
            let cost = checked_cost(&candidate, distances)?;

            let is_tabu = self.memory.contains(&candidate);
            let admissible = !is_tabu || cost < self.best_cost;
            let cheaper = chosen.as_ref().is_none_or(|(_, best, _)| cost < *best);

            if admissible && cheaper {
                chosen = Some((candidate, cost, is_tabu));
            }
        }

        let Some((tour, cost, aspiration)) = chosen else {
            return Ok(StepOutcome::Stalled);
        };

        self.memory.push(&tour);
        self.current = tour;
        self.current_cost = cost;

        let improved = self.current_cost < self.best_cost;
        if improved {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
        }

        Ok(StepOutcome::Moved {
            aspiration,
            improved,
        })
    }

    pub fn current(&self) -> &[usize] {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best(&self) -> &[usize] {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    fn into_result(self, cost_history: Vec<f64>) -> SearchResult {
        SearchResult {
            best_tour: self.best,
            best_cost: self.best_cost,
            cost_history,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search for `config.iterations` iterations.
    ///
    /// # Errors
    /// - [`SearchError::Config`] if `config` fails [`TabuConfig::validate`].
    /// - [`SearchError::NonFiniteCost`] if any tour evaluates to NaN or ±∞.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_metaheur::tabu::{TabuConfig, TabuRunner};
    /// use tsp_metaheur::{create_rng, TspInstance};
    ///
    /// let instance = TspInstance::new(
    ///     "line",
    ///     vec![
    ///         vec![0.0, 1.0, 2.0, 3.0],
    ///         vec![1.0, 0.0, 1.0, 2.0],
    ///         vec![2.0, 1.0, 0.0, 1.0],
    ///         vec![3.0, 2.0, 1.0, 0.0],
    ///     ],
    /// );
    /// let config = TabuConfig::default().with_iterations(50);
    /// let result = TabuRunner::run(&instance, &config, &mut create_rng(42)).unwrap();
    /// assert_eq!(result.cost_history.len(), 50);
    /// assert!((result.best_cost - 6.0).abs() < 1e-9);
    /// ```
    pub fn run<R: Rng>(
        instance: &TspInstance,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        config.validate()?;
        log::debug!("{} | Running Tabu Search...", instance.name);

        let mut state = TabuState::new(instance, config, rng)?;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let outcome = state.step(&instance.distances, config, rng)?;

            if config.verbose && matches!(outcome, StepOutcome::Moved { improved: true, .. }) {
                log::info!(
                    "{} | Iter {iteration}: new best cost = {:.2}",
                    instance.name,
                    state.best_cost()
                );
            }
            cost_history.push(state.best_cost());
        }

        Ok(state.into_result(cost_history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::instance::test_support::{circle_instance, circle_optimum};
    use crate::random::create_rng;
    use crate::tour::{evaluate, is_permutation};

    #[test]
    fn test_tabu_circle_finds_optimum() {
        let instance = circle_instance(8);
        let config = TabuConfig::default()
            .with_iterations(300)
            .with_tabu_tenure(5)
            .with_neighborhood_size(30);

        let result = TabuRunner::run(&instance, &config, &mut create_rng(42)).unwrap();

        let optimum = circle_optimum(8);
        assert!(
            (result.best_cost - optimum).abs() < 1e-9,
            "expected {optimum}, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_history_length_and_monotone() {
        let instance = circle_instance(14);
        let config = TabuConfig::default().with_iterations(120);
        let result = TabuRunner::run(&instance, &config, &mut create_rng(42)).unwrap();

        assert_eq!(result.cost_history.len(), 120);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        let recomputed = evaluate(&result.best_tour, &instance.distances);
        assert!((recomputed - result.best_cost).abs() < 1e-12);
    }

    #[test]
    fn test_memory_never_exceeds_tenure() {
        let instance = circle_instance(10);
        let config = TabuConfig::default().with_tabu_tenure(4);
        let mut rng = create_rng(42);
        let mut state = TabuState::new(&instance, &config, &mut rng).unwrap();

        for _ in 0..200 {
            state.step(&instance.distances, &config, &mut rng).unwrap();
            assert!(state.memory().len() <= 4);
            assert!(is_permutation(state.current(), 10));
        }
        assert_eq!(state.memory().len(), 4);
    }

    #[test]
    fn test_stalls_when_everything_is_tabu() {
        // Two cities: the only candidate is the current tour itself, which
        // is tabu after the first move and can never beat the best.
        let instance = TspInstance::new("pair", vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let config = TabuConfig::default()
            .with_tabu_tenure(3)
            .with_neighborhood_size(4);
        let mut rng = create_rng(42);
        let mut state = TabuState::new(&instance, &config, &mut rng).unwrap();

        let first = state.step(&instance.distances, &config, &mut rng).unwrap();
        assert!(matches!(first, StepOutcome::Moved { .. }));

        let mut stalled = 0;
        for _ in 0..20 {
            let outcome = state.step(&instance.distances, &config, &mut rng).unwrap();
            if outcome == StepOutcome::Stalled {
                stalled += 1;
            }
        }
        assert!(stalled > 0, "expected tabu to block some moves");
    }

    #[test]
    fn test_stalled_run_still_records_history() {
        let instance = TspInstance::new("pair", vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let config = TabuConfig::default().with_iterations(10);
        let result = TabuRunner::run(&instance, &config, &mut create_rng(42)).unwrap();
        assert_eq!(result.cost_history, vec![2.0; 10]);
    }

    #[test]
    fn test_aspiration_admits_tabu_improvement() {
        // Pre-load the memory with every tour reachable from the start, so
        // any move that happens must come through aspiration.
        let instance = circle_instance(5);
        let config = TabuConfig::default()
            .with_tabu_tenure(1000)
            .with_neighborhood_size(200);
        let mut rng = create_rng(42);
        let mut state = TabuState::new(&instance, &config, &mut rng).unwrap();

        let start = state.current().to_vec();
        let n = start.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut neighbor = start.clone();
                neighbor[i..j].reverse();
                state.memory.push(&neighbor);
            }
        }

        let start_cost = state.current_cost();
        let optimum = circle_optimum(5);
        let outcome = state.step(&instance.distances, &config, &mut rng).unwrap();

        if start_cost - optimum > 1e-9 {
            // A non-optimal start has an improving 2-opt neighbor.
            assert_eq!(
                outcome,
                StepOutcome::Moved {
                    aspiration: true,
                    improved: true
                }
            );
            assert!(state.best_cost() < start_cost);
        } else {
            assert_eq!(outcome, StepOutcome::Stalled);
        }
    }

    #[test]
    fn test_zero_iterations() {
        let instance = circle_instance(6);
        let config = TabuConfig::default().with_iterations(0);
        let result = TabuRunner::run(&instance, &config, &mut create_rng(42)).unwrap();
        assert!(result.cost_history.is_empty());
        assert!(is_permutation(&result.best_tour, 6));
    }

    #[test]
    fn test_empty_neighborhood_rejected() {
        let instance = circle_instance(6);
        let config = TabuConfig::default().with_neighborhood_size(0);
        assert_eq!(
            TabuRunner::run(&instance, &config, &mut create_rng(42)),
            Err(SearchError::Config(ConfigError::EmptyNeighborhood))
        );
    }
}
