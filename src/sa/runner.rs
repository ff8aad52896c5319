//! SA execution loop.

use super::config::SaConfig;
use crate::error::SearchError;
use crate::instance::TspInstance;
use crate::tour::{checked_cost, random_tour, SearchResult, Tour};
use rand::Rng;

/// Below this temperature worsening moves are never accepted.
pub const FROZEN_TEMPERATURE: f64 = 1e-6;

/// Search state of a single annealing trajectory.
///
/// Costs are always those of the tours they sit next to; the state only
/// changes through [`AnnealingState::step`].
#[derive(Debug, Clone)]
pub struct AnnealingState {
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    temperature: f64,
}

impl AnnealingState {
    /// Starts from a random tour at `config.initial_temperature`.
    pub fn new<R: Rng>(
        instance: &TspInstance,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<Self, SearchError> {
        let current = random_tour(instance.num_cities(), rng);
        let current_cost = checked_cost(&current, &instance.distances)?;
        Ok(Self {
            best: current.clone(),
            best_cost: current_cost,
            current,
            current_cost,
            temperature: config.initial_temperature,
        })
    }

    /// Performs one annealing iteration and cools the temperature.
    ///
    /// 1. Mutate a copy of the current tour
    /// 2. Accept it if it is cheaper; otherwise, unless frozen, accept with
    ///    probability `exp(-delta / T)` (Metropolis criterion)
    /// 3. Update the best tour on strict improvement
    /// 4. `T *= cooling_rate`
    ///
    /// Returns `true` when the best tour improved.
    pub fn step<R: Rng>(
        &mut self,
        distances: &[Vec<f64>],
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<bool, SearchError> {
        let mut neighbor = self.current.clone();
        config.mutation.apply(&mut neighbor, rng);
        let neighbor_cost = checked_cost(&neighbor, distances)?;
        let delta = neighbor_cost - self.current_cost;

        let accept = if delta < 0.0 {
            true
        } else if self.temperature > FROZEN_TEMPERATURE {
            let probability = (-delta / self.temperature).exp();
            rng.random_range(0.0..1.0) < probability
        } else {
            false
        };

        if accept {
            self.current = neighbor;
            self.current_cost = neighbor_cost;
        }

        let improved = self.current_cost < self.best_cost;
        if improved {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
        }

        self.temperature *= config.cooling_rate;
        Ok(improved)
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

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    fn into_result(self, cost_history: Vec<f64>) -> SearchResult {
        SearchResult {
            best_tour: self.best,
            best_cost: self.best_cost,
            cost_history,
        }
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization for `config.iterations` iterations.
    ///
    /// # Errors
    /// - [`SearchError::Config`] if `config` fails [`SaConfig::validate`].
    /// - [`SearchError::NonFiniteCost`] if any tour evaluates to NaN or ±∞.
    pub fn run<R: Rng>(
        instance: &TspInstance,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        config.validate()?;
        log::debug!("{} | Running SA...", instance.name);

        let mut state = AnnealingState::new(instance, config, rng)?;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            // Temperature at which the move was judged, before cooling.
            let temperature = state.temperature();
            let improved = state.step(&instance.distances, config, rng)?;

            if improved && config.verbose {
                log::info!(
                    "{} | Iter {iteration}: new best cost = {:.2} (Temp: {temperature:.2})",
                    instance.name,
                    state.best_cost()
                );
            }
            cost_history.push(state.best_cost());
        }

        Ok(state.into_result(cost_history))
    }
}
