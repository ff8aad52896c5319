//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! evaluation → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use crate::error::SearchError;
use crate::instance::TspInstance;
use crate::operators::{order_crossover, tournament};
use crate::tour::{checked_cost, create_population, Population, SearchResult, Tour};
use rand::Rng;

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, GaRunner};
/// use tsp_metaheur::{create_rng, TspInstance};
///
/// let instance = TspInstance::new(
///     "triangle",
///     vec![
///         vec![0.0, 1.0, 2.0],
///         vec![1.0, 0.0, 1.5],
///         vec![2.0, 1.5, 0.0],
///     ],
/// );
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_generations(5);
/// let result = GaRunner::run(&instance, &config, &mut create_rng(42)).unwrap();
/// assert_eq!(result.cost_history.len(), 5);
/// assert!((result.best_cost - 4.5).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// - [`SearchError::Config`] if `config` fails [`GaConfig::validate`];
    ///   nothing is drawn from `rng` in that case.
    /// - [`SearchError::NonFiniteCost`] if any tour evaluates to NaN or ±∞.
    pub fn run<R: Rng>(
        instance: &TspInstance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        config.validate()?;
        log::debug!("{} | Running GA...", instance.name);

        let distances = &instance.distances;
        let mut population =
            create_population(config.population_size, instance.num_cities(), rng);

        let mut best_tour: Tour = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut cost_history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let costs = evaluate_population(&population, distances, config.parallel)?;
            let ranked = rank_by_cost(&costs);

            // ranked[0] is the generation's best and the first elite.
            let gen_best = ranked[0];
            if costs[gen_best] < best_cost {
                best_cost = costs[gen_best];
                best_tour = population[gen_best].clone();

                if config.verbose {
                    log::info!(
                        "{} | Gen {generation}: new best cost = {best_cost:.2}",
                        instance.name
                    );
                }
            }
            cost_history.push(costs[gen_best]);

            population = next_generation(&population, &costs, &ranked, config, rng)?;
        }

        Ok(SearchResult {
            best_tour,
            best_cost,
            cost_history,
        })
    }
}

/// Builds the next generation: elites first, then offspring until the
/// population is full again.
fn next_generation<R: Rng>(
    population: &[Tour],
    costs: &[f64],
    ranked: &[usize],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population, SearchError> {
    let mut next_gen: Population = Vec::with_capacity(config.population_size);
    next_gen.extend(
        ranked[..config.elite_count]
            .iter()
            .map(|&idx| population[idx].clone()),
    );

    while next_gen.len() < config.population_size {
        // Parents are drawn independently and may be the same tour.
        let parent1 = tournament(population, costs, config.tournament_size, rng)?;
        let parent2 = tournament(population, costs, config.tournament_size, rng)?;

        let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
            order_crossover(parent1, parent2, rng)
        } else {
            parent1.clone()
        };

        if rng.random_range(0.0..1.0) < config.mutation_rate {
            config.mutation.apply(&mut child, rng);
        }

        next_gen.push(child);
    }

    Ok(next_gen)
}

/// Population indices sorted by ascending cost; ties keep population order.
fn rank_by_cost(costs: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..costs.len()).collect();
    ranked.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]));
    ranked
}

#[cfg(feature = "parallel")]
fn evaluate_population(
    population: &[Tour],
    distances: &[Vec<f64>],
    parallel: bool,
) -> Result<Vec<f64>, SearchError> {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter()
            .map(|tour| checked_cost(tour, distances))
            .collect()
    } else {
        population
            .iter()
            .map(|tour| checked_cost(tour, distances))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    population: &[Tour],
    distances: &[Vec<f64>],
    _parallel: bool,
) -> Result<Vec<f64>, SearchError> {
    population
        .iter()
        .map(|tour| checked_cost(tour, distances))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
