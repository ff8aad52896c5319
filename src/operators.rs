//! Permutation operators shared by all engines.
//!
//! Selection, crossover and mutation for tours encoded as `&[usize]`.
//! Every operator keeps its input a valid permutation. Mutations work in
//! place, so callers clone a tour first when the original must survive.
//!
//! # Operators
//!
//! - [`tournament`]: best of `k` distinct random individuals
//! - [`order_crossover`] (OX): Davis (1985), keeps a block of parent 1 and
//!   the relative order of parent 2
//! - [`invert_mutation`]: reverse a random segment (2-opt move)
//! - [`swap_mutation`]: exchange two random positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use crate::error::ConfigError;
use crate::tour::Tour;
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Selection
// ============================================================================

/// Tournament selection without replacement.
///
/// Samples `k` distinct indices uniformly, returns the tour with the lowest
/// cost among them. Ties go to the first sampled.
///
/// # Errors
/// [`ConfigError::TournamentSize`] if `k == 0` or `k > population.len()`.
///
/// # Panics
/// Panics if `costs` is shorter than `population`.
pub fn tournament<'a, R: Rng>(
    population: &'a [Tour],
    costs: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<&'a Tour, ConfigError> {
    let n = population.len();
    if k == 0 || k > n {
        return Err(ConfigError::TournamentSize {
            size: k,
            population: n,
        });
    }

    let mut sample = index::sample(rng, n, k).into_iter();
    // k >= 1, so the sample has a first element.
    let mut best_idx = sample.next().unwrap_or(0);
    for idx in sample {
        if costs[idx] < costs[best_idx] {
            best_idx = idx;
        }
    }
    Ok(&population[best_idx])
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Picks two distinct cuts `start < end` and delegates to
/// [`order_crossover_at`]. Tours with fewer than two cities are returned
/// as a copy of `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    if parent1.len() < 2 {
        return parent1.to_vec();
    }
    let (start, end) = random_cut_points(parent1.len(), rng);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover with fixed cut points.
///
/// 1. Copy `parent1[start..end]` into the same positions of the child
/// 2. Fill the other positions left to right, skipping the block, with the
///    cities of `parent2` in their original order, skipping cities already
///    placed
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if `start > end`, `end > n`, or the parents are not permutations
/// of the same `0..n`.
pub fn order_crossover_at(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Tour {
    let n = parent1.len();
    assert!(start <= end && end <= n, "invalid cut points {start}..{end}");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let free_slots = (0..start).chain(end..n);
    let donors = parent2.iter().copied().filter(|&city| !placed[city]);
    for (slot, city) in free_slots.zip(donors) {
        child[slot] = city;
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Mutation strategy applied to offspring and neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Reverse a random segment. See [`invert_mutation`].
    #[default]
    Inversion,
    /// Exchange two random positions. See [`swap_mutation`].
    Swap,
}

impl Mutation {
    /// Applies this mutation to `tour` in place.
    pub fn apply<R: Rng>(&self, tour: &mut [usize], rng: &mut R) {
        match self {
            Mutation::Inversion => invert_mutation(tour, rng),
            Mutation::Swap => swap_mutation(tour, rng),
        }
    }
}

/// Inversion mutation: reverse `tour[start..end]` for random distinct
/// cuts `start < end`.
///
/// No-op for tours with fewer than two cities.
///
/// # Complexity
/// O(n) worst case
pub fn invert_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (start, end) = random_cut_points(tour.len(), rng);
    invert_segment(tour, start, end);
}

/// Reverses `tour[start..end]`.
///
/// Applying it twice with the same cuts restores the original tour.
pub fn invert_segment(tour: &mut [usize], start: usize, end: usize) {
    tour[start..end].reverse();
}

/// Swap mutation: exchange the cities at two distinct random positions.
///
/// No-op for tours with fewer than two cities.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = random_cut_points(tour.len(), rng);
    tour.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct indices in `0..n`, returned as `(start, end)` with
/// `start < end`. Requires `n >= 2`.
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
