//! Tour representation, cost evaluation and random initialization.
//!
//! A [`Tour`] is a permutation of `0..n` read as a closed cycle: the last
//! city connects back to the first.

use crate::error::SearchError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered city indices forming a closed route.
pub type Tour = Vec<usize>;

/// A generation of tours.
pub type Population = Vec<Tour>;

/// Outcome of an engine run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best tour found during the run.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Best cost recorded after each generation or iteration.
    pub cost_history: Vec<f64>,
}

/// Total cost of traversing `tour` cyclically.
///
/// Sums `distances[tour[i]][tour[(i + 1) % n]]`. Any rotation of the same
/// cycle has the same cost. An empty tour costs `0.0`.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if a city index is out of bounds for `distances`.
pub fn evaluate(tour: &[usize], distances: &[Vec<f64>]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| distances[tour[i]][tour[(i + 1) % n]])
        .sum()
}

/// Evaluates `tour` and rejects NaN or infinite costs.
pub(crate) fn checked_cost(tour: &[usize], distances: &[Vec<f64>]) -> Result<f64, SearchError> {
    let cost = evaluate(tour, distances);
    if cost.is_finite() {
        Ok(cost)
    } else {
        Err(SearchError::NonFiniteCost { cost })
    }
}

/// Draws a uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Creates `size` independent random tours over `n` cities.
///
/// Tours are not required to be distinct.
pub fn create_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Population {
    (0..size).map(|_| random_tour(n, rng)).collect()
}

/// Checks that `tour` contains every city of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn square() -> Vec<Vec<f64>> {
        // 0 -- 1
        // |    |
        // 3 -- 2   (unit sides, diagonals sqrt 2)
        let d = std::f64::consts::SQRT_2;
        vec![
            vec![0.0, 1.0, d, 1.0],
            vec![1.0, 0.0, 1.0, d],
            vec![d, 1.0, 0.0, 1.0],
            vec![1.0, d, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_evaluate_perimeter() {
        let cost = evaluate(&[0, 1, 2, 3], &square());
        assert!((cost - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_crossing_tour() {
        let cost = evaluate(&[0, 2, 1, 3], &square());
        let expected = 2.0 + 2.0 * std::f64::consts::SQRT_2;
        assert!((cost - expected).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_includes_closing_edge() {
        // Asymmetric: the return leg 2 -> 0 is expensive.
        let d = vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![10.0, 1.0, 0.0],
        ];
        assert!((evaluate(&[0, 1, 2], &d) - 12.0).abs() < 1e-12);
        assert!((evaluate(&[0, 2, 1], &d) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_rotation_invariant() {
        let d = square();
        let base = evaluate(&[3, 0, 2, 1], &d);
        assert!((evaluate(&[0, 2, 1, 3], &d) - base).abs() < 1e-12);
        assert!((evaluate(&[2, 1, 3, 0], &d) - base).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(evaluate(&[], &[]), 0.0);
    }

    #[test]
    fn test_checked_cost_rejects_nan() {
        let d = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert!(matches!(
            checked_cost(&[0, 1], &d),
            Err(SearchError::NonFiniteCost { .. })
        ));
        assert_eq!(checked_cost(&[0, 1, 2, 3], &square()), Ok(4.0));
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = create_rng(42);
        for n in 0..20 {
            let tour = random_tour(n, &mut rng);
            assert!(is_permutation(&tour, n), "invalid tour: {tour:?}");
        }
    }

    #[test]
    fn test_create_population_size() {
        let mut rng = create_rng(42);
        let population = create_population(15, 8, &mut rng);
        assert_eq!(population.len(), 15);
        assert!(population.iter().all(|t| is_permutation(t, 8)));
    }

    #[test]
    fn test_is_permutation_rejects() {
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(is_permutation(&[2, 0, 1], 3));
    }
}
