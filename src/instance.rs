//! Problem instance consumed by the engines.

/// A named TSP instance.
///
/// `distances[i][j]` is the cost of travelling directly from city `i` to
/// city `j`. The matrix may be asymmetric. It is trusted as given: shape,
/// sign and diagonal checks belong to the caller.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::TspInstance;
///
/// let instance = TspInstance::new(
///     "triangle",
///     vec![
///         vec![0.0, 1.0, 2.0],
///         vec![1.0, 0.0, 1.5],
///         vec![2.0, 1.5, 0.0],
///     ],
/// );
/// assert_eq!(instance.num_cities(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspInstance {
    /// Identifier used in progress messages only.
    pub name: String,
    /// Square cost matrix, row = origin, column = destination.
    pub distances: Vec<Vec<f64>>,
}

impl TspInstance {
    pub fn new(name: impl Into<String>, distances: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            distances,
        }
    }

    /// Number of cities (rows of the matrix).
    pub fn num_cities(&self) -> usize {
        self.distances.len()
    }
}
