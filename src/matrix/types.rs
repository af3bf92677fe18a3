//! The validated distance matrix.

use super::error::MatrixError;
use super::loader::validate;

/// Immutable square matrix of pairwise node distances.
///
/// Only constructible through [`DistanceMatrix::new`] (or the loader),
/// so every instance has at least two nodes, a zero diagonal, and
/// finite non-negative entries. Symmetry is assumed but not checked.
///
/// # Examples
///
/// ```
/// use u_antcolony::matrix::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.tour_length(&[0, 1, 2, 0]), 17.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Validates `rows` and builds the matrix.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        validate(&rows)?;
        let n = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { n, data })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: a valid matrix has at least two nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from node `i` to node `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Sum of distances along consecutive pairs of `path`.
    ///
    /// For a closed tour (last node equal to the first) this is the
    /// full cycle length.
    pub fn tour_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
