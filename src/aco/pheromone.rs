//! Pheromone trail matrix.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Tour;

/// Symmetric matrix of learned edge desirability.
///
/// Owned by a single colony run. Entries start at τ₀, decay
/// multiplicatively on [`evaporate`](Self::evaporate), and grow on
/// [`deposit`](Self::deposit). No operation can make an entry negative.
/// There is no upper bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with every entry set to `tau0`.
    ///
    /// A negative `tau0` is clamped to 0.
    pub fn new(n: usize, tau0: f64) -> Self {
        Self {
            n,
            data: vec![tau0.max(0.0); n * n],
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Current pheromone on edge `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Multiplies every entry by `1 - rho`.
    ///
    /// The factor is clamped to [0, 1], so `rho` outside [0, 1] cannot
    /// produce negative entries or growth.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = (1.0 - rho).clamp(0.0, 1.0);
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Adds `amount` to both `(i, j)` and `(j, i)` for every edge of `tour`,
    /// the closing edge included.
    ///
    /// Negative or non-finite amounts are ignored.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        if !amount.is_finite() || amount < 0.0 {
            return;
        }
        for (i, j) in tour.edges() {
            self.data[i * self.n + j] += amount;
            if i != j {
                self.data[j * self.n + i] += amount;
            }
        }
    }
}
