//! Probabilistic next-node selection.
//!
//! For each unvisited node `j` reachable from `i`:
//!
//! ```text
//! w(j) = τ(i, j)^α · (1 / max(d(i, j), ε))^β
//! ```
//!
//! The next node is drawn with probability `w(j) / Σw` by a single
//! cumulative-sum scan against one uniform draw in [0, 1). When `Σw`
//! is zero the draw is uniform over the unvisited nodes instead.
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//! Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::Rng;

use super::pheromone::PheromoneMatrix;
use crate::matrix::DistanceMatrix;

/// Lower bound on distances in the heuristic term.
pub const MIN_DISTANCE: f64 = 1e-10;

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Selected node.
    pub node: usize,
    /// Whether the uniform fallback was used.
    pub fallback: bool,
}

/// The Ant System transition rule, parameterized by α and β.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    alpha: f64,
    beta: f64,
}

impl TransitionRule {
    /// Creates a rule with pheromone exponent `alpha` and heuristic
    /// exponent `beta`.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Unnormalized attractiveness of moving from `from` to `to`.
    #[inline]
    pub fn weight(
        &self,
        from: usize,
        to: usize,
        pheromone: &PheromoneMatrix,
        distances: &DistanceMatrix,
    ) -> f64 {
        let tau = pheromone.get(from, to).powf(self.alpha);
        let eta = (1.0 / distances.get(from, to).max(MIN_DISTANCE)).powf(self.beta);
        tau * eta
    }

    /// Selects the next node among `unvisited`.
    ///
    /// Returns `None` only when `unvisited` is empty. `weights` is a
    /// scratch buffer reused across calls.
    pub fn choose<R: Rng>(
        &self,
        current: usize,
        unvisited: &[usize],
        pheromone: &PheromoneMatrix,
        distances: &DistanceMatrix,
        weights: &mut Vec<f64>,
        rng: &mut R,
    ) -> Option<Choice> {
        if unvisited.is_empty() {
            return None;
        }

        weights.clear();
        weights.extend(
            unvisited
                .iter()
                .map(|&j| self.weight(current, j, pheromone, distances)),
        );
        let total: f64 = weights.iter().sum();

        // Underflow (or overflow to inf/NaN) leaves no usable distribution.
        if total == 0.0 || !total.is_finite() {
            let node = unvisited[rng.random_range(0..unvisited.len())];
            tracing::trace!(current, node, total, "zero transition weight, uniform fallback");
            return Some(Choice {
                node,
                fallback: true,
            });
        }

        let r: f64 = rng.random();
        let mut cumulative = 0.0;
        for (&node, &w) in unvisited.iter().zip(weights.iter()) {
            cumulative += w / total;
            if r < cumulative {
                return Some(Choice {
                    node,
                    fallback: false,
                });
            }
        }

        // Rounding can leave the cumulative sum just below 1.
        Some(Choice {
            node: unvisited[unvisited.len() - 1],
            fallback: false,
        })
    }
}
