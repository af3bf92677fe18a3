//! Tour representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed tour: node indices of length `n + 1` where the first `n`
/// entries are a permutation of `0..n` and the last repeats the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps a node sequence. The sequence is not checked; use
    /// [`is_valid_for`](Self::is_valid_for) when it comes from outside.
    pub fn new(path: Vec<usize>) -> Self {
        Self(path)
    }

    /// The node sequence including the closing return to the start.
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    /// Starting (and ending) node, if the tour is non-empty.
    pub fn start(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Iterates over the edges `(from, to)`, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of edges in the tour (equals the node count when closed).
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether this tour visits each of `n` nodes exactly once and
    /// returns to its start.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.0.len() != n + 1 || self.0.first() != self.0.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.0[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Consumes the tour, returning the node sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}
