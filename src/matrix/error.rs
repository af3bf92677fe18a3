//! Errors raised while loading and validating a distance matrix.

use thiserror::Error;

/// Failure to obtain a usable [`DistanceMatrix`](super::DistanceMatrix).
///
/// Every variant aborts before an optimization run starts; the colony
/// never sees a matrix that has not passed validation.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The source could not be read.
    #[error("failed to read distance matrix: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not an integer distance.
    #[error("line {line}: cannot parse `{token}` as an integer distance")]
    InputFormat {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The matrix is malformed.
    #[error("invalid distance matrix: {0}")]
    Validation(#[from] ValidationError),

    /// Fewer than two nodes; no tour exists.
    #[error("distance matrix needs at least 2 nodes, got {nodes}")]
    Size {
        /// Number of nodes found.
        nodes: usize,
    },
}

/// Structural defects detected by [`validate`](super::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A row's length differs from the number of rows.
    #[error("matrix is not square: {rows} rows but row {row} has {len} entries")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
    },

    /// A node has a non-zero distance to itself.
    #[error("diagonal entry ({index}, {index}) must be 0, got {value}")]
    NonZeroDiagonal {
        /// Node index.
        index: usize,
        /// The diagonal value found.
        value: f64,
    },

    /// A distance is negative.
    #[error("entry ({row}, {col}) is negative: {value}")]
    Negative {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The negative value.
        value: f64,
    },

    /// A distance is NaN or infinite.
    #[error("entry ({row}, {col}) is not finite")]
    NonFinite {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
}
