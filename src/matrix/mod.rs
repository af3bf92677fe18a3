//! Distance matrix input.
//!
//! Parses whitespace-separated integer rows, validates the structure,
//! and produces an immutable [`DistanceMatrix`] for the colony.

mod error;
mod loader;
mod types;

pub use error::{MatrixError, ValidationError};
pub use loader::{load_matrix, parse_matrix, validate};
pub use types::DistanceMatrix;
