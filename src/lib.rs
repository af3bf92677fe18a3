//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! - **matrix**: loads and validates a distance matrix from text
//!   (whitespace-separated integer rows, `#` comments).
//! - **aco**: the Ant System colony. Pheromone matrix, transition rule,
//!   per-ant tour construction, and the iteration loop that retains the
//!   best tour.
//! - **render**: Graphviz DOT output of a tour.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, AcoRunner};
//! use u_antcolony::matrix::parse_matrix;
//!
//! let distances = parse_matrix(
//!     "0 2 9 10\n\
//!      2 0 6 4\n\
//!      9 6 0 8\n\
//!      10 4 8 0",
//! )
//! .unwrap();
//!
//! let config = AcoConfig::default().with_iterations(20).with_seed(1);
//! let result = AcoRunner::run(&distances, &config);
//! assert_eq!(result.best_length, 23.0);
//! ```
//!
//! # Architecture
//!
//! The optimizer never performs I/O. Progress (best length per
//! iteration) and the final tour are returned in
//! [`AcoResult`](aco::AcoResult) for callers to log or render; the
//! core only emits `tracing` diagnostics.

pub mod aco;
pub mod matrix;
pub mod render;
