//! Ant Colony Optimization (Ant System) for the symmetric TSP.
//!
//! Each iteration, one ant per node builds a closed tour by repeatedly
//! sampling the next node with probability proportional to
//! `pheromone^α · (1/distance)^β`. Pheromone then evaporates by a factor
//! `1 - ρ` and every ant deposits `Q / length` on the edges it used.
//! The shortest tour seen across all iterations is retained.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod ant;
mod config;
mod pheromone;
mod runner;
mod transition;
mod types;

pub use ant::{AntPathBuilder, AntTour};
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
pub use transition::{Choice, TransitionRule, MIN_DISTANCE};
pub use types::Tour;
