//! Colony iteration loop.
//!
//! [`AcoRunner`] drives the Ant System:
//! construct (one ant per node) → evaluate best → evaporate → deposit → repeat.
//!
//! All ants of an iteration read the same pheromone snapshot. Pheromone
//! is written only after every tour of the iteration is complete.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use u_numflow::random::create_rng;

use super::ant::{AntPathBuilder, AntTour};
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::transition::TransitionRule;
use super::types::Tour;
use crate::matrix::DistanceMatrix;

/// Result of a colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoResult {
    /// Shortest tour found. Empty if no iteration ran.
    pub best: Tour,

    /// Length of `best`. `f64::INFINITY` if no iteration ran.
    pub best_length: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// 1-based iteration in which `best` was found (0 if none).
    pub best_iteration: usize,

    /// Best-so-far length after each completed iteration.
    pub length_history: Vec<f64>,

    /// Transitions that used the uniform fallback over the whole run.
    ///
    /// A large count signals pheromone underflow or poor parameters.
    pub fallback_count: usize,

    /// Whether the run stopped early on cancellation or time limit.
    pub cancelled: bool,

    /// Pheromone state after the last update.
    pub pheromone: PheromoneMatrix,
}

/// Executes the ant colony loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner};
/// use u_antcolony::matrix::parse_matrix;
///
/// let distances = parse_matrix("0 1 2 3\n1 0 4 5\n2 4 0 6\n3 5 6 0").unwrap();
/// let config = AcoConfig::default().with_iterations(10).with_seed(42);
/// let result = AcoRunner::run(&distances, &config);
/// assert!(result.best.is_valid_for(4));
/// assert!(result.best_length <= 14.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> AcoResult {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next iteration and returns the best tour found so far.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = distances.len();
        let rule = TransitionRule::new(config.alpha, config.beta);
        let mut pheromone = PheromoneMatrix::new(n, config.tau0);

        let mut best = Tour::default();
        let mut best_length = f64::INFINITY;
        let mut best_iteration = 0;
        let mut length_history = Vec::with_capacity(config.iterations.min(4096));
        let mut fallback_count = 0;
        let mut cancelled = false;

        let start_time = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        for iteration in 1..=config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    tracing::info!(iteration, "colony run cancelled");
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = time_limit {
                if start_time.elapsed() >= limit {
                    tracing::info!(iteration, ?limit, "colony time limit reached");
                    cancelled = true;
                    break;
                }
            }

            // Construct: one independent RNG stream per ant.
            let seeds: Vec<u64> = (0..n).map(|_| rng.random()).collect();
            let ants = {
                let builder = AntPathBuilder::new(distances, &pheromone, rule);
                construct_ants(&builder, &seeds, config.parallel)
            };

            // Evaluate
            let iteration_best = find_best(&ants);
            if iteration_best.length < best_length {
                best = iteration_best.tour.clone();
                best_length = iteration_best.length;
                best_iteration = iteration;
            }
            let iteration_best_length = iteration_best.length;

            // Update
            pheromone.evaporate(config.evaporation);
            for ant in &ants {
                if ant.length > 0.0 {
                    pheromone.deposit(&ant.tour, config.q / ant.length);
                }
            }

            let iteration_fallbacks: usize = ants.iter().map(|a| a.fallbacks).sum();
            fallback_count += iteration_fallbacks;
            length_history.push(best_length);

            tracing::debug!(
                iteration,
                best_length,
                iteration_best_length,
                fallbacks = iteration_fallbacks,
                "colony iteration complete"
            );
        }

        AcoResult {
            best,
            best_length,
            iterations: length_history.len(),
            best_iteration,
            length_history,
            fallback_count,
            cancelled,
            pheromone,
        }
    }
}

/// Builds one tour per seed. Parallel and sequential construction give
/// identical tours because each ant owns its RNG.
fn construct_ants(builder: &AntPathBuilder<'_>, seeds: &[u64], parallel: bool) -> Vec<AntTour> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return seeds
                .par_iter()
                .map(|&seed| builder.build(&mut create_rng(seed)))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    seeds
        .iter()
        .map(|&seed| builder.build(&mut create_rng(seed)))
        .collect()
}

/// First ant with the minimum tour length.
fn find_best(ants: &[AntTour]) -> &AntTour {
    ants.iter()
        .min_by(|a, b| a.length.total_cmp(&b.length))
        .expect("a colony always has at least two ants")
}
