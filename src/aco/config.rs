//! ACO configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Ant System colony.
///
/// The colony always uses one ant per node; only the search parameters
/// are configurable.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.beta, 5.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iterations(250)
///     .with_evaporation(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoConfig {
    /// Number of colony iterations.
    pub iterations: usize,

    /// Pheromone exponent (α).
    pub alpha: f64,

    /// Heuristic (inverse distance) exponent (β).
    pub beta: f64,

    /// Evaporation rate (ρ) in [0, 1].
    ///
    /// Each iteration every pheromone entry is multiplied by `1 - ρ`.
    pub evaporation: f64,

    /// Deposit constant. An ant whose tour has length `L` adds `q / L`
    /// to every edge of its tour.
    pub q: f64,

    /// Initial pheromone on every edge (τ₀).
    pub tau0: f64,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each iteration; the run returns the best
    /// tour found by the completed iterations.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.5,
            q: 100.0,
            tau0: 1e-6,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pheromone exponent α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate ρ.
    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    /// Sets the deposit constant Q.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the initial pheromone τ₀.
    pub fn with_tau0(mut self, tau0: f64) -> Self {
        self.tau0 = tau0;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("q must be finite and positive, got {}", self.q));
        }
        if !self.tau0.is_finite() || self.tau0 < 0.0 {
            return Err(format!("tau0 must be finite and non-negative, got {}", self.tau0));
        }
        Ok(())
    }
}
