//! Command-line front end: load a distance matrix, run the colony, log
//! progress and the best tour, optionally write a DOT rendering.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_antcolony::aco::{AcoConfig, AcoRunner};
use u_antcolony::matrix::load_matrix;
use u_antcolony::render::to_dot;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Distance matrix file (whitespace-separated integer rows).
    #[arg(default_value = "lau15_dist.txt")]
    matrix: PathBuf,

    /// Number of colony iterations.
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Pheromone exponent.
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Heuristic (inverse distance) exponent.
    #[arg(long, default_value_t = 5.0)]
    beta: f64,

    /// Evaporation rate in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    evaporation: f64,

    /// Pheromone deposit constant.
    #[arg(short = 'q', long = "q", default_value_t = 100.0)]
    q: f64,

    /// Initial pheromone on every edge.
    #[arg(long, default_value_t = 1e-6)]
    tau0: f64,

    /// Random seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many milliseconds, keeping the best tour so far.
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Construct ant tours in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Write the best tour as a Graphviz DOT file.
    #[arg(long)]
    dot: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> AcoConfig {
        let mut config = AcoConfig::default()
            .with_iterations(self.iterations)
            .with_alpha(self.alpha)
            .with_beta(self.beta)
            .with_evaporation(self.evaporation)
            .with_q(self.q)
            .with_tau0(self.tau0)
            .with_parallel(self.parallel);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit_ms(ms);
        }
        config
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.config();
    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {e}"))?;

    let distances = load_matrix(&args.matrix)
        .with_context(|| format!("loading {}", args.matrix.display()))?;
    info!(nodes = distances.len(), "loaded distance matrix");

    let result = AcoRunner::run(&distances, &config);

    for (k, length) in result.length_history.iter().enumerate() {
        info!("Iteration {}: best length = {}", k + 1, length);
    }
    if result.cancelled {
        warn!(
            completed = result.iterations,
            requested = config.iterations,
            "run stopped early"
        );
    }
    if result.fallback_count > 0 {
        warn!(
            fallbacks = result.fallback_count,
            "uniform fallback used; pheromone may be underflowing"
        );
    }

    info!("Best tour: {:?}", result.best.nodes());
    info!("Best length: {}", result.best_length);

    if let Some(path) = &args.dot {
        fs::write(path, to_dot(&distances, &result.best))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote tour graph");
    }

    Ok(())
}
