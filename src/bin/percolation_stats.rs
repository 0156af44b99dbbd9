/// percolation-stats - Monte Carlo estimate of the percolation threshold
///
/// Opens random sites of an n x n grid until it percolates, repeats for the
/// requested number of trials and reports mean, standard deviation and the
/// 95% confidence interval of the fraction of open sites.
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::percolation_stats::{PercolationStats, StatsConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "percolation-stats",
    about = "Estimate the percolation threshold of an n x n grid"
)]
struct Args {
    /// Grid size (the grid is n x n)
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Log every trial
    #[clap(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[clap(long, conflicts_with = "verbose")]
    quiet: bool,
}

impl From<&Args> for StatsConfig {
    fn from(args: &Args) -> Self {
        StatsConfig {
            n: args.n,
            trials: args.trials,
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    percolate::logging::init(args.verbose, args.quiet);
    let config = StatsConfig::from(&args);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stats = PercolationStats::run(config.n, config.trials, &mut rng).context(format!(
        "Failed to run {} trials on a {}x{} grid",
        config.trials, config.n, config.n
    ))?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
