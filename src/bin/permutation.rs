/// permutation - Print k tokens sampled uniformly from stdin
///
/// Tokens are whitespace-delimited. Only k tokens are held in memory at any
/// time, so the input may be arbitrarily long.
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::permutation::{sample_tokens, PermutationConfig};

#[derive(Parser, Debug)]
#[clap(name = "permutation", about = "Print k tokens sampled uniformly from stdin")]
struct Args {
    /// Number of tokens to print
    k: usize,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    #[clap(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[clap(long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    percolate::logging::init(args.verbose, args.quiet);
    let config = PermutationConfig {
        k: args.k,
        seed: args.seed,
    };

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sample = sample_tokens(io::stdin().lock(), config.k, rng)
        .context(format!("Failed to sample {} tokens", config.k))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in &sample {
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    Ok(())
}
