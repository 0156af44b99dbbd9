//! Monte Carlo estimate of the percolation threshold.

use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::percolation::{arena_len, Percolation};

/// z-score for a 95% confidence interval
const CONFIDENCE_95: f64 = 1.96;

/// Parameters of a threshold experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub n: usize,
    pub trials: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Run `trials` independent experiments on an n×n grid
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if trials == 0 {
            return Err(Error::InvalidArgument(
                "trial count must be a positive integer".to_string(),
            ));
        }
        arena_len(n)?;

        let total_sites = (n * n) as f64;
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let opened = run_trial(n, rng)?;
            let threshold = opened as f64 / total_sites;
            debug!("trial {trial}: {opened} open sites, threshold {threshold:.6}");
            thresholds.push(threshold);
        }

        let mean = mean(&thresholds);
        let stddev = stddev(&thresholds, mean);
        info!("{trials} trials on {n}x{n} grid: mean {mean:.6}, stddev {stddev:.6}");

        Ok(PercolationStats {
            thresholds,
            mean,
            stddev,
        })
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation; NaN for a single trial
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width()
    }

    /// Per-trial thresholds in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev / (self.thresholds.len() as f64).sqrt()
    }
}

/// Open random sites until the grid percolates, returning the open count
fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<usize> {
    let mut perc = Percolation::new(n)?;
    while !perc.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        perc.open(row, col)?;
    }
    Ok(perc.number_of_open_sites())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn stddev(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}
