/// collinear - Find line segments through 4 or more collinear points
///
/// Reads a point set (count followed by `x y` pairs, optionally gzipped) and
/// prints every maximal segment as `(x1, y1) -> (x2, y2)`.
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use percolate::collinear::{find_segments, CollinearConfig, Method};
use percolate::point_io::{read_point_file, read_points};

#[derive(Parser, Debug)]
#[clap(name = "collinear", about = "Find line segments through 4+ collinear points")]
struct Args {
    /// Point file; reads stdin when omitted or "-"
    input: Option<String>,

    /// Search method: "fast" (sort by slope) or "brute" (all quadruples)
    #[clap(short = 'm', long = "method", default_value = "fast")]
    method: Method,

    /// Log each segment as it is found
    #[clap(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[clap(long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    percolate::logging::init(args.verbose, args.quiet);
    let config = CollinearConfig {
        method: args.method,
    };

    let points = match args.input.as_deref() {
        None | Some("-") => {
            read_points(io::stdin().lock()).context("Failed to read points from stdin")?
        }
        Some(path) => {
            read_point_file(path).context(format!("Failed to read points from {path}"))?
        }
    };

    let segments = find_segments(&points, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for segment in &segments {
        writeln!(out, "{segment}")?;
    }
    out.flush()?;

    Ok(())
}
