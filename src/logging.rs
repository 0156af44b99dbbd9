//! Logger setup shared by the command-line tools.

use env_logger::Env;
use log::LevelFilter;

/// Initialize `env_logger` at `warn`, or at the level picked by the flags.
/// `RUST_LOG` still overrides the default filter.
pub fn init(verbose: bool, quiet: bool) {
    let default = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default.as_str()))
        .format_timestamp(None)
        .init();
}
