//! # pharmasim CLI
//!
//! A command-line tool for simulating pharmaceutical concentrations at the
//! outlet of a stream from measurements taken at the inlet.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect the columns of an input table
//! pharmasim fields samples.csv
//!
//! # Run a simulation
//! pharmasim simulate samples.csv \
//!     --id-field ID --time-field DATE_TIME \
//!     --concentration-field C_INLET --velocity-field VELOCITY \
//!     --distance 100 --decay-rate 0.01
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    cli.run()
}
