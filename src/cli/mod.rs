//! Command-line interface for the `pharmasim` binary.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod fields;
mod simulate;

pub use config::Config;

/// pharmasim - Stream Decay Simulator for Pharmaceutical Concentrations
#[derive(Parser)]
#[command(name = "pharmasim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for simulation results.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// JSON document with inlet series, outlet series, and overlay
    #[default]
    Json,
    /// Plain text table of inlet/outlet pairs
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// List the column names of an input table
    Fields {
        /// Input semicolon-delimited CSV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Simulate outlet concentrations from an input table
    Simulate {
        /// Input semicolon-delimited CSV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Column carrying the sample identifier
        #[arg(long, value_name = "FIELD")]
        id_field: Option<String>,

        /// Column carrying the measurement timestamp (YYYY-MM-DD HH:MM:SS)
        #[arg(long, value_name = "FIELD")]
        time_field: Option<String>,

        /// Column carrying the concentration measured at the inlet
        #[arg(long, value_name = "FIELD")]
        concentration_field: Option<String>,

        /// Column carrying the average stream velocity (m/s)
        #[arg(long, value_name = "FIELD")]
        velocity_field: Option<String>,

        /// Travel distance from inlet to outlet, meters
        #[arg(short, long, value_name = "METERS")]
        distance: Option<f64>,

        /// First-order decay rate coefficient k, 1/s
        #[arg(short = 'k', long, value_name = "PER_SECOND")]
        decay_rate: Option<f64>,

        /// Load bindings and parameters from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write results to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json", value_enum)]
        format: FormatArg,
    },
}

impl Cli {
    /// Dispatch the parsed command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Fields { input } => fields::run(&input),
            Commands::Simulate {
                input,
                id_field,
                time_field,
                concentration_field,
                velocity_field,
                distance,
                decay_rate,
                config,
                output,
                format,
            } => simulate::run(simulate::Args {
                input,
                id_field,
                time_field,
                concentration_field,
                velocity_field,
                distance,
                decay_rate,
                config,
                output,
                format,
            }),
        }
    }
}
