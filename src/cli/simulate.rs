//! The `simulate` subcommand: run the full pipeline over one input table
//! and emit the inlet/outlet series for a presenter.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use pharmasim::mapping::FieldBinding;
use pharmasim::model::{SimulationParameters, TIMESTAMP_FORMAT};
use pharmasim::pipeline::{run_csv_file, SimulationOutput};

use super::FormatArg;
use super::config::Config;

/// Parsed arguments of the `simulate` subcommand
pub struct Args {
    /// Input CSV file
    pub input: PathBuf,
    /// Sample-identifier column override
    pub id_field: Option<String>,
    /// Timestamp column override
    pub time_field: Option<String>,
    /// Inlet-concentration column override
    pub concentration_field: Option<String>,
    /// Velocity column override
    pub velocity_field: Option<String>,
    /// Travel distance override, meters
    pub distance: Option<f64>,
    /// Decay rate override, 1/s
    pub decay_rate: Option<f64>,
    /// Optional TOML config file
    pub config: Option<PathBuf>,
    /// Output file (stdout when omitted)
    pub output: Option<PathBuf>,
    /// Output format
    pub format: FormatArg,
}

/// Run the simulation pipeline
pub fn run(args: Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI flags win over config file values
    let binding = FieldBinding {
        id: args.id_field.or(config.binding.id),
        time: args.time_field.or(config.binding.time),
        concentration: args.concentration_field.or(config.binding.concentration),
        velocity: args.velocity_field.or(config.binding.velocity),
    };
    let distance = args
        .distance
        .or(config.parameters.distance)
        .context("No travel distance given (use --distance or a config file)")?;
    let decay_rate = args
        .decay_rate
        .or(config.parameters.decay_rate)
        .context("No decay rate given (use --decay-rate or a config file)")?;

    info!("Input:     {}", args.input.display());
    info!("Distance:  {} m", distance);
    info!("Decay k:   {} 1/s", decay_rate);

    let output = run_csv_file(
        &args.input,
        binding,
        SimulationParameters {
            distance,
            decay_rate,
        },
    )
    .context("Simulation failed")?;

    let rendered = match args.format {
        FormatArg::Json => render_json(&output)?,
        FormatArg::Table => render_table(&output),
    };

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(rendered.as_bytes())?;
            info!("Results written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_json(output: &SimulationOutput) -> Result<String> {
    serde_json::to_string_pretty(output).context("Failed to serialize results")
}

/// Plain text rendering of the overlay: one line per sample pairing the
/// measured inlet point with its simulated outlet point.
fn render_table(output: &SimulationOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", output.inlet.title));
    out.push_str(&format!("{}\n\n", output.outlet.title));
    out.push_str(&format!(
        "{:<20} {:<19} {:>14}   {:<19} {:>14}\n",
        "sample", "measured at", "C_inlet", "arrives at", "C_outlet"
    ));

    for pair in &output.overlay.pairs {
        out.push_str(&format!(
            "{:<20} {:<19} {:>14.6}   {:<19} {:>14.6}\n",
            pair.id,
            pair.inlet.at.format(TIMESTAMP_FORMAT),
            pair.inlet.value,
            pair.outlet.at.format(TIMESTAMP_FORMAT),
            pair.outlet.value,
        ));
    }

    out
}
