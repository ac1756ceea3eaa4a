//! # Simulation Pipeline
//!
//! One synchronous run over one complete table: project the bound columns,
//! parse them into samples, simulate the outlet state, assemble the series.
//!
//! The whole run is driven by an immutable [`RunRequest`] value instead of
//! mutable shared state, so there is no order-of-configuration dependency:
//! the binding and parameters are fixed before the first record is touched.
//! Any stage failure aborts the run; no partial series are ever emitted.

use log::{debug, info};
use serde::Serialize;

use crate::mapping::{self, FieldBinding, MappingError};
use crate::model::{self, ModelError, SimulationParameters};
use crate::series::{self, Overlay, Series, SeriesError};
use crate::table::{Table, TableError};

/// Errors from any stage of a simulation run
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// Input table could not be loaded
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Field binding was incomplete or stale
    #[error("Configuration error: {0}")]
    Mapping(#[from] MappingError),

    /// A sample failed to parse or to simulate
    #[error("Sample error: {0}")]
    Model(#[from] ModelError),

    /// Series assembly failed
    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

/// Everything one run needs, fixed before it starts.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// The parsed input table
    pub table: Table,
    /// The caller's field selections
    pub binding: FieldBinding,
    /// Travel distance and decay rate
    pub parameters: SimulationParameters,
}

/// The two time-aligned series and their combined overlay.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    /// Concentration measured at the inlet, in record order
    pub inlet: Series,
    /// Concentration simulated at the outlet, in record order
    pub outlet: Series,
    /// Inlet/outlet pairs by shared sample id
    pub overlay: Overlay,
}

/// Execute one simulation run.
pub fn run(request: &RunRequest) -> Result<SimulationOutput, SimulationError> {
    let columns = mapping::project(&request.binding, &request.table)?;
    debug!(
        "Projected {} records onto '{}' and companions",
        columns.len(),
        columns.concentration_field
    );

    let samples = model::parse_samples(&columns)?;
    let simulated = model::simulate(&samples, &request.parameters)?;

    let (inlet, outlet, overlay) =
        series::assemble(&columns.concentration_field, &samples, &simulated)?;

    info!(
        "Simulated {} samples over {} m at k = {} 1/s",
        inlet.len(),
        request.parameters.distance,
        request.parameters.decay_rate
    );

    Ok(SimulationOutput {
        inlet,
        outlet,
        overlay,
    })
}

/// Convenience wrapper: load a semicolon-delimited CSV file and run.
pub fn run_csv_file<P: AsRef<std::path::Path>>(
    path: P,
    binding: FieldBinding,
    parameters: SimulationParameters,
) -> Result<SimulationOutput, SimulationError> {
    let table = Table::from_csv_file(path)?;
    run(&RunRequest {
        table,
        binding,
        parameters,
    })
}
