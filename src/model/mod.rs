//! # Simulation Model Module
//!
//! The numeric core of the pipeline. Parsing of the projected raw-text
//! columns happens here, in one place and with one policy: the first cell
//! that fails to parse aborts the whole run with the offending row and
//! field named.
//!
//! For every parsed [`Sample`] the model computes:
//!
//! - travel time `t = distance / velocity` (seconds), with an explicit
//!   guard against zero velocity rather than a silent infinity;
//! - arrival time `measured_at + t`, kept at full sub-second precision
//!   internally and truncated to whole seconds for display;
//! - outlet concentration `C_outlet = C_inlet * exp(-(k * t))`.
//!
//! Plain IEEE `f64` arithmetic throughout: extreme `k * t` products
//! underflow to `0` or overflow to infinity and are still valid, plottable
//! outputs. Negative velocities pass through arithmetically and produce an
//! arrival *before* the measurement time.

use chrono::{Duration, NaiveDateTime};
use log::debug;

use crate::mapping::RawColumns;

mod error;

#[cfg(test)]
mod tests;

pub use error::ModelError;

/// Timestamp format of the input table and of displayed arrival times
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two scalar run parameters, supplied once per run.
///
/// Neither value is sign-checked; a negative distance or decay rate is the
/// caller's own (physically odd) business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Travel distance from inlet to outlet, meters
    pub distance: f64,
    /// First-order decay rate coefficient k, 1/s
    pub decay_rate: f64,
}

/// One parsed inlet measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// 1-based data row this sample came from
    pub row: usize,
    /// Sample identifier
    pub id: String,
    /// Time of measurement at the inlet
    pub measured_at: NaiveDateTime,
    /// Concentration measured at the inlet
    pub inlet_concentration: f64,
    /// Average stream velocity at the inlet, m/s
    pub velocity: f64,
}

/// The simulated counterpart of a [`Sample`] at the outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSample {
    /// Sample identifier, shared with the inlet sample
    pub id: String,
    /// Travel time from inlet to outlet, seconds
    pub travel_time: f64,
    /// Estimated arrival time at the outlet (full sub-second precision)
    pub arrival_at: NaiveDateTime,
    /// Simulated concentration at the outlet
    pub outlet_concentration: f64,
}

/// Parse the projected raw columns into typed samples.
///
/// Centralized parse step: concentrations and velocities through
/// [`str::parse::<f64>`], timestamps through [`TIMESTAMP_FORMAT`]. The
/// first failure is fatal to the run.
pub fn parse_samples(columns: &RawColumns) -> Result<Vec<Sample>, ModelError> {
    let mut samples = Vec::with_capacity(columns.len());

    for i in 0..columns.len() {
        let row = i + 1;
        let measured_at =
            NaiveDateTime::parse_from_str(&columns.timestamps[i], TIMESTAMP_FORMAT).map_err(
                |_| ModelError::InvalidTimestamp {
                    row,
                    value: columns.timestamps[i].clone(),
                },
            )?;
        let inlet_concentration = parse_number(
            &columns.concentrations[i],
            row,
            &columns.concentration_field,
        )?;
        let velocity = parse_number(&columns.velocities[i], row, "stream velocity")?;

        samples.push(Sample {
            row,
            id: columns.ids[i].clone(),
            measured_at,
            inlet_concentration,
            velocity,
        });
    }

    debug!("Parsed {} samples", samples.len());
    Ok(samples)
}

fn parse_number(value: &str, row: usize, field: &str) -> Result<f64, ModelError> {
    value.parse::<f64>().map_err(|_| ModelError::InvalidNumber {
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Travel time in seconds for one sample: `distance / velocity`.
///
/// Velocity of exactly zero is an error rather than infinity. A negative
/// velocity yields a negative travel time, which downstream becomes an
/// arrival before the measurement time; that passthrough is deliberate.
pub fn travel_time(distance: f64, sample: &Sample) -> Result<f64, ModelError> {
    if sample.velocity == 0.0 {
        return Err(ModelError::ZeroVelocity {
            row: sample.row,
            id: sample.id.clone(),
        });
    }
    Ok(distance / sample.velocity)
}

/// First-order exponential decay law: `C0 * exp(-(k * t))`.
///
/// No clamping and no validation; IEEE semantics carry extreme arguments
/// through as `0` or infinity.
pub fn outlet_concentration(c0: f64, decay_rate: f64, travel_time_s: f64) -> f64 {
    c0 * (-(decay_rate * travel_time_s)).exp()
}

/// Simulate the outlet state of every sample, preserving input order.
pub fn simulate(
    samples: &[Sample],
    parameters: &SimulationParameters,
) -> Result<Vec<SimulatedSample>, ModelError> {
    samples
        .iter()
        .map(|sample| {
            let t = travel_time(parameters.distance, sample)?;
            let arrival_at = shift_timestamp(sample, t)?;
            Ok(SimulatedSample {
                id: sample.id.clone(),
                travel_time: t,
                arrival_at,
                outlet_concentration: outlet_concentration(
                    sample.inlet_concentration,
                    parameters.decay_rate,
                    t,
                ),
            })
        })
        .collect()
}

/// Shift a sample's measurement time by `travel_time_s` seconds.
///
/// Sub-second precision is preserved; formatting with [`TIMESTAMP_FORMAT`]
/// truncates it for display. A non-finite shift, or one that leaves
/// chrono's representable range, is fatal for that run.
fn shift_timestamp(sample: &Sample, travel_time_s: f64) -> Result<NaiveDateTime, ModelError> {
    let out_of_range = || ModelError::ArrivalOutOfRange {
        row: sample.row,
        id: sample.id.clone(),
    };

    let shift_ns = travel_time_s * 1e9;
    if !shift_ns.is_finite() || shift_ns.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }

    let shift = Duration::nanoseconds(shift_ns as i64);
    sample
        .measured_at
        .checked_add_signed(shift)
        .ok_or_else(out_of_range)
}
