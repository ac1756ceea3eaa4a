//! # Series Assembly Module
//!
//! Zips the parsed inlet samples and their simulated outlet counterparts
//! into two labeled [`Series`] ready for a presenter, plus an [`Overlay`]
//! pairing each inlet point with its outlet point by shared sample id.
//!
//! Points stay in original record order — never re-sorted by time — so
//! index `i` of both series is the before/after pair for the same physical
//! sample even when the shifted arrival times are not globally sorted.
//! Outlet labels carry a `_out` suffix for annotation.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::model::{Sample, SimulatedSample, TIMESTAMP_FORMAT};


/// Suffix appended to outlet point labels
pub const OUTLET_LABEL_SUFFIX: &str = "_out";

/// Errors that can occur during series assembly
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// The inlet and outlet sides do not cover the same samples
    #[error("Sample length mismatch: {inlet_len} inlet samples, {outlet_len} simulated samples")]
    LengthMismatch {
        /// Number of parsed inlet samples
        inlet_len: usize,
        /// Number of simulated outlet samples
        outlet_len: usize,
    },
}

/// One labeled point of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Timestamp of the point, displayed at whole-second resolution
    #[serde(serialize_with = "serialize_display_time")]
    pub at: NaiveDateTime,
    /// Concentration value
    pub value: f64,
    /// Annotation label (sample id, `_out`-suffixed on the outlet side)
    pub label: String,
}

/// An ordered, titled sequence of labeled points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Human-readable title derived from the concentration field name
    pub title: String,
    /// Points in original record order
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One inlet/outlet pair of the combined overlay view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayPair {
    /// Shared sample identifier
    pub id: String,
    /// The measured point at the inlet
    pub inlet: SeriesPoint,
    /// The simulated point at the outlet
    pub outlet: SeriesPoint,
}

/// The combined view pairing every inlet point with its outlet point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Pairs in original record order
    pub pairs: Vec<OverlayPair>,
}

/// Assemble the two series and their overlay.
///
/// `samples` and `simulated` must be index-aligned to the same record
/// order; `concentration_field` is the display name of the bound
/// inlet-concentration column and seeds both titles. Guarantees
/// `inlet.len() == outlet.len() == samples.len()`.
pub fn assemble(
    concentration_field: &str,
    samples: &[Sample],
    simulated: &[SimulatedSample],
) -> Result<(Series, Series, Overlay), SeriesError> {
    if samples.len() != simulated.len() {
        return Err(SeriesError::LengthMismatch {
            inlet_len: samples.len(),
            outlet_len: simulated.len(),
        });
    }

    let mut inlet = Series {
        title: format!("{concentration_field} measured at the inlet"),
        points: Vec::with_capacity(samples.len()),
    };
    let mut outlet = Series {
        title: format!("{concentration_field} simulated at the outlet"),
        points: Vec::with_capacity(samples.len()),
    };
    let mut pairs = Vec::with_capacity(samples.len());

    for (sample, sim) in samples.iter().zip(simulated) {
        let inlet_point = SeriesPoint {
            at: sample.measured_at,
            value: sample.inlet_concentration,
            label: sample.id.clone(),
        };
        let outlet_point = SeriesPoint {
            at: sim.arrival_at,
            value: sim.outlet_concentration,
            label: format!("{}{}", sim.id, OUTLET_LABEL_SUFFIX),
        };

        pairs.push(OverlayPair {
            id: sample.id.clone(),
            inlet: inlet_point.clone(),
            outlet: outlet_point.clone(),
        });
        inlet.points.push(inlet_point);
        outlet.points.push(outlet_point);
    }

    Ok((inlet, outlet, Overlay { pairs }))
}

/// Serialize a timestamp at whole-second display resolution
fn serialize_display_time<S: Serializer>(
    at: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&at.format(TIMESTAMP_FORMAT))
}
