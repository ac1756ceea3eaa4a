//! # pharmasim - Stream Decay Simulation for Pharmaceuticals
//!
//! `pharmasim` estimates the concentration of a pharmaceutical substance at
//! a downstream observation point (the *outlet*) from measurements taken
//! upstream (the *inlet*), applying first-order exponential decay over the
//! travel time between the two points:
//!
//! ```text
//! C_outlet = C_inlet * exp(-(k * t)),    t = distance / velocity
//! ```
//!
//! where `C_inlet` is the measured concentration, `k` the decay rate
//! coefficient (1/s), and `t` the travel time (s) derived from the measured
//! stream velocity and a fixed travel distance.
//!
//! ## Input
//!
//! A semicolon-delimited text table with a header row and, per sample, at
//! least: a sample identifier, a measurement timestamp
//! (`YYYY-MM-DD HH:MM:SS`), the inlet concentration, and the average stream
//! velocity in m/s. Column names are not fixed — the caller binds each
//! semantic role to a column by name.
//!
//! ## Quick Start
//!
//! ```rust
//! use pharmasim::mapping::FieldBinding;
//! use pharmasim::model::SimulationParameters;
//! use pharmasim::pipeline::{run, RunRequest};
//! use pharmasim::table::Table;
//!
//! let csv = "ID;DATE_TIME;C_INLET;VELOCITY\n\
//!            S1;2020-01-01 00:00:00;10.0;2.0\n";
//! let table = Table::from_reader(std::io::Cursor::new(csv))?;
//!
//! let request = RunRequest {
//!     table,
//!     binding: FieldBinding::new("ID", "DATE_TIME", "C_INLET", "VELOCITY"),
//!     parameters: SimulationParameters {
//!         distance: 100.0,
//!         decay_rate: 0.01,
//!     },
//! };
//!
//! let output = run(&request)?;
//! assert_eq!(output.inlet.len(), output.outlet.len());
//! assert_eq!(output.outlet.points[0].label, "S1_out");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`table`]: semicolon-CSV loading into an in-memory header + records
//! - [`mapping`]: role-to-column binding, validation, and pure projection
//! - [`model`]: centralized parsing, travel time, and the decay law
//! - [`series`]: time-aligned inlet/outlet series and overlay assembly
//! - [`pipeline`]: one-shot run orchestration and the top-level error
//!
//! Rendering of the two series is a presenter concern and stays outside
//! this crate; the CLI binary emits them as JSON or a plain text table.
//!
//! ## Error Policy
//!
//! Incomplete field bindings, the first malformed cell, and zero stream
//! velocity are all fatal to a run — no partial series. Extreme decay
//! exponents are not errors; they follow IEEE semantics through to the
//! output.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod mapping;
pub mod model;
pub mod pipeline;
pub mod series;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::mapping::{FieldBinding, FieldRole, MappingError, RawColumns};
    pub use crate::model::{
        ModelError, Sample, SimulatedSample, SimulationParameters, TIMESTAMP_FORMAT,
    };
    pub use crate::pipeline::{run, run_csv_file, RunRequest, SimulationError, SimulationOutput};
    pub use crate::series::{Overlay, OverlayPair, Series, SeriesError, SeriesPoint};
    pub use crate::table::{Record, Table, TableError};
}
