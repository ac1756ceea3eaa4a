//! # Field Mapping Module
//!
//! The input table's column names are not known in advance; the caller
//! designates which column carries each of the four semantic roles the
//! simulation needs (sample ID, measurement time, inlet concentration,
//! stream velocity).
//!
//! [`FieldBinding`] holds those selections, [`FieldBinding::resolve`]
//! validates them against a concrete [`Table`] header — reporting *all*
//! unbound roles in one error — and [`project`] extracts four parallel,
//! index-aligned raw-text columns. Projection is pure: no numeric or
//! temporal parsing happens here.

use std::fmt;

use serde::Deserialize;

use crate::table::Table;

mod error;

#[cfg(test)]
mod tests;

pub use error::MappingError;

/// The four semantic roles a binding must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Sample identifier (arbitrary text)
    SampleId,
    /// Date and time of measurement, `YYYY-MM-DD HH:MM:SS`
    MeasuredAt,
    /// Pharmaceutical concentration measured at the inlet
    InletConcentration,
    /// Average stream velocity at the inlet, m/s
    Velocity,
}

impl FieldRole {
    /// All roles, in the order they are reported to the operator
    pub const ALL: [FieldRole; 4] = [
        FieldRole::SampleId,
        FieldRole::MeasuredAt,
        FieldRole::InletConcentration,
        FieldRole::Velocity,
    ];
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldRole::SampleId => "Sample ID",
            FieldRole::MeasuredAt => "Measurement time",
            FieldRole::InletConcentration => "Concentration measured at the inlet",
            FieldRole::Velocity => "Average velocity of the stream at the inlet",
        };
        f.write_str(name)
    }
}

/// The caller's selection of one field name per role.
///
/// `None` is the "no selection" sentinel; two roles may legitimately point
/// at the same column. Deserializable from the `[binding]` section of a
/// config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldBinding {
    /// Field carrying the sample identifier
    pub id: Option<String>,
    /// Field carrying the measurement timestamp
    pub time: Option<String>,
    /// Field carrying the inlet concentration
    pub concentration: Option<String>,
    /// Field carrying the stream velocity
    pub velocity: Option<String>,
}

impl FieldBinding {
    /// Create a binding with every role selected
    pub fn new(id: &str, time: &str, concentration: &str, velocity: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            time: Some(time.to_string()),
            concentration: Some(concentration.to_string()),
            velocity: Some(velocity.to_string()),
        }
    }

    /// The field currently selected for `role`, if any
    pub fn field_for(&self, role: FieldRole) -> Option<&str> {
        match role {
            FieldRole::SampleId => self.id.as_deref(),
            FieldRole::MeasuredAt => self.time.as_deref(),
            FieldRole::InletConcentration => self.concentration.as_deref(),
            FieldRole::Velocity => self.velocity.as_deref(),
        }
    }

    /// Validate this binding against a table header.
    ///
    /// Every unbound role is collected before returning, so one error can
    /// name all of them. A bound role whose field is missing from the
    /// header fails with [`MappingError::UnknownField`].
    pub fn resolve(&self, table: &Table) -> Result<ResolvedBinding, MappingError> {
        let unbound: Vec<FieldRole> = FieldRole::ALL
            .into_iter()
            .filter(|role| self.field_for(*role).is_none())
            .collect();
        if !unbound.is_empty() {
            return Err(MappingError::UnboundRoles(unbound));
        }

        let mut indices = [0usize; 4];
        let mut fields: [&str; 4] = [""; 4];
        for (slot, role) in FieldRole::ALL.into_iter().enumerate() {
            // Checked non-None above
            let field = self.field_for(role).unwrap_or_default();
            indices[slot] = table
                .column_index(field)
                .ok_or_else(|| MappingError::UnknownField {
                    role,
                    field: field.to_string(),
                })?;
            fields[slot] = field;
        }

        Ok(ResolvedBinding {
            indices,
            concentration_field: fields[2].to_string(),
        })
    }
}

/// A [`FieldBinding`] resolved to column indices of a concrete table.
#[derive(Debug, Clone)]
pub struct ResolvedBinding {
    /// Column index per role, in [`FieldRole::ALL`] order
    indices: [usize; 4],
    /// Display name of the inlet-concentration column, used for series titles
    concentration_field: String,
}

impl ResolvedBinding {
    /// Display name of the inlet-concentration column
    pub fn concentration_field(&self) -> &str {
        &self.concentration_field
    }
}

/// Four parallel raw-text columns, index-aligned to the input record order.
#[derive(Debug, Clone)]
pub struct RawColumns {
    /// Sample identifiers
    pub ids: Vec<String>,
    /// Raw measurement timestamps
    pub timestamps: Vec<String>,
    /// Raw inlet concentrations
    pub concentrations: Vec<String>,
    /// Raw stream velocities
    pub velocities: Vec<String>,
    /// Display name of the inlet-concentration column
    pub concentration_field: String,
}

impl RawColumns {
    /// Number of rows in every column
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the columns hold no rows
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Project the table onto the four bound columns.
///
/// Pure extraction in record order; the four output vectors always have
/// the same length as `table.records()`.
pub fn project(binding: &FieldBinding, table: &Table) -> Result<RawColumns, MappingError> {
    let resolved = binding.resolve(table)?;
    let [id_idx, time_idx, conc_idx, vel_idx] = resolved.indices;

    let mut columns = RawColumns {
        ids: Vec::with_capacity(table.len()),
        timestamps: Vec::with_capacity(table.len()),
        concentrations: Vec::with_capacity(table.len()),
        velocities: Vec::with_capacity(table.len()),
        concentration_field: resolved.concentration_field,
    };

    for record in table.records() {
        columns.ids.push(record.value(id_idx).to_string());
        columns.timestamps.push(record.value(time_idx).to_string());
        columns.concentrations.push(record.value(conc_idx).to_string());
        columns.velocities.push(record.value(vel_idx).to_string());
    }

    Ok(columns)
}
