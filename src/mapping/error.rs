use super::FieldRole;

/// Errors raised while resolving a [`super::FieldBinding`] against a table
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// One or more required roles have no field selected.
    ///
    /// Collected in a single pass so the caller can report every missing
    /// role at once instead of one per attempt.
    #[error("No field selected for: {}", format_roles(.0))]
    UnboundRoles(Vec<FieldRole>),

    /// A role is bound to a field name the table's header does not contain
    #[error("Field '{field}' selected for {role} is not a column of the input table")]
    UnknownField {
        /// The role whose binding is stale
        role: FieldRole,
        /// The field name that was not found in the header
        field: String,
    },
}

fn format_roles(roles: &[FieldRole]) -> String {
    roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
