/// Errors raised while parsing sample values or computing travel times.
///
/// Every variant names the 1-based data row it came from; the first
/// failure aborts the whole run (no per-row recovery).
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A concentration or velocity cell is not numeric text
    #[error("Row {row}: '{value}' in field '{field}' is not a number")]
    InvalidNumber {
        /// 1-based data row
        row: usize,
        /// Display name of the offending field
        field: String,
        /// The raw text that failed to parse
        value: String,
    },

    /// A timestamp cell does not match `YYYY-MM-DD HH:MM:SS`
    #[error("Row {row}: '{value}' is not a timestamp of the form YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp {
        /// 1-based data row
        row: usize,
        /// The raw text that failed to parse
        value: String,
    },

    /// Stream velocity of exactly zero makes the travel time undefined
    #[error("Row {row}: sample '{id}' has zero stream velocity, travel time is undefined")]
    ZeroVelocity {
        /// 1-based data row
        row: usize,
        /// Sample identifier
        id: String,
    },

    /// The time shift pushed the arrival outside the representable range
    #[error("Row {row}: arrival time for sample '{id}' is out of range")]
    ArrivalOutOfRange {
        /// 1-based data row
        row: usize,
        /// Sample identifier
        id: String,
    },
}
