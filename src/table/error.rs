/// Errors that can occur while loading an input table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error reading the input file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error (malformed row, bad quoting)
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row to name its fields
    #[error("Input table has no header row")]
    MissingHeader,
}
