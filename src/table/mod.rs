//! # Input Table Module
//!
//! Loads a semicolon-delimited text table into memory: one ordered header
//! row naming the fields, then one [`Record`] per data row.
//!
//! The table is parsed exactly once and shared by every downstream stage;
//! field lookup goes through [`Table::column_index`] so projection never
//! re-scans the file. All cell values stay raw text here — numeric and
//! temporal parsing is the model layer's job.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

mod error;

#[cfg(test)]
mod tests;

pub use error::TableError;

/// One data row of the input table.
///
/// Values are index-aligned with the owning [`Table`]'s header. A row
/// shorter than the header reads as empty strings for the missing cells.
#[derive(Debug, Clone)]
pub struct Record {
    /// 1-based data row number (header excluded), for operator-facing errors
    row: usize,
    /// Raw cell values in header order
    values: Vec<String>,
}

impl Record {
    /// 1-based data row number of this record (the header row is not counted)
    pub fn row(&self) -> usize {
        self.row
    }

    /// Raw text value of the column at `index`, or `""` for a short row
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }
}

/// An in-memory input table: ordered field names plus data records.
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Load a semicolon-delimited table from a file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a semicolon-delimited table from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let header: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if header.is_empty() || header.iter().all(|h| h.is_empty()) {
            return Err(TableError::MissingHeader);
        }

        let mut records = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            records.push(Record {
                row: i + 1,
                values: record.iter().map(|v| v.trim().to_string()).collect(),
            });
        }

        Ok(Self { header, records })
    }

    /// Ordered field names from the header row
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Index of the named column in the header, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// All data records, in input order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
