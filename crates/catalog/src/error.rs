//! Error types for the catalog crate.
//!
//! Every variant here is fatal: the service refuses to start without a
//! catalog, so callers propagate these straight up to `main`.

use thiserror::Error;

/// Errors that can occur while reading the source table and building the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Source table could not be opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the table
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The delimited text itself is malformed (e.g. an unterminated quote)
    ///
    /// `line` is 1-based and refers to the physical line in the file
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// The table was readable but produced no bourbon records
    #[error("Catalog is empty: no bourbon rows found in {source_name}")]
    Empty { source_name: String },
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CatalogError::IoError(io),
            _ => CatalogError::ParseError { line, reason },
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
