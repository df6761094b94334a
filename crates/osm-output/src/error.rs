//! Error types for CSV table output.

use std::path::PathBuf;
use thiserror::Error;

use osm_model::Table;

/// Errors that can occur while writing output tables. All are fatal.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table file could not be created.
    #[error("failed to create {table} table at {path}: {source}")]
    Create {
        table: Table,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing a row failed.
    #[error("failed to write {table} row: {source}")]
    Csv {
        table: Table,
        #[source]
        source: csv::Error,
    },

    /// Buffered rows could not be flushed.
    #[error("failed to flush {table} table: {source}")]
    Flush {
        table: Table,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
