//! Error types for pagetab.

use std::io;
use thiserror::Error;

/// Result type alias for pagetab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while paginating or rendering a table.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown font-size class, orientation, or an invalid capacity table.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied value is out of range (wrap width, empty schema).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row carries a field that no column maps.
    #[error("Row {row} has unmapped field '{field}'")]
    UnmappedField { row: usize, field: String },

    /// A row lacks a field that a column expects.
    #[error("Row {row} is missing field '{column}'")]
    MissingField { row: usize, column: String },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON decoding or encoding failed.
    #[error("JSON error: {0}")]
    Json(String),

    /// The external document renderer failed.
    #[error("Renderer error: {0}")]
    Renderer(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
