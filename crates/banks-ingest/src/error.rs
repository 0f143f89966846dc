//! Error types for fetching and parsing the ranking page.

use thiserror::Error;

/// Errors that can occur while extracting bank rankings.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Network Errors ===
    /// Failed to build the HTTP client.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === HTML Errors ===
    /// CSS selector failed to compile.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Document has no table body.
    #[error("no table body found in document")]
    MissingTable,

    /// Row does not have the expected cells.
    #[error("row {row}: expected at least {expected} cells, found {found}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell text could not be interpreted as the field it holds.
    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Two rows claim the same rank.
    #[error("row {row}: duplicate rank {rank}")]
    DuplicateRank { row: usize, rank: u32 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
