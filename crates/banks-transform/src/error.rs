//! Error types for the transform stage.

use std::path::PathBuf;

use banks_model::Currency;
use thiserror::Error;

/// Errors that can occur while loading rates or converting market caps.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Exchange-rate file not found.
    #[error("exchange rate file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the exchange-rate file.
    #[error("failed to read exchange rate file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Exchange-rate file is not valid CSV.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// A rate row has an unusable multiplier.
    #[error("invalid rate '{value}' for {code} in {path}")]
    InvalidRate {
        path: PathBuf,
        code: String,
        value: String,
    },

    /// A currency the transform needs is absent from the table.
    #[error("no exchange rate for {currency}")]
    MissingRate { currency: Currency },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
