//! Error types for the sinks and the query runner.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting or querying the dataset.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File-system I/O failure on an output file.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failure.
    #[error("csv error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Underlying `SQLite` failure.
    #[error("sqlite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A read query failed to prepare or run.
    #[error("query failed ({sql}): {source}")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Table name is not a plain SQL identifier.
    #[error("invalid table name: '{0}'")]
    InvalidTableName(String),
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn query(sql: &str, source: rusqlite::Error) -> Self {
        Self::Query {
            sql: sql.to_string(),
            source,
        }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, OutputError>;
