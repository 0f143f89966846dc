//! Exchange-rate file loading.
//!
//! The file is a CSV with a header row; the first column holds the currency
//! code and the second the USD multiplier. Header names are not checked.

use std::path::Path;

use banks_model::ExchangeRateTable;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Load the exchange-rate table at `path`.
pub fn load_exchange_rates(path: &Path) -> Result<ExchangeRateTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TransformError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TransformError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = parse_exchange_rates(&bytes, path)?;
    debug!(path = %path.display(), currencies = table.len(), "exchange rates loaded");
    Ok(table)
}

/// Parse exchange-rate CSV content. `path` is only used in errors.
pub fn parse_exchange_rates(bytes: &[u8], path: &Path) -> Result<ExchangeRateTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut table = ExchangeRateTable::new();
    for row in reader.records() {
        let row = row.map_err(|e| TransformError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let (Some(code), Some(value)) = (row.get(0), row.get(1)) else {
            return Err(TransformError::Csv {
                path: path.to_path_buf(),
                message: format!("expected currency and rate columns, found {}", row.len()),
            });
        };
        let code = code.trim_matches('\u{feff}');
        let rate = value
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .ok_or_else(|| TransformError::InvalidRate {
                path: path.to_path_buf(),
                code: code.to_string(),
                value: value.to_string(),
            })?;
        table.insert(code, rate);
    }
    Ok(table)
}
