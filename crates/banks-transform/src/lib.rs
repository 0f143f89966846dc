//! Transform stage of the largest-banks ETL.
//!
//! Loads the USD exchange-rate table and converts each bank's market cap
//! into EUR, GBP and INR, rounded to two decimal places.

mod convert;
mod error;
mod rates;

use std::path::Path;

use banks_model::{Dataset, RankedBank};
use tracing::info;

pub use convert::{convert_amount, round2, transform};
pub use error::{Result, TransformError};
pub use rates::{load_exchange_rates, parse_exchange_rates};

/// Load the rates at `rates_path` and transform `banks` with them.
pub fn transform_file(banks: Vec<RankedBank>, rates_path: &Path) -> Result<Dataset> {
    let rates = load_exchange_rates(rates_path)?;
    let dataset = transform(banks, &rates)?;
    info!(
        rates_path = %rates_path.display(),
        rows = dataset.len(),
        "transformation complete"
    );
    Ok(dataset)
}
