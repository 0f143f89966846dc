//! Extraction stage of the largest-banks ETL.
//!
//! Fetches the ranking page over HTTP and parses its first table into
//! [`RankedBank`] rows.
//!
//! # Example
//!
//! ```ignore
//! use banks_ingest::extract;
//!
//! let banks = extract("https://example.org/List_of_largest_banks")?;
//! println!("{} banks", banks.len());
//! ```

mod error;
mod fetch;
mod html;

use banks_model::RankedBank;
use tracing::info;

// === Error Types ===
pub use error::{IngestError, Result};

// === Stages ===
pub use fetch::fetch_document;
pub use html::parse_bank_table;

/// Fetch `url` and parse its ranking table.
///
/// The extracted fields are fixed by [`RankedBank`]
/// (see [`banks_model::EXTRACT_FIELDS`]).
pub fn extract(url: &str) -> Result<Vec<RankedBank>> {
    let body = fetch_document(url)?;
    let banks = parse_bank_table(&body)?;
    info!(url, rows = banks.len(), "extraction complete");
    Ok(banks)
}
