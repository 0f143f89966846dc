//! Data model for the largest-banks ETL.
//!
//! - [`RankedBank`]: a row as extracted from the source document
//! - [`BankRecord`]: a row with market caps converted into every [`Currency`]
//! - [`Dataset`]: the ordered collection flowing into the sinks
//! - [`ExchangeRateTable`]: USD multipliers used by the transform stage

pub mod currency;
pub mod dataset;
pub mod record;

pub use currency::Currency;
pub use dataset::{Dataset, ExchangeRateTable};
pub use record::{BankRecord, EXTRACT_FIELDS, RECORD_FIELDS, RankedBank};
