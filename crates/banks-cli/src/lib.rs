//! CLI library components for the largest-banks ETL.

pub mod logging;
pub mod pipeline;
pub mod summary;
