//! Load stage of the largest-banks ETL.
//!
//! - [`save_csv`] writes the dataset as a flat file with a header row
//! - [`save_table`] replaces a `SQLite` table with the dataset
//! - [`execute_query`] runs read queries against the loaded table
//!
//! Both sinks overwrite what a previous run left behind.

mod csv_file;
mod db;
mod error;
mod query;

pub use csv_file::{read_csv, save_csv};
pub use db::{open_database, save_table};
pub use error::{OutputError, Result};
pub use query::{QueryResult, SqlValue, execute_query};

pub use rusqlite::Connection;
