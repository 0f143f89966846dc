//! CLI argument definitions for the largest-banks ETL.

use std::path::PathBuf;

use banks_cli::pipeline::{
    DEFAULT_CSV_PATH, DEFAULT_DB_PATH, DEFAULT_PROGRESS_LOG, DEFAULT_RATES_PATH,
    DEFAULT_TABLE_NAME, DEFAULT_URL, PipelineConfig,
};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "banks-etl",
    version,
    about = "Largest banks ETL - scrape, convert and load bank market caps",
    long_about = "Fetch the list of the largest banks by market capitalisation,\n\
                  convert market caps from USD into EUR, GBP and INR, save the\n\
                  result as CSV and as a SQLite table, then run sample queries."
)]
pub struct Cli {
    /// Page holding the ranking table.
    #[arg(long, value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Exchange-rate CSV (currency code, USD multiplier).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RATES_PATH)]
    pub rates: PathBuf,

    /// CSV output file (replaced on every run).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// SQLite database file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Table to (re)create in the database.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,

    /// Append-only progress log.
    #[arg(long = "progress-log", value_name = "PATH", default_value = DEFAULT_PROGRESS_LOG)]
    pub progress_log: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write diagnostic logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            url: self.url.clone(),
            rates_path: self.rates.clone(),
            csv_path: self.csv.clone(),
            db_path: self.db.clone(),
            table_name: self.table.clone(),
            progress_log: self.progress_log.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
