//! The ETL run: extract, transform, load to CSV and `SQLite`, query.
//!
//! Stages run once, in order, and the first failure aborts the run. The
//! database connection lives inside [`run_pipeline`] and is released on every
//! return path.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use banks_ingest::extract;
use banks_output::{
    Connection, QueryResult, execute_query, open_database, save_csv, save_table,
};
use banks_transform::transform_file;
use tracing::{debug, info, info_span};

use crate::logging::ProgressLog;
use crate::summary::{print_banks, print_dataset, print_query_result};

/// Archived Wikipedia list of the largest banks by market capitalisation.
pub const DEFAULT_URL: &str = "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";
pub const DEFAULT_RATES_PATH: &str = "exchange_rate.csv";
pub const DEFAULT_CSV_PATH: &str = "data.csv";
pub const DEFAULT_DB_PATH: &str = "Banks.db";
pub const DEFAULT_TABLE_NAME: &str = "Largest_banks";
pub const DEFAULT_PROGRESS_LOG: &str = "code_log.txt";

/// Progress log messages, in the order the stages write them.
pub mod messages {
    pub const START: &str = "Preliminaries complete. Initiating ETL process";
    pub const EXTRACTED: &str = "Data extraction complete. Initiating Transformation process";
    pub const TRANSFORMED: &str = "Data transformation complete. Initiating Loading process";
    pub const CSV_SAVED: &str = "Data saved to CSV file";
    pub const DB_CONNECTED: &str = "SQL Connection initiated";
    pub const DB_LOADED: &str = "Data loaded to Database as a table, Executing queries";
    pub const COMPLETE: &str = "Process Complete";
}

/// Locations the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub url: String,
    pub rates_path: PathBuf,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
    pub progress_log: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            rates_path: PathBuf::from(DEFAULT_RATES_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            progress_log: PathBuf::from(DEFAULT_PROGRESS_LOG),
        }
    }
}

impl PipelineConfig {
    /// The three read queries run after loading.
    pub fn queries(&self) -> [String; 3] {
        let table = &self.table_name;
        [
            format!("SELECT * FROM {table}"),
            format!("SELECT AVG(MC_GBP_Billion) FROM {table}"),
            format!("SELECT Name FROM {table} LIMIT 5"),
        ]
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct PipelineSummary {
    pub rows: usize,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
    pub progress_log: PathBuf,
    pub queries: Vec<(String, QueryResult)>,
}

/// Run every stage once with `config`.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    let progress = ProgressLog::new(&config.progress_log);
    let log = |message: &str| {
        progress
            .log(message)
            .with_context(|| format!("write progress log {}", progress.path().display()))
    };

    log(messages::START)?;

    // =========================================================================
    // Stage 1: Extract
    // =========================================================================
    let start = Instant::now();
    let banks = info_span!("extract", url = %config.url)
        .in_scope(|| extract(&config.url))
        .with_context(|| format!("extract bank rankings from {}", config.url))?;
    info!(
        rows = banks.len(),
        duration_ms = start.elapsed().as_millis(),
        "extract complete"
    );
    print_banks(&banks);
    log(messages::EXTRACTED)?;

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let start = Instant::now();
    let dataset = info_span!("transform", rates = %config.rates_path.display())
        .in_scope(|| transform_file(banks, &config.rates_path))
        .context("convert market caps")?;
    info!(
        rows = dataset.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    print_dataset(&dataset);
    log(messages::TRANSFORMED)?;

    // =========================================================================
    // Stage 3: Load CSV
    // =========================================================================
    save_csv(&dataset, &config.csv_path)
        .with_context(|| format!("write {}", config.csv_path.display()))?;
    info!(path = %config.csv_path.display(), rows = dataset.len(), "csv saved");
    log(messages::CSV_SAVED)?;

    // =========================================================================
    // Stage 4: Load database
    // =========================================================================
    let mut conn = open_database(&config.db_path)
        .with_context(|| format!("open database {}", config.db_path.display()))?;
    log(messages::DB_CONNECTED)?;

    let start = Instant::now();
    let rows = save_table(&dataset, &mut conn, &config.table_name)
        .with_context(|| format!("load table {}", config.table_name))?;
    info!(
        table = %config.table_name,
        rows,
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    log(messages::DB_LOADED)?;

    // =========================================================================
    // Stage 5: Queries
    // =========================================================================
    let mut queries = Vec::new();
    for sql in config.queries() {
        let result = run_query(&sql, &conn)?;
        queries.push((sql, result));
    }

    conn.close()
        .map_err(|(_, e)| e)
        .with_context(|| format!("close database {}", config.db_path.display()))?;
    log(messages::COMPLETE)?;

    Ok(PipelineSummary {
        rows,
        csv_path: config.csv_path.clone(),
        db_path: config.db_path.clone(),
        table_name: config.table_name.clone(),
        progress_log: config.progress_log.clone(),
        queries,
    })
}

/// Execute `sql`, print its result set to stdout and hand it back.
pub fn run_query(sql: &str, conn: &Connection) -> Result<QueryResult> {
    debug!(sql, "running query");
    let result = execute_query(conn, sql).with_context(|| format!("run query: {sql}"))?;
    print_query_result(sql, &result);
    Ok(result)
}
