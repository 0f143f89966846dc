//! `SQLite` sink.
//!
//! The table is rebuilt on every load: any previous definition and contents
//! are dropped inside the same transaction that writes the new rows.

use std::path::Path;

use banks_model::{Currency, Dataset};
use rusqlite::{Connection, params};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Column definitions, in record field order.
const COLUMNS: [(&str, &str); 6] = [
    ("Rank", "INTEGER"),
    ("Name", "TEXT"),
    (Currency::Usd.column_name(), "REAL"),
    (Currency::Eur.column_name(), "REAL"),
    (Currency::Gbp.column_name(), "REAL"),
    (Currency::Inr.column_name(), "REAL"),
];

/// Open or create the database file at `path`.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    let conn = Connection::open(path)?;
    debug!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Replace `table` with the contents of `dataset`. Returns the row count.
pub fn save_table(dataset: &Dataset, conn: &mut Connection, table: &str) -> Result<usize> {
    validate_table_name(table)?;

    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS \"{table}\";\nCREATE TABLE \"{table}\" ({});",
        column_definitions()
    ))?;

    let mut inserted = 0;
    {
        let placeholders = vec!["?"; COLUMNS.len()].join(", ");
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{table}\" VALUES ({placeholders})"
        ))?;
        for record in dataset {
            inserted += stmt.execute(params![
                record.rank,
                record.name,
                record.mc_usd_billion,
                record.mc_eur_billion,
                record.mc_gbp_billion,
                record.mc_inr_billion,
            ])?;
        }
    }
    tx.commit()?;

    debug!(table, rows = inserted, "table replaced");
    Ok(inserted)
}

fn column_definitions() -> String {
    COLUMNS
        .iter()
        .map(|(name, ty)| format!("\"{name}\" {ty}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table names are interpolated into SQL, so only plain identifiers pass.
fn validate_table_name(table: &str) -> Result<()> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(OutputError::InvalidTableName(table.to_string()))
    }
}
