//! Read queries against the loaded table.

use std::fmt;

use rusqlite::Connection;
use rusqlite::types::Value;
use tracing::debug;

use crate::error::{OutputError, Result};

/// A single result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Integer(value) => Some(*value as f64),
            SqlValue::Real(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SqlValue::Null,
            Value::Integer(v) => SqlValue::Integer(v),
            Value::Real(v) => SqlValue::Real(v),
            Value::Text(v) => SqlValue::Text(v),
            Value::Blob(v) => SqlValue::Blob(v),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on whole numbers.
            SqlValue::Real(v) => write!(f, "{v:?}"),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

/// Fully materialised result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl QueryResult {
    /// Values of one column, by name.
    pub fn column(&self, name: &str) -> Option<Vec<&SqlValue>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Run `sql` and collect every row.
pub fn execute_query(conn: &Connection, sql: &str) -> Result<QueryResult> {
    let mut stmt = conn.prepare(sql).map_err(|e| OutputError::query(sql, e))?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let width = columns.len();

    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|index| row.get::<_, Value>(index).map(SqlValue::from))
                .collect::<rusqlite::Result<Vec<_>>>()
        })
        .map_err(|e| OutputError::query(sql, e))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| OutputError::query(sql, e))?;

    debug!(sql, rows = rows.len(), "query executed");
    Ok(QueryResult { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_values() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Integer(3).to_string(), "3");
        assert_eq!(SqlValue::Real(93.0).to_string(), "93.0");
        assert_eq!(SqlValue::Real(23.25).to_string(), "23.25");
        assert_eq!(SqlValue::Text("A Bank".into()).to_string(), "A Bank");
    }

    #[test]
    fn reads_scalar_expressions() {
        let conn = Connection::open_in_memory().unwrap();
        let result = execute_query(&conn, "SELECT 1 AS one, NULL AS missing, 'x' AS label").unwrap();
        assert_eq!(result.columns, vec!["one", "missing", "label"]);
        assert_eq!(
            result.rows,
            vec![vec![
                SqlValue::Integer(1),
                SqlValue::Null,
                SqlValue::Text("x".into())
            ]]
        );
    }

    #[test]
    fn malformed_sql_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = execute_query(&conn, "SELEC nothing").unwrap_err();
        assert!(matches!(err, OutputError::Query { .. }));
    }
}
