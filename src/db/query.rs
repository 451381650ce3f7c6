//! Ad-hoc SQL execution with dynamically shaped results.
//!
//! Statements run verbatim, destructive ones included; this is a trusted
//! local tool and statement filtering would change its contract.

use rusqlite::types::Value;
use rusqlite::Connection;

use crate::error::Result;

/// Outcome of executing one SQL statement.
#[derive(Debug)]
pub enum QueryOutput {
    /// The statement has column metadata; the row set may still be empty.
    Rows(ResultSet),
    /// The statement returns no columns (DDL, INSERT, UPDATE, ...).
    Statement { rows_changed: usize },
}

/// A fully materialized result set.
#[derive(Debug)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Execute one SQL statement and materialize whatever it returns.
pub fn execute(conn: &Connection, sql: &str) -> Result<QueryOutput> {
    let mut stmt = conn.prepare(sql)?;
    if stmt.column_count() == 0 {
        let rows_changed = stmt.execute([])?;
        return Ok(QueryOutput::Statement { rows_changed });
    }

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut rows = Vec::new();
    let mut raw = stmt.query([])?;
    while let Some(row) = raw.next()? {
        let mut values = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            values.push(row.get::<_, Value>(i)?);
        }
        rows.push(values);
    }
    Ok(QueryOutput::Rows(ResultSet { columns, rows }))
}
