//! Inspection tool: mode dispatch and the flag-driven operations.
//!
//! Everything here is read-only except the ad-hoc query path, which runs
//! whatever it is given; see the crate docs for that contract. Query and
//! unknown-table failures are reported conditions, not process failures.

use rusqlite::Connection;

use crate::cli::{interactive, output, InspectArgs};
use crate::db::{self, catalog, query};
use crate::error::{Error, Result};
use crate::render;

pub fn execute(args: InspectArgs) -> Result<()> {
    db::ensure_exists(&args.db)?;
    let conn = db::open(&args.db)?;

    let has_operation = args.list_tables || args.table.is_some() || args.query.is_some();
    if !has_operation {
        return interactive::run(&conn);
    }

    if args.list_tables {
        list_tables(&conn)?;
    }
    if let Some(table) = &args.table {
        view_table(&conn, table, args.limit)?;
    }
    if let Some(sql) = &args.query {
        run_query(&conn, sql)?;
    }
    Ok(())
}

/// Print a numbered list of tables, in catalog order.
pub(crate) fn list_tables(conn: &Connection) -> Result<()> {
    let tables = catalog::table_names(conn)?;
    output::section("Tables");
    if tables.is_empty() {
        output::note("(no tables)");
        return Ok(());
    }
    for (i, table) in tables.iter().enumerate() {
        output::note(&format!("{}. {table}", i + 1));
    }
    Ok(())
}

/// Display up to `limit` rows of `table` with its introspected columns.
///
/// An unknown table prints the error and the list of valid names, then
/// returns normally.
pub(crate) fn view_table(conn: &Connection, table: &str, limit: usize) -> Result<()> {
    let tables = catalog::table_names(conn)?;
    if !tables.iter().any(|t| t == table) {
        output::error(&format!("table '{table}' does not exist"));
        output::note(&format!("Available tables: {}", tables.join(", ")));
        return Ok(());
    }

    // Headers come from the catalog and drive the projection, so the grid
    // can never drift from the introspected column order.
    let columns = catalog::table_columns(conn, table)?;
    let projection = columns
        .iter()
        .map(|c| catalog::quote_ident(&c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT {projection} FROM {} LIMIT {limit}",
        catalog::quote_ident(table)
    );

    if let query::QueryOutput::Rows(set) = query::execute(conn, &sql)? {
        let total = catalog::row_count(conn, table)?;
        output::section(&format!("Table '{table}'"));
        output::note(&render::grid(&set.columns, &set.rows));
        output::note(&format!("total {total}, showing {}", set.rows.len()));
    }
    Ok(())
}

/// Execute user-supplied SQL, rendering any result set. SQL errors are
/// caught and printed; the connection stays usable.
pub(crate) fn run_query(conn: &Connection, sql: &str) -> Result<()> {
    match query::execute(conn, sql) {
        Ok(query::QueryOutput::Rows(set)) => {
            output::section("Query result");
            output::note(&render::grid(&set.columns, &set.rows));
            output::note(&format!("{} row(s) returned", set.rows.len()));
        }
        Ok(query::QueryOutput::Statement { rows_changed }) => {
            output::ok(&format!(
                "statement executed ({rows_changed} row(s) affected)"
            ));
        }
        Err(Error::Database(e)) => {
            output::error(&format!("query failed: {e}"));
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
