//! Provisioning command: rebuild the sample database and print the
//! verification report.

use rusqlite::Connection;

use crate::cli::{output, InitArgs};
use crate::db::{catalog, provision, query};
use crate::error::Result;
use crate::render;

pub fn execute(args: InitArgs) -> Result<()> {
    output::note("Creating sample sales database...");
    let conn = provision::provision(&args.db)?;

    // Read everything back so the run is self-verifying.
    for table in catalog::table_names(&conn)? {
        dump(&conn, &format!("Table '{table}'"), &format!("SELECT * FROM {}", catalog::quote_ident(&table)))?;
    }

    dump(&conn, "Total sales by country", provision::SALES_BY_COUNTRY_SQL)?;
    dump(&conn, "Sales by product category", provision::SALES_BY_CATEGORY_SQL)?;

    println!();
    output::ok(&format!("sample database ready at {}", args.db.display()));
    output::note(&format!(
        "Browse it with {}",
        output::highlight(&format!("salesdb inspect --db {}", args.db.display()))
    ));
    Ok(())
}

fn dump(conn: &Connection, title: &str, sql: &str) -> Result<()> {
    if let query::QueryOutput::Rows(set) = query::execute(conn, sql)? {
        output::section(title);
        output::note(&render::grid(&set.columns, &set.rows));
    }
    Ok(())
}
