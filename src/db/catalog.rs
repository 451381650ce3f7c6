//! Catalog introspection.
//!
//! Table and column metadata always come from the engine's own catalog,
//! never from the creation DDL.

use rusqlite::Connection;

use crate::error::Result;

/// Column metadata as reported by `PRAGMA table_info`.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    pub ty: String,
    pub notnull: bool,
    pub pk: bool,
}

/// All table names, in whatever order the catalog returns them.
pub fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

/// Column metadata for `table`, in storage order.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let mut columns = Vec::new();
    conn.pragma(None, "table_info", table, |row| {
        columns.push(ColumnInfo {
            name: row.get(1)?,
            ty: row.get(2)?,
            notnull: row.get::<_, i64>(3)? != 0,
            pk: row.get::<_, i64>(5)? != 0,
        });
        Ok(())
    })?;
    Ok(columns)
}

/// Total number of rows in `table`.
pub fn row_count(conn: &Connection, table: &str) -> Result<i64> {
    let count = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Quote an identifier for interpolation into SQL text.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::provision::SCHEMA_DDL;

    fn sample_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_DDL).unwrap();
        conn
    }

    #[test]
    fn table_names_covers_the_schema() {
        let conn = sample_db();
        let names = table_names(&conn).unwrap();

        assert_eq!(names.len(), 3);
        for expected in ["customers", "products", "orders"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn table_columns_reports_storage_order() {
        let conn = sample_db();
        let columns = table_columns(&conn, "customers").unwrap();

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["customer_id", "customer_name", "country", "segment"]
        );
        assert!(columns[0].pk);
        assert!(!columns[1].pk);
    }

    #[test]
    fn table_columns_flags_not_null() {
        let conn = sample_db();
        let columns = table_columns(&conn, "products").unwrap();

        let product_name = columns.iter().find(|c| c.name == "product_name").unwrap();
        assert!(product_name.notnull);
        assert_eq!(product_name.ty, "TEXT");
    }

    #[test]
    fn row_count_counts() {
        let conn = sample_db();
        conn.execute(
            "INSERT INTO customers (customer_id, customer_name) VALUES (1, 'a'), (2, 'b')",
            [],
        )
        .unwrap();

        assert_eq!(row_count(&conn, "customers").unwrap(), 2);
        assert_eq!(row_count(&conn, "orders").unwrap(), 0);
    }

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("orders"), "\"orders\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
