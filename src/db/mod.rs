//! SQLite access: connection management, provisioning, introspection, and
//! ad-hoc query execution.

pub mod catalog;
pub mod provision;
pub mod query;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Error, Result};

/// Open a connection with the pragmas every flow relies on. The connection
/// is released on drop, on every exit path.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    Ok(conn)
}

/// Fail with a remediation message if the database file is absent.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingDatabase {
            path: path.display().to_string(),
        })
    }
}
