//! Provisioning integration tests, driven through the library.

use rusqlite::Connection;
use salesdb::db::provision::{self, SALES_BY_CATEGORY_SQL, SALES_BY_COUNTRY_SQL};
use tempfile::TempDir;

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count")
}

#[test]
fn provision_creates_fixed_dataset() {
    let dir = TempDir::new().unwrap();
    let conn = provision::provision(&dir.path().join("sales.db")).expect("provision");

    assert_eq!(count(&conn, "customers"), 7);
    assert_eq!(count(&conn, "products"), 4);
    assert_eq!(count(&conn, "orders"), 10);
}

#[test]
fn provision_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.db");

    drop(provision::provision(&path).expect("first run"));
    let conn = provision::provision(&path).expect("second run");

    assert_eq!(count(&conn, "customers"), 7);
    assert_eq!(count(&conn, "products"), 4);
    assert_eq!(count(&conn, "orders"), 10);
}

#[test]
fn orders_reference_existing_customers_and_products() {
    let dir = TempDir::new().unwrap();
    let conn = provision::provision(&dir.path().join("sales.db")).expect("provision");

    let orphans: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM orders o
             LEFT JOIN customers c ON o.customer_id = c.customer_id
             LEFT JOIN products p ON o.product_id = p.product_id
             WHERE c.customer_id IS NULL OR p.product_id IS NULL",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn country_totals_are_descending_and_sum_to_all_orders() {
    let dir = TempDir::new().unwrap();
    let conn = provision::provision(&dir.path().join("sales.db")).expect("provision");

    let mut stmt = conn.prepare(SALES_BY_COUNTRY_SQL).unwrap();
    let rows: Vec<(String, f64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert_eq!(rows.len(), 4, "expected China/USA/UK/Japan");
    assert!(rows.windows(2).all(|w| w[0].1 >= w[1].1), "not descending");
    assert_eq!(rows[0].0, "China");

    let grand_total: f64 = conn
        .query_row("SELECT SUM(amount) FROM orders", [], |row| row.get(0))
        .unwrap();
    let report_total: f64 = rows.iter().map(|r| r.1).sum();
    assert!((grand_total - report_total).abs() < 1e-6);
}

#[test]
fn category_order_counts_cover_every_order() {
    let dir = TempDir::new().unwrap();
    let conn = provision::provision(&dir.path().join("sales.db")).expect("provision");

    let mut stmt = conn.prepare(SALES_BY_CATEGORY_SQL).unwrap();
    let rows: Vec<(String, f64, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert!(rows.windows(2).all(|w| w[0].1 >= w[1].1), "not descending");
    let counted: i64 = rows.iter().map(|r| r.2).sum();
    assert_eq!(counted, 10);
}
