//! Schema and sample data provisioning.
//!
//! Produces a deterministic sample sales database: three tables with
//! foreign keys declared on orders, and a fixed dataset inserted in a
//! single transaction. Any SQL failure aborts the run; the operation
//! starts by deleting the old file, so it can simply be re-run.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::db;
use crate::error::Result;

/// Schema DDL. The identical text is served to the NL-to-SQL service as
/// training input, so keep it in sync with what `init` actually creates.
pub const SCHEMA_DDL: &str = "\
CREATE TABLE customers (
    customer_id INTEGER PRIMARY KEY,
    customer_name TEXT,
    country TEXT,
    segment TEXT
);

CREATE TABLE products (
    product_id INTEGER PRIMARY KEY,
    product_name TEXT NOT NULL,
    category TEXT,
    price REAL,
    supplier TEXT
);

CREATE TABLE orders (
    order_id INTEGER PRIMARY KEY,
    customer_id INTEGER,
    order_date TEXT,
    product_id INTEGER,
    amount REAL,
    FOREIGN KEY (customer_id) REFERENCES customers(customer_id),
    FOREIGN KEY (product_id) REFERENCES products(product_id)
);
";

/// Total order amount per customer country, highest first.
pub const SALES_BY_COUNTRY_SQL: &str = "\
SELECT c.country, SUM(o.amount) AS total_sales
FROM orders o
JOIN customers c ON o.customer_id = c.customer_id
GROUP BY c.country
ORDER BY total_sales DESC";

/// Total order amount and order count per product category, highest first.
pub const SALES_BY_CATEGORY_SQL: &str = "\
SELECT p.category, SUM(o.amount) AS total_sales, COUNT(o.order_id) AS order_count
FROM orders o
JOIN products p ON o.product_id = p.product_id
GROUP BY p.category
ORDER BY total_sales DESC";

const CUSTOMERS: &[(i64, &str, &str, &str)] = &[
    (1, "Zhang San Co.", "China", "enterprise"),
    (2, "Li Si Trading", "China", "enterprise"),
    (3, "Wang Wu", "China", "consumer"),
    (4, "Zhao Liu Office", "China", "enterprise"),
    (5, "ABC Inc", "USA", "enterprise"),
    (6, "XYZ Ltd", "UK", "enterprise"),
    (7, "123 Shop", "Japan", "consumer"),
];

const PRODUCTS: &[(i64, &str, &str, f64, &str)] = &[
    (101, "Laptop", "Electronics", 4000.00, "Lenovo"),
    (102, "Printer", "Office Equipment", 2000.00, "HP"),
    (103, "Desk", "Furniture", 1500.00, "IKEA"),
    (104, "Office Chair", "Furniture", 800.00, "IKEA"),
];

const ORDERS: &[(i64, i64, &str, i64, f64)] = &[
    (1, 1, "2023-01-15", 101, 5000.00),
    (2, 1, "2023-02-20", 102, 7500.50),
    (3, 2, "2023-01-10", 101, 4200.00),
    (4, 3, "2023-03-05", 103, 1200.75),
    (5, 4, "2023-03-15", 104, 3500.00),
    (6, 5, "2023-02-28", 102, 6500.25),
    (7, 6, "2023-03-10", 103, 8200.00),
    (8, 7, "2023-01-25", 104, 2100.50),
    (9, 5, "2023-04-05", 101, 7200.00),
    (10, 6, "2023-04-15", 102, 5600.75),
];

/// Delete any database at `path` and build a fresh one with the sample
/// dataset. Returns the open connection so callers can run verification
/// queries against it.
pub fn provision(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if path.exists() {
        fs::remove_file(path)?;
        info!(path = %path.display(), "removed old database");
    }

    let mut conn = db::open(path)?;
    conn.execute_batch(SCHEMA_DDL)?;
    debug!("schema created");

    insert_sample_data(&mut conn)?;
    info!(path = %path.display(), "sample database provisioned");
    Ok(conn)
}

fn insert_sample_data(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO customers (customer_id, customer_name, country, segment)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (id, name, country, segment) in CUSTOMERS {
            stmt.execute(params![id, name, country, segment])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO products (product_id, product_name, category, price, supplier)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (id, name, category, price, supplier) in PRODUCTS {
            stmt.execute(params![id, name, category, price, supplier])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO orders (order_id, customer_id, order_date, product_id, amount)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (id, customer, date, product, amount) in ORDERS {
            stmt.execute(params![id, customer, date, product, amount])?;
        }
    }
    tx.commit()?;
    Ok(())
}
