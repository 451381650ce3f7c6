//! salesdb - sample sales database provisioning and inspection.
//!
//! Two independent flows share this crate:
//!
//! - **Provisioning** (`salesdb init`) deletes and rebuilds a small SQLite
//!   sales database (customers, products, orders) with a fixed dataset,
//!   then re-reads every table and prints a verification report.
//! - **Inspection** (`salesdb inspect`) browses an existing database file:
//!   list tables, view a table with introspected columns and a row limit,
//!   or run ad-hoc SQL - driven by flags or an interactive menu.
//!
//! The ad-hoc query path executes statements verbatim, destructive ones
//! included. This is a trusted, local, single-user tool; filtering
//! statement types would change its contract.
//!
//! # Modules
//!
//! - [`cli`] - Command definitions, handlers, and terminal output helpers
//! - [`config`] - LLM provider credentials (TOML sections per provider)
//! - [`db`] - Connection management, provisioning, catalog introspection,
//!   and ad-hoc query execution
//! - [`error`] - Error types for the crate
//! - [`nl2sql`] - Interface types for the external NL-to-SQL service
//! - [`render`] - Grid rendering for dynamically shaped result sets

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod nl2sql;
pub mod render;
