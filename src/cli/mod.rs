//! Command-line interface definitions.

pub mod check;
pub mod init;
pub mod inspect;
pub mod interactive;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_CREDENTIALS_FILE;
use crate::nl2sql::LlmProvider;

/// Default location of the sample database file.
pub const DEFAULT_DB_PATH: &str = "db/sales_data.db";

/// salesdb - sample sales database provisioning and inspection.
#[derive(Parser, Debug)]
#[command(name = "salesdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and populate the sample database (deletes any existing file)
    Init(InitArgs),

    /// Browse an existing database: list tables, view rows, run SQL
    Inspect(InspectArgs),

    /// Run configuration checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Database file to (re)create
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,
}

/// Arguments for the `inspect` subcommand.
///
/// Operation flags may be combined; they run in the order list, table,
/// query. With no operation flags the tool drops into an interactive menu.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Database file location
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Table to display
    #[arg(long)]
    pub table: Option<String>,

    /// Max rows to display
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Ad-hoc SQL to execute (runs verbatim, destructive statements included)
    #[arg(long)]
    pub query: Option<String>,

    /// List all tables
    #[arg(long)]
    pub list_tables: bool,
}

/// Subcommands for `salesdb check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Verify LLM provider credentials are configured
    Credentials(CredentialsArgs),
}

/// Arguments for `check credentials`.
#[derive(Parser, Debug)]
pub struct CredentialsArgs {
    /// LLM provider to check
    #[arg(long, value_enum)]
    pub provider: LlmProvider,

    /// Path to the credentials file
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub config: PathBuf,
}

/// Initialize tracing. `RUST_LOG` wins, then `--log-level`, then `warn`.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("warn")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
