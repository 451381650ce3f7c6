//! Interface types for the external natural-language-to-SQL service.
//!
//! The service itself (SQL generation, vector retrieval, the bundled web
//! chat UI) lives outside this crate and is consumed as-is. This module
//! pins down the shapes that cross the boundary: which LLM backend a
//! launch flow binds, what "training" payloads ground the service, and
//! the trait an adapter has to satisfy. No adapter ships here.

use std::fmt;

use clap::ValueEnum;

use crate::db::provision::{SALES_BY_COUNTRY_SQL, SCHEMA_DDL};
use crate::error::Result;

/// Pluggable LLM backends a launch flow can bind the service to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProvider {
    /// DeepSeek chat completion API (hosted, keyed).
    Deepseek,
    /// Google Gemini API (hosted, keyed).
    Gemini,
    /// Local Ollama endpoint (no credential).
    Ollama,
}

impl LlmProvider {
    /// Credentials file section name for this provider.
    pub fn section(&self) -> &'static str {
        match self {
            LlmProvider::Deepseek => "deepseek",
            LlmProvider::Gemini => "gemini",
            LlmProvider::Ollama => "ollama",
        }
    }

    /// Whether the provider needs an API key; Ollama is local-only.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, LlmProvider::Ollama)
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// One unit of grounding material for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingItem {
    /// Schema definition text.
    Ddl(String),
    /// Free-text documentation about the data.
    Documentation(String),
    /// A worked question/SQL pair.
    SqlExample { question: String, sql: String },
}

/// Contract an NL-to-SQL adapter satisfies.
pub trait SqlGenerator {
    /// Feed one training item to the service.
    fn train(&mut self, item: TrainingItem) -> Result<()>;

    /// Generate a SQL statement answering `question`.
    fn generate_sql(&self, question: &str) -> Result<String>;
}

/// The canonical training payloads for the sample sales database: the
/// schema DDL the provisioner applies plus documentation of the tables.
pub fn builtin_training() -> Vec<TrainingItem> {
    vec![
        TrainingItem::Ddl(SCHEMA_DDL.to_string()),
        TrainingItem::Documentation(
            "The customers table holds one row per customer: customer_id, \
             customer_name, country, and segment (enterprise or consumer)."
                .to_string(),
        ),
        TrainingItem::Documentation(
            "The products table lists sellable products with category, price, \
             and supplier. The orders table records sales: each order \
             references a customer and a product and carries an order_date \
             (text, YYYY-MM-DD) and a monetary amount."
                .to_string(),
        ),
        TrainingItem::SqlExample {
            question: "Which country has the highest total sales?".to_string(),
            sql: SALES_BY_COUNTRY_SQL.to_string(),
        },
    ]
}
