//! Interactive menu mode, entered when `inspect` gets no operation flags.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rusqlite::Connection;

use crate::cli::{inspect, output};
use crate::db::catalog;
use crate::error::Result;

/// Row limit used when the prompt is left blank or unparsable.
const DEFAULT_LIMIT: usize = 10;

const MENU: &[&str] = &["List tables", "View table", "Run SQL query", "Quit"];

/// Menu loop; returns when the user quits. Query and table-selection
/// mistakes are reported and the loop continues.
pub fn run(conn: &Connection) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => inspect::list_tables(conn)?,
            1 => view_flow(conn, &theme)?,
            2 => query_flow(conn, &theme)?,
            _ => break,
        }
    }
    Ok(())
}

fn view_flow(conn: &Connection, theme: &ColorfulTheme) -> Result<()> {
    let tables = catalog::table_names(conn)?;
    if tables.is_empty() {
        output::warn("the database has no tables");
        return Ok(());
    }

    output::section("Tables");
    for (i, table) in tables.iter().enumerate() {
        output::note(&format!("{}. {table}", i + 1));
    }
    println!();

    let selection: String = Input::with_theme(theme)
        .with_prompt(format!("Table [1-{} or name]", tables.len()))
        .interact_text()?;

    let Some(table) = resolve_table(&selection, &tables) else {
        output::error(&format!(
            "'{}' is not a table number or name",
            selection.trim()
        ));
        return Ok(());
    };
    let table = table.to_string();

    let limit_input: String = Input::with_theme(theme)
        .with_prompt(format!("Row limit [{DEFAULT_LIMIT}]"))
        .allow_empty(true)
        .interact_text()?;
    let limit = parse_limit(&limit_input);

    inspect::view_table(conn, &table, limit)
}

fn query_flow(conn: &Connection, theme: &ColorfulTheme) -> Result<()> {
    let sql: String = Input::with_theme(theme)
        .with_prompt("SQL")
        .allow_empty(true)
        .interact_text()?;
    let sql = sql.trim();
    if sql.is_empty() {
        output::error("query cannot be empty");
        return Ok(());
    }
    inspect::run_query(conn, sql)
}

/// Resolve a table selection given either a 1-based index or a literal
/// name. Index takes precedence; `None` when neither matches.
pub(crate) fn resolve_table<'a>(input: &str, tables: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        if (1..=tables.len()).contains(&index) {
            return Some(&tables[index - 1]);
        }
    }
    tables
        .iter()
        .find(|t| t.as_str() == input)
        .map(|t| t.as_str())
}

/// Interactive row-limit policy: blank or unparsable input falls back to
/// the default; any parsed value, zero included, is honored.
pub(crate) fn parse_limit(input: &str) -> usize {
    input.trim().parse().unwrap_or(DEFAULT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<String> {
        ["customers", "products", "orders"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn resolve_by_index() {
        let tables = tables();
        assert_eq!(resolve_table("1", &tables), Some("customers"));
        assert_eq!(resolve_table(" 3 ", &tables), Some("orders"));
    }

    #[test]
    fn resolve_by_name() {
        let tables = tables();
        assert_eq!(resolve_table("products", &tables), Some("products"));
    }

    #[test]
    fn resolve_rejects_out_of_range_and_unknown() {
        let tables = tables();
        assert_eq!(resolve_table("0", &tables), None);
        assert_eq!(resolve_table("4", &tables), None);
        assert_eq!(resolve_table("invoices", &tables), None);
        assert_eq!(resolve_table("", &tables), None);
    }

    #[test]
    fn limit_defaults_on_blank_or_garbage() {
        assert_eq!(parse_limit(""), 10);
        assert_eq!(parse_limit("  "), 10);
        assert_eq!(parse_limit("abc"), 10);
        assert_eq!(parse_limit("-5"), 10);
    }

    #[test]
    fn limit_honors_parsed_values() {
        assert_eq!(parse_limit("0"), 0);
        assert_eq!(parse_limit("25"), 25);
        assert_eq!(parse_limit(" 7 "), 7);
    }
}
