//! Grid rendering for dynamically shaped result sets.

use rusqlite::types::Value;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

/// Render `rows` under `columns` headers as a bordered grid. Columns whose
/// non-null values are all numeric are right-aligned, everything else
/// left-aligned.
pub fn grid(columns: &[String], rows: &[Vec<Value>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().cloned());
    for row in rows {
        builder.push_record(row.iter().map(format_value));
    }

    let mut table = builder.build();
    table.with(Style::modern());
    for index in 0..columns.len() {
        let alignment = if is_numeric_column(rows, index) {
            Alignment::right()
        } else {
            Alignment::left()
        };
        table.with(Modify::new(Columns::single(index)).with(alignment));
    }
    table.to_string()
}

fn is_numeric_column(rows: &[Vec<Value>], index: usize) -> bool {
    let mut seen_number = false;
    for row in rows {
        match row.get(index) {
            Some(Value::Integer(_)) | Some(Value::Real(_)) => seen_number = true,
            Some(Value::Null) | None => {}
            Some(_) => return false,
        }
    }
    seen_number
}

/// Human form of a single SQLite value. NULL renders empty, like most
/// terminal SQL clients.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => t.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn grid_includes_headers_and_values() {
        let output = grid(
            &columns(&["customer_id", "customer_name"]),
            &[
                vec![Value::Integer(1), Value::Text("ABC Inc".into())],
                vec![Value::Integer(2), Value::Text("XYZ Ltd".into())],
            ],
        );

        assert!(output.contains("customer_id"));
        assert!(output.contains("ABC Inc"));
        assert!(output.contains("XYZ Ltd"));
    }

    #[test]
    fn numeric_columns_are_right_aligned() {
        let output = grid(
            &columns(&["name", "amount"]),
            &[
                vec![Value::Text("a".into()), Value::Integer(5)],
                vec![Value::Text("b".into()), Value::Integer(12345)],
            ],
        );

        // Right alignment: both values end at the same column.
        let short: Vec<char> = output.lines().find(|l| l.contains("│ a")).unwrap().chars().collect();
        let long: Vec<char> = output.lines().find(|l| l.contains("│ b")).unwrap().chars().collect();
        let short_end = short.iter().rposition(|c| *c == '5').unwrap();
        let long_end = long.iter().rposition(|c| *c == '5').unwrap();
        assert_eq!(short_end, long_end);
    }

    #[test]
    fn nulls_do_not_break_numeric_detection() {
        let rows = vec![
            vec![Value::Null],
            vec![Value::Real(2.5)],
        ];
        assert!(is_numeric_column(&rows, 0));

        let mixed = vec![vec![Value::Real(2.5)], vec![Value::Text("x".into())]];
        assert!(!is_numeric_column(&mixed, 0));

        let all_null = vec![vec![Value::Null]];
        assert!(!is_numeric_column(&all_null, 0));
    }

    #[test]
    fn values_format_plainly() {
        assert_eq!(format_value(&Value::Null), "");
        assert_eq!(format_value(&Value::Integer(42)), "42");
        assert_eq!(format_value(&Value::Real(7500.5)), "7500.5");
        assert_eq!(format_value(&Value::Text("hi".into())), "hi");
        assert_eq!(format_value(&Value::Blob(vec![0, 1, 2])), "<3 bytes>");
    }

    #[test]
    fn grid_with_no_rows_is_just_the_header() {
        let output = grid(&columns(&["x"]), &[]);
        assert!(output.contains('x'));
    }
}
