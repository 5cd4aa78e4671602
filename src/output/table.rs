//
//  gitlab-cli
//  output/table.rs
//

//! Table formatting via `comfy_table`: a builder over a UTF-8 bordered table
//! with dynamic content arrangement, plus cell helpers for JSON values.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

/// Creates a table with the default styling: UTF-8 borders, dynamic
/// arrangement to the terminal width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder for formatted tables.
///
/// ```rust,ignore
/// TableBuilder::new()
///     .headers(["id", "username"])
///     .row(["1", "john.smith"])
///     .print();
/// ```
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides terminal color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row; cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    /// Adds a single row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Prints the table to stdout, consuming the builder.
    pub fn print(self) {
        println!("{}", self.table);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a JSON value as a table cell: strings unquoted, null empty,
/// composite values as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncates a string to `max_len` characters, appending `...` when there is
/// room. Counts characters rather than bytes so multibyte input never splits
/// mid-codepoint.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_shapes() {
        assert_eq!(cell_text(&json!("main")), "main");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 3), "hel");
    }

    #[test]
    fn test_truncate_multibyte_keeps_char_boundaries() {
        assert_eq!(truncate("ééééééééééé", 8), "ééééé...");
        assert_eq!(truncate("日本語のテキスト", 3), "日本語");
        assert_eq!(truncate("éé", 8), "éé");
    }
}
