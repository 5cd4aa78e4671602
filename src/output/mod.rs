//
//  gitlab-cli
//  output/mod.rs
//

//! # Output
//!
//! Rendering for CLI results in two formats:
//!
//! - **Table**: human-readable output via `comfy_table`. A [`Record`] renders
//!   as a two-column field/value table; a [`PaginatedCollection`] renders as
//!   one row per record, columns taken from the first record's keys.
//! - **JSON**: pretty-printed `serde_json` output for scripting.
//!
//! [`OutputWriter`] is the single entry point; color support is detected from
//! the terminal via `console` and disabled when output is piped.

mod json;
mod table;

pub use json::*;
pub use table::*;

use crate::api::{PaginatedCollection, Record};

/// Character cap for cells in list views; long values (descriptions, nested
/// JSON) are truncated so one wide column cannot drown the table.
const MAX_CELL_WIDTH: usize = 80;

/// Available output formats, selectable with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes records and collections to stdout in the configured format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders a single record: field/value table, or the raw JSON object.
    pub fn write_record(&self, record: &Record) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(record),
            OutputFormat::Table => {
                let mut builder = TableBuilder::new()
                    .color(self.color)
                    .headers(["Field", "Value"]);
                for key in record.keys() {
                    let value = record.try_get(key).cloned().unwrap_or_default();
                    builder = builder.row([key.to_string(), cell_text(&value)]);
                }
                builder.print();
                Ok(())
            }
        }
    }

    /// Renders a collection: one row per record, columns from the first
    /// record's keys, or a JSON array.
    pub fn write_collection(&self, collection: &PaginatedCollection) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&collection.records().to_vec()),
            OutputFormat::Table => {
                let Some(first) = collection.records().first() else {
                    println!("No results.");
                    return Ok(());
                };
                let columns: Vec<String> = first.keys().map(|k| k.to_string()).collect();
                let mut builder = TableBuilder::new().color(self.color).headers(&columns);
                for record in collection.records() {
                    let row: Vec<String> = columns
                        .iter()
                        .map(|key| {
                            record
                                .try_get(key)
                                .map(|value| truncate(&cell_text(value), MAX_CELL_WIDTH))
                                .unwrap_or_default()
                        })
                        .collect();
                    builder = builder.row(row);
                }
                builder.print();
                Ok(())
            }
        }
    }

    /// Writes an error message to stderr, styled when the terminal allows.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a success message to stdout.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Prints a key-value pair, the key dimmed when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
