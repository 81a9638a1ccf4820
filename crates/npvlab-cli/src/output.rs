//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
///
/// `Minimal` is command specific, so callers handle it themselves; here it
/// falls back to one JSON object per line.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Formats a rate fraction as a percentage string.
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Formats a money amount.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, rate: f64) -> Self {
        Self::new(key, format_percent(rate))
    }

    /// Creates a key-value pair formatted as a money amount.
    pub fn from_amount(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_amount(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
