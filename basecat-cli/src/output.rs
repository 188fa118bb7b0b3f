//! Terminal output formatting.

use colored::Colorize;
use std::fmt::Display;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green());
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", "→".cyan(), msg);
}

/// Print a warning message.
pub fn warn(msg: &str) {
    println!("{} {}", "!".yellow().bold(), msg.yellow());
}

/// Print a header.
pub fn header(msg: &str) {
    println!("\n{}", msg.white().bold());
    println!("{}", "─".repeat(msg.chars().count()).dimmed());
}

/// Print a key-value pair.
pub fn kv(key: &str, value: &str) {
    println!("  {} {}", format!("{}:", key).dimmed(), value);
}

/// Print a helpful hint.
pub fn hint(msg: &str) {
    println!("{} {}", "💡".dimmed(), msg.dimmed());
}

/// One column of a catalogue listing.
pub struct Column {
    pub title: &'static str,
    /// Padding width; zero leaves the cell unpadded.
    pub width: usize,
}

/// Print bold column titles followed by a rule spanning the table.
pub fn table_header(columns: &[Column]) {
    let titles: Vec<String> = columns
        .iter()
        .map(|c| format!("{:<w$}", c.title.bold(), w = c.width))
        .collect();
    let span: usize = columns
        .iter()
        .map(|c| c.width.max(c.title.chars().count()) + 1)
        .sum();
    println!();
    println!("{}", titles.join(" ").trim_end());
    println!("{}", "─".repeat(span.saturating_sub(1)).dimmed());
}

/// Print one row. `key` fills the first column, `cells` the rest.
pub fn table_row(columns: &[Column], key: &str, cells: &[&dyn Display]) {
    let mut line = format!("{:<w$}", key.green(), w = columns.first().map_or(0, |c| c.width));
    for (cell, column) in cells.iter().zip(columns.iter().skip(1)) {
        line.push(' ');
        line.push_str(&format!("{:<w$}", cell, w = column.width));
    }
    println!("{}", line.trim_end());
}
