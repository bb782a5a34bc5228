//! Output helpers and progress spinner for the CLI

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::Position;

/// Create a spinner for the build step
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .context("invalid spinner template")?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Write rendered output to `path`, or to stdout without a trailing newline
pub fn write_output(contents: &str, path: Option<&Path>) -> crate::Result<()> {
    match path {
        Some(path) => fs::write(path, contents).map_err(|source| crate::Error::Io {
            operation: format!("write {}", path.display()),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| crate::Error::Io {
                    operation: "write to stdout".to_string(),
                    source,
                })
        }
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a position as three rows with cell numbers in empty squares
pub fn format_grid(position: &Position) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                match position[cell].to_char() {
                    '.' => cell.to_string(),
                    c => c.to_string(),
                }
            })
            .collect();
        rows.push(format!(" {} ", cells.join(" | ")));
    }
    rows.join("\n---+---+---\n")
}
