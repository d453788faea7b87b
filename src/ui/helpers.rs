use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::db::StoreFile;

/// Print the start-up banner with the program and embedded SQLite versions.
pub fn print_banner() {
    println!();
    println!("\t\tAcronym Management Tool");
    println!("\t\t{}", "\u{af}".repeat(23));
    println!("Summary:");
    println!(
        " - App version: {} with SQLite version: {}",
        env!("CARGO_PKG_VERSION"),
        rusqlite::version()
    );
}

/// Print the resolved database file's location, size, and modification time.
pub fn print_store_summary(store: &StoreFile) {
    println!(" - Database location: {}", store.path.display());
    println!(" - Database size: {} bytes", group_digits(store.size as i64));
    if let Some(modified) = store.modified {
        println!(" - Database last modified: {}", format_timestamp(modified));
    }
}

/// Render a count with thousands separators, e.g. `1234567` as `1,234,567`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%a %e %b %Y %H:%M:%S").to_string()
}
