//! CLI command implementations

pub mod definition;
pub mod init;
pub mod insights;
pub mod parse;
pub mod plan;
pub mod suggest;
pub mod tasks;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

use crate::advice::SuggestionBundle;

/// Read an advice response from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read advice from stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read advice from {:?}", path))
}

/// Parse a `YYYY-MM-DD` reference date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?}, expected YYYY-MM-DD", s))
}

pub fn print_bundle(bundle: &SuggestionBundle, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
        return Ok(());
    }

    println!("Description:\n  {}\n", bundle.description);
    println!("Treatment Plan:\n  {}\n", bundle.treatment);
    println!("Prevention:\n  {}\n", bundle.prevention);

    if bundle.schedule.is_empty() {
        println!("No schedule found");
        return Ok(());
    }

    println!("Schedule ({}):", bundle.schedule.len());
    for entry in &bundle.schedule {
        println!(
            "  {:<width_date$} {:<width_task$} {}",
            truncate(&entry.relative_date, TABLE_COL_DATE),
            truncate(&entry.task, TABLE_COL_TASK),
            entry.details,
            width_date = TABLE_COL_DATE,
            width_task = TABLE_COL_TASK
        );
    }
    Ok(())
}

const TABLE_COL_DATE: usize = 18;
const TABLE_COL_TASK: usize = 32;

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 2), "he");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Día siete, semana uno", 6), "Día...");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-02-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
        );
        assert!(parse_date("15/02/2026").is_err());
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/advice.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read advice"));
    }
}
