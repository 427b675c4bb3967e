//! CLI command implementations

pub mod add;
pub mod definition;
pub mod list;
pub mod remove;
pub mod stats;
pub mod status;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::task::{TaskStatus, TaskStore};

/// Open the task store the command line points at.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let config = Config::load()?;
    let path = config.tasks_path(file);
    TaskStore::open_with(&path, config.store_options())
        .with_context(|| format!("Failed to open tasks file {}", path.display()))
}

/// Parse a 1-based task number as shown by `taskpad list`.
pub fn parse_task_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("task numbers start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a task number", s)),
    }
}

pub fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(s).ok_or_else(|| format!("unknown status '{}' (use pending or completed)", s))
}

/// Convert a display number to a list index.
pub fn task_index(number: usize) -> usize {
    number.saturating_sub(1)
}

/// Truncate to at most `max` terminal columns, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max {
        return s.to_string();
    }

    let (budget, ellipsis) = if max <= 3 { (max, "") } else { (max - 3, "...") };
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 1), "h");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate("買い物リスト", 7), "買い...");
        assert_eq!(truncate("買い物", 6), "買い物");
    }

    #[test]
    fn test_truncate_multibyte_does_not_panic() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_parse_task_number() {
        assert_eq!(parse_task_number("1"), Ok(1));
        assert_eq!(parse_task_number(" 12 "), Ok(12));
        assert!(parse_task_number("0").is_err());
        assert!(parse_task_number("abc").is_err());
        assert!(parse_task_number("").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("done"), Ok(TaskStatus::Completed));
        assert_eq!(parse_status("Pending"), Ok(TaskStatus::Pending));
        assert!(parse_status("later").is_err());
    }

    #[test]
    fn test_task_index() {
        assert_eq!(task_index(1), 0);
        assert_eq!(task_index(5), 4);
    }
}
