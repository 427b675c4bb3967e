//! `taskpad list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::task::{Task, TaskStats, TaskStatus};

const TABLE_COL_NUMBER: usize = 4;
const TABLE_COL_STATUS: usize = 11;
const TABLE_COL_TASK: usize = 60;

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks with this status (pending, completed)
    #[arg(short, long, value_parser = super::parse_status)]
    status: Option<TaskStatus>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaskJson<'a> {
    number: usize,
    text: &'a str,
    status: &'static str,
}

/// Tasks paired with their 1-based display number, filtered by status.
fn numbered(tasks: &[Task], status: Option<TaskStatus>) -> Vec<(usize, &Task)> {
    tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| (idx + 1, task))
        .filter(|(_, task)| status.is_none_or(|s| task.status == s))
        .collect()
}

fn format_row(number: usize, task: &Task) -> String {
    let text = super::truncate(&task.summary(), TABLE_COL_TASK);
    format!(
        "{:>width_number$}  {} {:<width_status$} {}",
        number,
        task.status.symbol(),
        task.status.label(),
        text,
        width_number = TABLE_COL_NUMBER,
        width_status = TABLE_COL_STATUS - 2,
    )
}

pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "Total Tasks: {}  Completed: {}  Progress: {}%",
        stats.total,
        stats.completed,
        stats.progress_percent()
    )
}

pub async fn run(file: Option<&Path>, args: ListArgs) -> Result<()> {
    let store = super::open_store(file)?;
    let rows = numbered(store.list(), args.status);

    if args.json {
        let tasks: Vec<TaskJson> = rows
            .iter()
            .map(|(number, task)| TaskJson {
                number: *number,
                text: &task.text,
                status: task.status.label(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No tasks found! Add your first one with: taskpad add <task>");
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching tasks.");
    } else {
        println!(
            "{:>width_number$}  {:<width_status$} TASK",
            "#",
            "STATUS",
            width_number = TABLE_COL_NUMBER,
            width_status = TABLE_COL_STATUS,
        );
        println!("{}", "-".repeat(TABLE_COL_NUMBER + TABLE_COL_STATUS + TABLE_COL_TASK + 3));
        for (number, task) in &rows {
            println!("{}", format_row(*number, task));
        }
    }

    println!("\n{}", format_stats(&store.stats()));
    Ok(())
}
