//! `taskpad done`, `taskpad reopen` and `taskpad status` implementations

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStatus;

#[derive(Args)]
pub struct NumberArgs {
    /// Task number as shown by `taskpad list`
    #[arg(value_parser = super::parse_task_number)]
    number: usize,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Task number as shown by `taskpad list`
    #[arg(value_parser = super::parse_task_number)]
    number: usize,

    /// New status (pending, completed)
    #[arg(value_parser = super::parse_status)]
    status: TaskStatus,
}

pub async fn run_done(file: Option<&Path>, args: NumberArgs) -> Result<()> {
    set(file, args.number, TaskStatus::Completed)
}

pub async fn run_reopen(file: Option<&Path>, args: NumberArgs) -> Result<()> {
    set(file, args.number, TaskStatus::Pending)
}

pub async fn run(file: Option<&Path>, args: StatusArgs) -> Result<()> {
    set(file, args.number, args.status)
}

fn set(file: Option<&Path>, number: usize, status: TaskStatus) -> Result<()> {
    let mut store = super::open_store(file)?;
    let index = super::task_index(number);
    store.set_status(index, status)?;

    let task = &store.list()[index];
    println!("{} {}: {}", task.status.symbol(), task.status, task.text);
    Ok(())
}
