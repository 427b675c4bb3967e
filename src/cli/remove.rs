//! `taskpad remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task number as shown by `taskpad list`
    #[arg(value_parser = super::parse_task_number)]
    number: usize,
}

pub async fn run(file: Option<&Path>, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let removed = store.delete(super::task_index(args.number))?;

    println!("✗ Task deleted: {}", removed.text);
    if args.number <= store.len() {
        println!("  Tasks after #{} moved up one number.", args.number);
    }
    Ok(())
}
