//! `taskpad stats` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(file: Option<&Path>, args: StatsArgs) -> Result<()> {
    let store = super::open_store(file)?;
    let stats = store.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", super::list::format_stats(&stats));
    }
    Ok(())
}
