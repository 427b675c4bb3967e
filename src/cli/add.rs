//! `taskpad add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct AddArgs {
    /// Task description (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,
}

impl AddArgs {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(file: Option<&Path>, args: AddArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let text = args.text();
    store.add(text.as_str())?;

    println!("✓ Task added: {}", text);
    println!("  #{} in {}", store.len(), store.path().display());
    Ok(())
}
