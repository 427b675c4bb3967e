//! xtask - Development tasks for taskpad

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

const CLI_REFERENCE: &str = "docs/cli.md";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for taskpad")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the CLI reference from the clap definitions
    GenDocs {
        /// Fail instead of writing when the checked-in reference is stale
        #[arg(long)]
        check: bool,
    },
}

fn main() -> ExitCode {
    let args = Xtask::parse();
    let result = match args.command {
        Commands::GenDocs { check } => generate_cli_docs(check),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn generate_cli_docs(check: bool) -> Result<(), String> {
    let markdown = clap_markdown::help_markdown::<taskpad::cli::Cli>();
    let output_path = Path::new(CLI_REFERENCE);

    if check {
        let current = fs::read_to_string(output_path).unwrap_or_default();
        if current != markdown {
            return Err(format!(
                "{} is out of date; run `cargo xtask gen-docs`",
                output_path.display()
            ));
        }
        println!("{} is up to date", output_path.display());
        return Ok(());
    }

    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    }
    fs::write(output_path, markdown)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    println!("Generated CLI documentation at {}", output_path.display());
    Ok(())
}
