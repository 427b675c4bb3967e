//! taskpad - Terminal task tracker backed by a plain CSV file

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskpad::cli::{self, Cli, Commands};
use taskpad::tui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKPAD_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskpad=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let file = cli.file.as_deref();

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(file, args).await,
        Some(Commands::List(args)) => cli::list::run(file, args).await,
        Some(Commands::Done(args)) => cli::status::run_done(file, args).await,
        Some(Commands::Reopen(args)) => cli::status::run_reopen(file, args).await,
        Some(Commands::Status(args)) => cli::status::run(file, args).await,
        Some(Commands::Remove(args)) => cli::remove::run(file, args).await,
        Some(Commands::Stats(args)) => cli::stats::run(file, args).await,
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "taskpad", &mut std::io::stdout());
            Ok(())
        }
        None => tui::run(file).await,
    }
}
