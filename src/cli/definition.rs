//! Command line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::stats::StatsArgs;
use super::status::{NumberArgs, StatusArgs};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Terminal task tracker backed by a plain CSV file")]
#[command(version)]
pub struct Cli {
    /// Tasks file (defaults to storage.path from config, then ./tasks.csv)
    #[arg(short, long, global = true, env = "TASKPAD_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as completed
    Done(NumberArgs),

    /// Mark a task as pending again
    Reopen(NumberArgs),

    /// Set the status of a task
    Status(StatusArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Show task counts and progress
    Stats(StatsArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["taskpad"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["taskpad", "list", "--file", "/tmp/t.csv"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.csv")));
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["taskpad", "add", "Buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.text(), "Buy milk"),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["taskpad", "status", "1", "blocked"]).is_err());
        assert!(Cli::try_parse_from(["taskpad", "status", "1", "done"]).is_ok());
    }

    #[test]
    fn test_task_number_must_be_positive() {
        assert!(Cli::try_parse_from(["taskpad", "done", "0"]).is_err());
        assert!(Cli::try_parse_from(["taskpad", "done", "-1"]).is_err());
        assert!(Cli::try_parse_from(["taskpad", "done", "3"]).is_ok());
    }
}
