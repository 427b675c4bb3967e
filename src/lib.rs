//! taskpad library - task list core, CLI commands and terminal UI

pub mod cli;
pub mod config;
pub mod task;
pub mod tui;
