//! Terminal User Interface module

mod app;
mod components;
pub mod dialogs;
mod home;
mod styles;

pub use app::*;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::task::TaskStore;

pub async fn run(file: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let path = config.tasks_path(file);

    // Load before touching the terminal so a bad file is a plain error
    let store = TaskStore::open_with(&path, config.store_options())
        .with_context(|| format!("Failed to open tasks file {}", path.display()))?;
    tracing::debug!("Starting TUI with {}", path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(store, &config);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
