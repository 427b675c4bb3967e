//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

use super::home::HomeView;
use super::styles::Theme;
use crate::config::Config;
use crate::task::TaskStore;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    home: HomeView,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        Self {
            home: HomeView::new(store, &config.ui),
            should_quit: false,
            theme: Theme::by_name(&config.theme.name),
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key);

                    // Every action re-queries the store on the next frame
                    terminal.draw(|f| self.render(f))?;
                }
            } else if self.home.tick(Instant::now()) {
                terminal.draw(|f| self.render(f))?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
        (temp, App::new(store, &Config::default()))
    }

    #[test]
    fn test_ctrl_c_quits_even_while_typing() {
        let (_temp, mut app) = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_while_typing_does_not_quit() {
        let (_temp, mut app) = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_action_from_view() {
        let (_temp, mut app) = app();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
