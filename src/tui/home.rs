//! Home view - task entry, task list and progress footer

mod render;

use crossterm::event::{Event, KeyCode, KeyEvent};
use std::time::{Duration, Instant};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::dialogs::{ConfirmDialog, DialogResult};
use crate::config::UiConfig;
use crate::task::{StoreError, TaskId, TaskStatus, TaskStore};

pub const INPUT_PLACEHOLDER: &str = "Enter your task here...";
pub const EMPTY_INPUT_WARNING: &str = "Please enter a task before adding!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

pub struct HomeView {
    store: TaskStore,

    // UI state
    cursor: usize,
    input: Input,
    editing: bool,

    // Overlays
    show_help: bool,
    confirm_dialog: Option<ConfirmDialog<TaskId>>,
    toast: Option<Toast>,

    // Settings
    confirm_delete: bool,
    toast_duration: Duration,
}

impl HomeView {
    pub fn new(store: TaskStore, ui: &UiConfig) -> Self {
        Self {
            // Start in text entry when there is nothing to navigate yet
            editing: store.is_empty(),
            store,
            cursor: 0,
            input: Input::default(),
            show_help: false,
            confirm_dialog: None,
            toast: None,
            confirm_delete: ui.confirm_delete,
            toast_duration: Duration::from_secs(ui.toast_seconds),
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.store.list().get(self.cursor).map(|t| t.id)
    }

    /// Drop an expired toast. Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.toast {
            Some(toast) if now.duration_since(toast.shown_at) >= self.toast_duration => {
                self.toast = None;
                true
            }
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(id) => {
                    self.confirm_dialog = None;
                    self.delete_task(id);
                }
            }
            return None;
        }

        if self.editing {
            match key.code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => self.submit_input(),
                _ => {
                    self.input.handle_event(&Event::Key(key));
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') => self.editing = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.store.len().saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('p') => self.set_selected_status(TaskStatus::Pending),
            KeyCode::Char('c') => self.set_selected_status(TaskStatus::Completed),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('r') | KeyCode::F(5) => self.reload(),
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.store.len();
        if len == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    fn submit_input(&mut self) {
        let text = self.input.value().to_string();
        match self.store.add(text.as_str()) {
            Ok(_) => {
                self.input.reset();
                self.cursor = self.store.len() - 1;
                self.show_toast(ToastKind::Info, format!("Task added: {}", text.trim()));
            }
            Err(StoreError::Validation(_)) => {
                self.show_toast(ToastKind::Warning, EMPTY_INPUT_WARNING.to_string());
            }
            Err(e) => self.report("Failed to add task", e),
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let status = self
                .store
                .get(id)
                .map(|t| t.status.toggled())
                .unwrap_or_default();
            self.set_status(id, status);
        }
    }

    fn set_selected_status(&mut self, status: TaskStatus) {
        if let Some(id) = self.selected_id() {
            self.set_status(id, status);
        }
    }

    fn set_status(&mut self, id: TaskId, status: TaskStatus) {
        if let Err(e) = self.store.set_status_by_id(id, status) {
            self.report("Failed to update task", e);
        }
    }

    fn request_delete(&mut self) {
        let Some(task) = self.store.list().get(self.cursor) else {
            return;
        };

        if self.confirm_delete {
            let message = format!("Delete \"{}\"?", task.summary());
            self.confirm_dialog = Some(ConfirmDialog::new("Delete Task", &message, task.id));
        } else {
            let id = task.id;
            self.delete_task(id);
        }
    }

    fn delete_task(&mut self, id: TaskId) {
        match self.store.delete_by_id(id) {
            Ok(task) => {
                self.clamp_cursor();
                self.show_toast(ToastKind::Warning, format!("Task deleted: {}", task.summary()));
            }
            Err(e) => self.report("Failed to delete task", e),
        }
    }

    fn reload(&mut self) {
        match self.store.reload() {
            Ok(()) => {
                self.clamp_cursor();
                self.show_toast(
                    ToastKind::Info,
                    format!("Reloaded {} tasks", self.store.len()),
                );
            }
            Err(e) => self.report("Failed to reload tasks", e),
        }
    }

    fn report(&mut self, what: &str, err: StoreError) {
        tracing::error!("{}: {}", what, err);
        self.show_toast(ToastKind::Error, format!("{}: {}", what, err));
    }

    fn show_toast(&mut self, kind: ToastKind, message: String) {
        self.toast = Some(Toast {
            kind,
            message,
            shown_at: Instant::now(),
        });
    }
}
