//! Yes/No confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::tui::styles::Theme;

/// Asks before a destructive action and hands back `payload` on "Yes".
pub struct ConfirmDialog<T> {
    title: String,
    message: String,
    payload: T,
    yes_selected: bool,
}

impl<T: Clone> ConfirmDialog<T> {
    pub fn new(title: &str, message: &str, payload: T) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            payload,
            yes_selected: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<T> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(self.payload.clone()),
            KeyCode::Enter if self.yes_selected => DialogResult::Submit(self.payload.clone()),
            KeyCode::Enter => DialogResult::Cancel,
            KeyCode::Left | KeyCode::Char('h') => {
                self.yes_selected = true;
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.yes_selected = false;
                DialogResult::Continue
            }
            KeyCode::Tab => {
                self.yes_selected = !self.yes_selected;
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 50, 8);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.error).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let (yes_style, no_style) = if self.yes_selected {
            (
                Style::default().fg(theme.error).bold(),
                Style::default().fg(theme.dimmed),
            )
        } else {
            (
                Style::default().fg(theme.dimmed),
                Style::default().fg(theme.completed).bold(),
            )
        };

        let buttons = Line::from(vec![
            Span::styled("[Yes]", yes_style),
            Span::raw("    "),
            Span::styled("[No]", no_style),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> ConfirmDialog<u32> {
        ConfirmDialog::new("Delete Task", "Delete 'Buy milk'?", 7)
    }

    #[test]
    fn test_default_selection_is_no() {
        let mut d = dialog();
        assert!(!d.yes_selected);
        assert!(matches!(d.handle_key(key(KeyCode::Enter)), DialogResult::Cancel));
    }

    #[test]
    fn test_cancel_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('n'), KeyCode::Char('N')] {
            let mut d = dialog();
            assert!(matches!(d.handle_key(key(code)), DialogResult::Cancel));
        }
    }

    #[test]
    fn test_y_submits_payload() {
        for code in [KeyCode::Char('y'), KeyCode::Char('Y')] {
            let mut d = dialog();
            assert!(matches!(d.handle_key(key(code)), DialogResult::Submit(7)));
        }
    }

    #[test]
    fn test_enter_with_yes_selected_submits() {
        let mut d = dialog();
        d.handle_key(key(KeyCode::Left));
        assert!(matches!(d.handle_key(key(KeyCode::Enter)), DialogResult::Submit(7)));
    }

    #[test]
    fn test_selection_keys() {
        let mut d = dialog();
        d.handle_key(key(KeyCode::Tab));
        assert!(d.yes_selected);
        d.handle_key(key(KeyCode::Tab));
        assert!(!d.yes_selected);

        d.handle_key(key(KeyCode::Char('h')));
        assert!(d.yes_selected);
        d.handle_key(key(KeyCode::Char('l')));
        assert!(!d.yes_selected);
        d.handle_key(key(KeyCode::Left));
        d.handle_key(key(KeyCode::Right));
        assert!(!d.yes_selected);
    }

    #[test]
    fn test_unknown_key_continues() {
        let mut d = dialog();
        assert!(matches!(
            d.handle_key(key(KeyCode::Char('x'))),
            DialogResult::Continue
        ));
    }
}
