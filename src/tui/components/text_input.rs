//! Single-line text entry rendering

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Build the spans for a text field.
///
/// An empty field shows its placeholder, dimmed. A focused field draws an
/// inverse-video cursor at the input's cursor position.
pub fn text_field_line<'a>(
    input: &'a Input,
    is_focused: bool,
    placeholder: &'a str,
    theme: &Theme,
) -> Line<'a> {
    let value = input.value();
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    if value.is_empty() {
        let placeholder_span = Span::styled(placeholder, Style::default().fg(theme.dimmed));
        return if is_focused {
            Line::from(vec![Span::styled(" ", cursor_style), placeholder_span])
        } else {
            Line::from(placeholder_span)
        };
    }

    if !is_focused {
        return Line::from(Span::styled(value, value_style));
    }

    let cursor_pos = input.visual_cursor();
    let before: String = value.chars().take(cursor_pos).collect();
    let at: String = value
        .chars()
        .nth(cursor_pos)
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(at, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }
    Line::from(spans)
}

pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    is_focused: bool,
    placeholder: &str,
    theme: &Theme,
) {
    let line = text_field_line(input, is_focused, placeholder, theme);
    frame.render_widget(Paragraph::new(line), area);
}
