//! Keyboard shortcut overlay

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::dialogs::centered_rect;
use crate::tui::styles::Theme;

const KEY_WIDTH: usize = 10;
const OVERLAY_WIDTH: u16 = 40;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    (
        "Tasks",
        &[
            ("i a n", "Type a new task"),
            ("Enter", "Add it (while typing)"),
            ("Esc", "Stop typing"),
            ("Space x", "Toggle completed"),
            ("p / c", "Mark pending / completed"),
            ("d Del", "Delete task"),
        ],
    ),
    (
        "Moving",
        &[
            ("j k", "Down / up"),
            ("PgDn PgUp", "Ten rows"),
            ("g G", "First / last"),
        ],
    ),
    (
        "App",
        &[("r F5", "Reload file"), ("?", "Close help"), ("q", "Quit")],
    ),
];

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, (title, keys)) in SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(*title, Style::default().fg(theme.accent).bold()));
        lines.extend(keys.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", key, width = KEY_WIDTH),
                    Style::default().fg(theme.pending),
                ),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        }));
    }
    lines
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = help_lines(theme);
        let height = lines.len() as u16 + 2;
        let rect = centered_rect(area, OVERLAY_WIDTH, height);

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.accent))
            .title(" Shortcuts ")
            .title_style(Style::default().fg(theme.title).bold())
            .style(Style::default().bg(theme.background));

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
