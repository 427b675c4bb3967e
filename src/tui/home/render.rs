//! Rendering for the home view

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{HomeView, ToastKind, INPUT_PLACEHOLDER};
use crate::task::{Task, TaskStats};
use crate::tui::components::{render_text_field, HelpOverlay};
use crate::tui::styles::Theme;

const TITLE: &str = " Task Manager ✨ ";

impl HomeView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_input(frame, chunks[0], theme);
        self.render_list(frame, chunks[1], theme);
        render_stats(frame, chunks[2], &self.store.stats(), theme);
        self.render_status_bar(frame, chunks[3], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.editing {
            theme.accent
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(TITLE)
            .title_style(Style::default().fg(theme.title).bold())
            .title_bottom(Line::from(" Add a new task ").style(Style::default().fg(theme.hint)));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_text_field(
            frame,
            inner,
            &self.input,
            self.editing,
            INPUT_PLACEHOLDER,
            theme,
        );
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" 📋 Your Tasks ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("🎉 No tasks found! Add your first task above!")
                    .style(Style::default().fg(theme.dimmed)),
            ];
            frame.render_widget(
                Paragraph::new(empty_text).alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .store
            .list()
            .iter()
            .map(|task| task_item(task, theme))
            .collect();

        let highlight = if self.editing {
            Style::default()
        } else {
            Style::default().bg(theme.selection)
        };
        let list = List::new(items).highlight_style(highlight);

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(toast) = &self.toast {
            let (icon, color) = match toast.kind {
                ToastKind::Info => ("✓", theme.completed),
                ToastKind::Warning => ("⚠", theme.warning),
                ToastKind::Error => ("✕", theme.error),
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color).bold()),
                Span::styled(toast.message.as_str(), Style::default().fg(color)),
            ]);
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(theme.selection)),
                area,
            );
            return;
        }

        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let hints: &[(&str, &str)] = if self.editing {
            &[("Enter", "Add"), ("Esc", "Done typing")]
        } else {
            &[
                ("j/k", "Navigate"),
                ("i", "New"),
                ("Space", "Toggle"),
                ("d", "Delete"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans = Vec::new();
        for (idx, (key, desc)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection)),
            area,
        );
    }
}

fn task_item<'a>(task: &Task, theme: &Theme) -> ListItem<'a> {
    let (color, text_style) = if task.is_completed() {
        (
            theme.completed,
            Style::default()
                .fg(theme.dimmed)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (theme.pending, Style::default().fg(theme.text))
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", task.status.symbol()), Style::default().fg(color)),
        Span::styled(format!("{:<10}", task.status.label()), Style::default().fg(color).bold()),
        Span::styled(task.summary(), text_style),
    ]))
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &TaskStats, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(10)])
        .split(area);

    let number_style = Style::default().fg(theme.accent).bold();
    let label_style = Style::default().fg(theme.dimmed);
    let counts = Line::from(vec![
        Span::styled(" Total Tasks: ", label_style),
        Span::styled(stats.total.to_string(), number_style),
        Span::styled("  Completed: ", label_style),
        Span::styled(stats.completed.to_string(), number_style),
        Span::styled("  Progress: ", label_style),
        Span::styled(format!("{}%", stats.progress_percent()), number_style),
    ]);
    frame.render_widget(Paragraph::new(counts), chunks[0]);

    let gauge = LineGauge::default()
        .ratio(stats.progress)
        .label("")
        .filled_style(Style::default().fg(theme.completed))
        .unfilled_style(Style::default().fg(theme.border));
    frame.render_widget(gauge, chunks[1]);
}
