//! Title bar and call statistics.

use crate::state::App;
use crate::widgets::StatTile;
use callboard_core::CallStats;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Call Management Agent";

pub fn render_title(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   [n] Simulate Incoming Call", Style::default().fg(theme.text_dim)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_stats(f: &mut Frame<'_>, app: &App, stats: &CallStats, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let tiles = [
        ("Total Calls", stats.total, theme.secondary),
        ("Completed", stats.completed, theme.success),
        ("Missed", stats.missed, theme.error),
        ("Scheduled", stats.scheduled, theme.scheduled),
    ];
    for ((label, value, color), chunk) in tiles.into_iter().zip(chunks.iter()) {
        StatTile {
            label,
            value,
            value_style: Style::default().fg(color),
            label_style: Style::default().fg(theme.text_dim),
            border_style: Style::default().fg(theme.border),
        }
        .render(f, *chunk);
    }
}
