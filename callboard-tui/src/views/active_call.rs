//! Live panel for the connected call.

use crate::state::App;
use callboard_core::{format_duration, Call};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the panel needs, borders included.
pub const HEIGHT: u16 = 4;

pub fn render(f: &mut Frame<'_>, app: &App, call: &Call, area: Rect) {
    let theme = &app.theme;
    let elapsed = format_duration(app.store.timer().elapsed());
    let lines = vec![
        Line::from(vec![
            Span::styled(
                call.caller.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", call.phone), Style::default().fg(theme.text_dim)),
        ]),
        Line::from(vec![
            Span::styled(
                elapsed,
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [e] End Call", Style::default().fg(theme.error)),
        ]),
    ];
    let block = Block::default()
        .title("Active Call")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
