//! View rendering.
//!
//! The dashboard is a single screen, top to bottom: title, stat tiles, the
//! active call panel (only while a call is connected), the filter bar, the
//! call history and a footer for the latest notification.

pub mod active_call;
pub mod call_log;
pub mod header;
pub mod helpers;

pub use helpers::{centered_rect, two_column};

use crate::state::{App, InputMode};
use crate::theme::notification_color;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const FOOTER_HELP: &str =
    "n new • a answer • r reject • e end • j/k move • Tab filter • / search • ? help • q quit";
const SEARCH_HELP: &str = "Type to search • Enter keep • Esc clear";

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let projection = app.projection();
    let active = app.store.active_call();
    let active_height = if active.is_some() { active_call::HEIGHT } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(active_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    header::render_title(f, app, layout[0]);
    header::render_stats(f, app, &projection.stats, layout[1]);
    if let Some(call) = active {
        active_call::render(f, app, call, layout[2]);
    }
    call_log::render_filter_bar(f, app, layout[3]);
    call_log::render(f, app, &projection, layout[4]);
    render_footer(f, app, layout[5]);

    if app.modal.is_some() {
        let area = f.size();
        render_modal(f, app, area);
    }
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = match (app.input_mode, app.current_notification(Utc::now())) {
        (InputMode::Search, _) => (SEARCH_HELP.to_string(), Style::default().fg(app.theme.text_dim)),
        (InputMode::Normal, Some(note)) => (
            note.footer_text(),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        (InputMode::Normal, None) => (FOOTER_HELP.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(modal) = &app.modal else {
        return;
    };
    let rect = centered_rect(70, 7, area);
    let block = Block::default()
        .title(Span::styled(
            modal.title.as_str(),
            Style::default().fg(app.theme.primary),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus));
    let body = Paragraph::new(modal.message.as_str())
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(Clear, rect);
    f.render_widget(body, rect);
}
