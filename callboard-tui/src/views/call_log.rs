//! Filtered call history with a detail panel for the selection.

use crate::nav::FilterNav;
use crate::state::{App, InputMode};
use crate::theme::{call_status_color, call_status_symbol, priority_color};
use crate::views::two_column;
use crate::widgets::{DetailPanel, FilterBar, FilterOption};
use callboard_core::{format_duration, format_timestamp, Call, CallStatus, Projection, StatusFilter};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "No calls found matching your criteria";

pub fn render_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let filters: Vec<FilterOption> = StatusFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| FilterOption {
            label: filter.title().to_string(),
            hotkey: char::from(b'1' + i as u8),
            active: *filter == app.query.filter,
        })
        .collect();

    FilterBar {
        filters: &filters,
        search: &app.query.search,
        search_focused: app.input_mode == InputMode::Search,
        active_style: Style::default().fg(theme.bg).bg(theme.primary),
        inactive_style: Style::default().fg(theme.text_dim),
        border_style: Style::default().fg(theme.border),
        focus_style: Style::default().fg(theme.border_focus),
    }
    .render(f, area);
}

pub fn render(f: &mut Frame<'_>, app: &App, projection: &Projection<'_>, area: Rect) {
    let theme = &app.theme;
    let title = format!("Call History ({})", projection.len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme.primary)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if projection.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let (list_area, detail_area) = two_column(area, 60);

    let items: Vec<ListItem> = projection
        .calls
        .iter()
        .map(|call| ListItem::new(call_line(app, call)))
        .collect();

    let mut state = ListState::default();
    state.select(app.selected_index());

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, list_area, &mut state);

    render_detail(f, app, app.selected_call(), detail_area);
}

fn call_line<'a>(app: &App, call: &'a Call) -> Line<'a> {
    let theme = &app.theme;
    let status_style = Style::default().fg(call_status_color(call.status, theme));
    let mut spans = vec![
        Span::styled(format!("{} ", call_status_symbol(call.status)), status_style),
        Span::styled(call.caller.as_str(), Style::default().fg(theme.text)),
        Span::styled(format!("  {}", call.phone), Style::default().fg(theme.text_dim)),
        Span::styled(format!("  {}", call.status), status_style),
        Span::styled(
            format!("  {}", call.priority),
            Style::default().fg(priority_color(call.priority, theme)),
        ),
    ];
    if let Some(duration) = call.duration {
        spans.push(Span::styled(
            format!("  {}", format_duration(duration)),
            Style::default().fg(theme.text_dim),
        ));
    }
    Line::from(spans)
}

fn render_detail(f: &mut Frame<'_>, app: &App, call: Option<&Call>, area: Rect) {
    let theme = &app.theme;
    let mut panel = DetailPanel::new("Details");
    panel.label_style = Style::default().fg(theme.secondary);
    panel.border_style = Style::default().fg(theme.border);
    panel.placeholder = "No call selected";

    if let Some(call) = call {
        panel = panel
            .field("Caller", call.caller.clone())
            .field("Phone", call.phone.clone())
            .field(
                "Status",
                Span::styled(
                    call.status.to_string(),
                    Style::default().fg(call_status_color(call.status, theme)),
                ),
            )
            .field(
                "Priority",
                Span::styled(
                    call.priority.to_string(),
                    Style::default().fg(priority_color(call.priority, theme)),
                ),
            )
            .field("Time", format_timestamp(&call.timestamp));

        match (call.status, call.duration) {
            (CallStatus::Active, _) => {
                panel = panel.field("Duration", format_duration(app.store.timer().elapsed()));
            }
            (_, Some(duration)) => panel = panel.field("Duration", format_duration(duration)),
            _ => {}
        }
        if let Some(notes) = &call.notes {
            panel = panel.field("Notes", notes.clone());
        }
        if call.status == CallStatus::Incoming {
            panel = panel.field(
                "Actions",
                Span::styled("[a] Answer  [r] Reject", Style::default().fg(theme.warning)),
            );
        }
    }

    panel.render(f, area);
}
