//! Filter bar widget: status tabs on the left, search box on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SEARCH_PLACEHOLDER: &str = "Search by name or phone...";

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    /// Digit key that selects this option.
    pub hotkey: char,
    pub active: bool,
}

pub struct FilterBar<'a> {
    pub filters: &'a [FilterOption],
    pub search: &'a str,
    pub search_focused: bool,
    pub active_style: Style,
    pub inactive_style: Style,
    pub border_style: Style,
    pub focus_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(36)])
            .split(area);

        let spans: Vec<Span> = self
            .filters
            .iter()
            .map(|filter| {
                let style = if filter.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {} {} ", filter.hotkey, filter.label), style)
            })
            .collect();
        let tabs = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Filter [Tab]")
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(tabs, chunks[0]);

        let (text, style) = match (self.search.is_empty(), self.search_focused) {
            (true, false) => (SEARCH_PLACEHOLDER.to_string(), self.inactive_style),
            (_, true) => (format!("{}▏", self.search), self.active_style),
            (false, false) => (self.search.to_string(), self.active_style),
        };
        let border = if self.search_focused {
            self.focus_style
        } else {
            self.border_style
        };
        let search = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .title("Search [/]")
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(search, chunks[1]);
    }
}
