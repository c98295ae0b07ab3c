//! Stat tile widget for the dashboard header.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatTile<'a> {
    pub label: &'a str,
    pub value: usize,
    pub value_style: Style,
    pub label_style: Style,
    pub border_style: Style,
}

impl<'a> StatTile<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.value.to_string(),
                self.value_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.label, self.label_style)),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
