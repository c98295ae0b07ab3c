//! Detail panel widget for showing field/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    /// Label plus value; a value carries its own style when it has one.
    pub fields: Vec<(&'a str, Span<'a>)>,
    pub label_style: Style,
    pub border_style: Style,
    /// Shown instead of the fields when there are none.
    pub placeholder: &'a str,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            fields: Vec::new(),
            label_style: Style::default(),
            border_style: Style::default(),
            placeholder: "",
        }
    }

    pub fn field(mut self, label: &'a str, value: impl Into<Span<'a>>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    pub fn render(self, f: &mut Frame<'_>, area: Rect) {
        let text = if self.fields.is_empty() {
            Text::from(Line::from(Span::styled(self.placeholder, self.label_style)))
        } else {
            let label_style = self.label_style;
            Text::from(
                self.fields
                    .into_iter()
                    .map(|(label, value)| {
                        Line::from(vec![Span::styled(format!("{:<9}", label), label_style), value])
                    })
                    .collect::<Vec<_>>(),
            )
        };

        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
