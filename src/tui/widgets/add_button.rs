use ratatui::{
    layout::Alignment,
    prelude::{Buffer, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget as RatatuiWidget},
};

const LABEL: &str = "Add Item";

#[derive(Debug)]
pub struct Widget {
    focused: bool,
}

impl Widget {
    #[must_use]
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }
}

impl RatatuiWidget for Widget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_color, label_style) = if self.focused {
            (
                Color::Yellow,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            (Color::Gray, Style::default().add_modifier(Modifier::BOLD))
        };

        Paragraph::new(Span::styled(LABEL, label_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .render(area, buf);
    }
}
