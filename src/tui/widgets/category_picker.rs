use crate::model::category::Category;
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget as RatatuiWidget},
};

/// A one-line selector listing every category, with the selected one marked.
#[derive(Debug)]
pub struct Widget {
    selected: Category,
    focused: bool,
}

impl Widget {
    #[must_use]
    pub fn new(selected: Category, focused: bool) -> Self {
        Self { selected, focused }
    }

    fn option_spans(&self, category: Category) -> Vec<Span<'static>> {
        if category == self.selected {
            let style = if self.focused {
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            vec![Span::styled(format!("● {category}"), style), Span::raw("   ")]
        } else {
            vec![
                Span::styled(format!("○ {category}"), Style::default().fg(Color::Gray)),
                Span::raw("   "),
            ]
        }
    }
}

impl RatatuiWidget for Widget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(
            Category::ALL
                .into_iter()
                .flat_map(|category| self.option_spans(category))
                .collect::<Vec<_>>(),
        );

        let block = Block::default()
            .title("Category")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if self.focused {
                Color::Yellow
            } else {
                Color::Gray
            }));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
