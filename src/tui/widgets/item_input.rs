use crossterm::event::Event;
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_input::{backend::crossterm::EventHandler, Input};

const PLACEHOLDER: &str = "Enter an item";

/// The single-line text field the next item is typed into.
#[derive(Debug, Default, Clone)]
pub struct ItemInput {
    input: Input,
    focused: bool,
}

impl ItemInput {
    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replaces the field's contents, leaving the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }

    /// Feeds a terminal event to the field. Returns `true` if its contents changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|change| change.value)
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let input_scroll = self.input.visual_scroll(inner_width(area));
        #[allow(clippy::cast_possible_truncation)]
        (
            area.x + (self.input.visual_cursor().max(input_scroll) - input_scroll) as u16 + 1,
            area.y + 1,
        )
    }
}

fn inner_width(area: Rect) -> usize {
    area.width.saturating_sub(2) as usize
}

impl Widget for ItemInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("New Item")
            .border_style(Style::default().fg(if self.focused {
                Color::Yellow
            } else {
                Color::Gray
            }))
            .borders(Borders::ALL);

        if self.input.value().is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        // figure the right amount to scroll the input by
        let input_scroll = self.input.visual_scroll(inner_width(area));
        #[allow(clippy::cast_possible_truncation)]
        Paragraph::new(self.input.value())
            .scroll((0, input_scroll as u16))
            .block(block)
            .render(area, buf);
    }
}
