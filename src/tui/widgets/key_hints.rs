use crate::tui::app_state::Mode;
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget as RatatuiWidget},
};

pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    fn new<S: Into<String>>(key: S, action: S) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    #[must_use]
    pub fn from_mode(mode: Mode) -> Vec<KeyHint> {
        match mode {
            Mode::EditingItem => vec![
                Self::new("enter", "add item"),
                Self::new("tab", "change focus"),
                Self::new("esc", "quit"),
            ],
            Mode::SelectingCategory => vec![
                Self::new("←→", "choose category"),
                Self::new("enter", "add item"),
                Self::new("tab", "change focus"),
                Self::new("q", "quit"),
            ],
            Mode::FocusingAddButton => vec![
                Self::new("enter", "add item"),
                Self::new("tab", "change focus"),
                Self::new("q", "quit"),
            ],
            Mode::BrowsingItems => vec![
                Self::new("↑↓", "scroll"),
                Self::new("tab", "change focus"),
                Self::new("q", "quit"),
            ],
            Mode::Exiting => vec![],
        }
    }
}

impl<'a> From<KeyHint> for Vec<Span<'a>> {
    fn from(hint: KeyHint) -> Self {
        let hint_style = Style::default();
        vec![
            Span::styled(hint.key, hint_style.add_modifier(Modifier::BOLD)),
            Span::styled(": ", hint_style),
            Span::styled(hint.action, hint_style.fg(Color::Gray)),
            Span::raw("  "),
        ]
    }
}

#[derive(Debug)]
pub struct Widget {
    mode: Mode,
}

impl Widget {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

impl RatatuiWidget for Widget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_hint_line: Line = Line::from(
            KeyHint::from_mode(self.mode)
                .into_iter()
                .flat_map(Into::<Vec<Span>>::into)
                .collect::<Vec<Span>>(),
        );
        Paragraph::new(key_hint_line).render(area, buf);
    }
}
