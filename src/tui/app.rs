use super::{
    app_state::{AppState, Mode},
    ui::centered_rect,
    widgets::{add_button, category_picker, key_hints, sections},
};
use crate::model::Model;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::{Constraint, Direction, Layout},
    Frame,
};
use tracing::debug;

const ADD_BUTTON_WIDTH: u16 = 16;

/// Manages the UI state and data model
pub struct App<'a> {
    pub model: &'a mut Model,
    pub state: AppState,
}

impl<'a> App<'a> {
    pub fn new(model: &'a mut Model) -> Self {
        let mut state = AppState::default();
        state.input.set_value(model.pending_item_text());
        Self { model, state }
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(from = ?self.state.mode, to = ?mode, "focus changed");
        self.state.mode = mode;
    }

    /// Appends whatever has been typed to the selected section. Blank input is ignored.
    fn add_item(&mut self) {
        if !self.model.add_item() {
            return;
        }

        self.state.input.set_value(self.model.pending_item_text());
        let section = self.model.section(self.model.selected_category());
        self.state.sections.select_last_item(section);
    }

    fn cycle_category(&mut self, forward: bool) {
        let current = self.model.selected_category();
        let category = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.model.update_selected_category(category);
    }

    /// Manages how the whole app reacts to an individual user keypress.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            self.set_mode(Mode::Exiting);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.set_mode(self.state.mode.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_mode(self.state.mode.previous());
                return;
            }
            _ => {}
        }

        match self.state.mode {
            Mode::EditingItem => match key.code {
                KeyCode::Enter => self.add_item(),
                _ => {
                    if self.state.input.handle_event(&Event::Key(key)) {
                        self.model.update_input_text(self.state.input.value());
                    }
                }
            },
            Mode::SelectingCategory => match key.code {
                KeyCode::Left | KeyCode::Up => self.cycle_category(false),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => self.cycle_category(true),
                KeyCode::Enter => self.add_item(),
                KeyCode::Char('q') => self.set_mode(Mode::Exiting),
                _ => {}
            },
            Mode::FocusingAddButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.add_item(),
                KeyCode::Char('q') => self.set_mode(Mode::Exiting),
                _ => {}
            },
            Mode::BrowsingItems => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Home => {
                    self.state.sections.handle_key(key, self.model.sections());
                }
                KeyCode::Char('q') => self.set_mode(Mode::Exiting),
                _ => {}
            },
            Mode::Exiting => {}
        }
    }

    /// Renders the app state into a terminal frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Max(1),
            ])
            .split(frame.size());
        let input_area = layout[0];
        let category_area = layout[1];
        let button_area = centered_rect(layout[2], ADD_BUTTON_WIDTH, 3, None);
        let list_area = layout[3];
        let bottom_panel = layout[4];

        let mode = self.state.mode;

        let input = self.state.input.clone().focused(mode == Mode::EditingItem);
        frame.render_widget(input, input_area);

        frame.render_widget(
            category_picker::Widget::new(
                self.model.selected_category(),
                mode == Mode::SelectingCategory,
            ),
            category_area,
        );

        frame.render_widget(
            add_button::Widget::new(mode == Mode::FocusingAddButton),
            button_area,
        );

        frame.render_stateful_widget(
            sections::Widget::new(self.model.sections(), mode == Mode::BrowsingItems),
            list_area,
            &mut self.state.sections,
        );

        frame.render_widget(key_hints::Widget::new(mode), bottom_panel);

        if mode == Mode::EditingItem {
            let (x, y) = self.state.input.cursor_position(input_area);
            frame.set_cursor(x, y);
        }
    }
}
