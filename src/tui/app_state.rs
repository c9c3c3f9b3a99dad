use super::widgets::{item_input::ItemInput, sections};

/// Which control has focus, or whether the app is shutting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    EditingItem,
    SelectingCategory,
    FocusingAddButton,
    BrowsingItems,
    Exiting,
}

impl Mode {
    /// The control that Tab moves focus to.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Mode::EditingItem => Mode::SelectingCategory,
            Mode::SelectingCategory => Mode::FocusingAddButton,
            Mode::FocusingAddButton => Mode::BrowsingItems,
            Mode::BrowsingItems => Mode::EditingItem,
            Mode::Exiting => Mode::Exiting,
        }
    }

    /// The control that Shift+Tab moves focus to.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Mode::EditingItem => Mode::BrowsingItems,
            Mode::SelectingCategory => Mode::EditingItem,
            Mode::FocusingAddButton => Mode::SelectingCategory,
            Mode::BrowsingItems => Mode::FocusingAddButton,
            Mode::Exiting => Mode::Exiting,
        }
    }
}

pub struct AppState {
    pub mode: Mode,
    pub input: ItemInput,
    pub sections: sections::State,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::EditingItem,
            input: ItemInput::default(),
            sections: sections::State::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_control() {
        let mut mode = Mode::EditingItem;
        let mut visited = vec![];
        for _ in 0..4 {
            mode = mode.next();
            visited.push(mode);
        }

        assert_eq!(
            visited,
            vec![
                Mode::SelectingCategory,
                Mode::FocusingAddButton,
                Mode::BrowsingItems,
                Mode::EditingItem
            ]
        );
        for mode in visited {
            assert_eq!(mode.next().previous(), mode);
        }
    }
}
