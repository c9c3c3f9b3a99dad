#[cfg(test)]
pub use assert_fs_wrapper::FsMockBuilder;

#[cfg(test)]
mod assert_fs_wrapper {
    use anyhow::Result;
    use assert_fs::{
        prelude::{FileTouch, FileWriteStr, PathChild},
        TempDir,
    };
    use std::{fmt::Display, path::Path};

    pub struct FsMockBuilder {
        mock_dir: TempDir,
    }

    impl FsMockBuilder {
        /// # Errors
        ///
        /// Returns an error if the mock directory cannot be created.
        pub fn new() -> Result<Self> {
            let mock_dir = TempDir::new()?;
            Ok(FsMockBuilder { mock_dir })
        }

        /// # Errors
        ///
        /// Returns an error if the mock directory cannot be written to.
        pub fn mock_file_contents<T>(self, path: &str, contents: T) -> Result<Self>
        where
            T: Display,
        {
            let mock_path = self.mock_dir.child(path);
            mock_path.touch()?;
            mock_path.write_str(contents.to_string().as_str())?;
            Ok(self)
        }

        #[must_use]
        pub fn path(&self) -> &Path {
            self.mock_dir.path()
        }
    }
}

#[cfg(test)]
pub use tui_tester::TuiTester;

#[cfg(test)]
mod tui_tester {
    use anyhow::Result;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use produce_list::tui::{app::App, app_state::Mode};
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};
    use std::fmt::Write;

    pub struct TuiTester<'a> {
        terminal: Terminal<TestBackend>,
        app: App<'a>,
    }

    impl<'a> TuiTester<'a> {
        /// Make a new tester.
        ///
        /// # Errors
        /// Returns an error if the test terminal cannot be initialized.
        pub fn new(app: App<'a>, width: u16, height: u16) -> Result<Self> {
            let terminal = Terminal::new(TestBackend::new(width, height))?;
            Ok(Self { terminal, app })
        }

        /// Renders the buffer and asserts that the given string is visible.
        ///
        /// # Panics
        /// If `needle` cannot be found in the current buffer.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        ///
        /// # Note
        /// This currently fails to find strings that are broken up by line breaks
        pub fn expect_visible(&mut self, needle: &str) -> Result<&mut Self> {
            let screen = self.render_to_string()?;
            assert!(
                screen.contains(needle),
                "The string '{needle}' was not found on this screen:\n{screen}"
            );
            Ok(self)
        }

        /// Renders the buffer and asserts that the given string is *not* visible.
        ///
        /// # Panics
        /// If `needle` is present be found in the current buffer.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        pub fn expect_not_visible(&mut self, needle: &str) -> Result<&mut Self> {
            let screen = self.render_to_string()?;
            assert!(
                !screen.contains(needle),
                "The string '{needle}' was not expected on this screen:\n{screen}"
            );
            Ok(self)
        }

        /// Renders the buffer and asserts that `first` appears on a line above `second`.
        ///
        /// # Panics
        /// If either string is missing or they are in the wrong order.
        ///
        /// # Errors
        /// If something goes wrong while drawing to the screen.
        pub fn expect_above(&mut self, first: &str, second: &str) -> Result<&mut Self> {
            let screen = self.render_to_string()?;
            let line_of = |needle: &str| {
                screen
                    .lines()
                    .position(|line| line.contains(needle))
                    .unwrap_or_else(|| panic!("'{needle}' not found on this screen:\n{screen}"))
            };
            assert!(
                line_of(first) < line_of(second),
                "Expected '{first}' above '{second}' on this screen:\n{screen}"
            );
            Ok(self)
        }

        fn render_to_string(&mut self) -> Result<String> {
            self.terminal.draw(|frame| {
                self.app.render(frame);
            })?;
            let width = self.terminal.backend().buffer().area.width as usize;

            let screen = self
                .terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .enumerate()
                .fold(String::new(), |mut string, (index, cell)| {
                    let _ = write!(string, "{}", Cell::symbol(cell));
                    if (index + 1) % width == 0 {
                        let _ = writeln!(string);
                    }
                    string
                });
            Ok(screen)
        }

        /// Assert that the app has focus on a given control (or is exiting).
        ///
        /// # Panics
        /// If it doesn't.
        pub fn expect_mode(&mut self, mode: Mode) -> &mut Self {
            assert_eq!(self.app.state.mode, mode);
            self
        }

        /// Assert that the app is in an exiting state.
        ///
        /// # Panics
        /// If it isn't.
        pub fn expect_exiting(&self) {
            assert_eq!(self.app.state.mode, Mode::Exiting);
        }

        /// Sends the characters in the given string as individual keypresses to the app.
        /// Note that this does not render the app in between keypresses.
        pub fn type_string(&mut self, keys: &str) -> &mut Self {
            keys.chars().for_each(|c| {
                self.app
                    .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            });
            self
        }

        /// Sends a single key press to the app.
        pub fn type_key(&mut self, key: KeyCode) -> &mut Self {
            self.app.handle_key(KeyEvent::new(key, KeyModifiers::NONE));
            self
        }

        /// Sends a single key press with modifiers to the app.
        pub fn type_key_with(&mut self, key: KeyCode, modifiers: KeyModifiers) -> &mut Self {
            self.app.handle_key(KeyEvent::new(key, modifiers));
            self
        }
    }
}
