use self::{app::App, app_state::Mode};
use crate::model::Model;
use anyhow::Result;
use crossterm::{
    event::{self, poll, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::{debug, info};

pub mod app;
pub mod app_state;
mod ui;
pub mod widgets;

/// Runs the form until the user quits, leaving the final state in `model`.
///
/// # Errors
/// Returns an error if something goes wrong during the TUI setup, execution, or teardown.
pub fn run(model: &mut Model) -> Result<()> {
    install_panic_hook();

    let mut app = App::new(model);
    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let result = run_main_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    info!("terminal restored");

    result
}

/// Puts the terminal back into a usable state before a panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// # Errors
/// Returns an error if something goes wrong during the TUI setup.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// # Errors
/// Returns an error if something goes wrong during the TUI teardown.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// # Errors
/// Returns an error if something goes wrong during the TUI execution.
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> Result<()> {
    loop {
        // render
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // process input
        if poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if app.state.mode == Mode::Exiting {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
    }
}
