use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::store::Store;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tui_logger::{init_logger, set_default_level};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    store: Store,
}

impl App {
    /// Start a new application over the given store. Returns the result
    /// of the application execution; the store handle is released when
    /// this scope ends, on every exit path.
    ///
    pub fn start(store: Store) -> Result<()> {
        init_logger(LevelFilter::Info)?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let mut app = App {
            state: State::new(),
            store,
        };
        app.state.show_menu(&app.store)?;
        app.run_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting
    /// the render loop on the main thread. Return the result following an
    /// exit request or unrecoverable error.
    ///
    fn run_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state, &self.store)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
