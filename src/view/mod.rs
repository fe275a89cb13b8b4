//! TUI rendering and event handling (impure shell)

pub mod constants;
mod layout;
mod pagination;
mod search_bar;
mod styles;
mod table;

pub use layout::render_layout;
pub use pagination::PaginationFooter;
pub use search_bar::SearchBar;
pub use styles::{ColorConfig, TableStyles};
pub use table::TableView;

use crate::config::KeyBindings;
use crate::model::{AppError, ViewError};
use crate::state::{AppState, InputMode};
use constants::EVENT_POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The table view rejected a request
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: TableStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = setup_or_restore(enter_alternate_screen, || {
            let _ = io::stdout().execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        let interval = Duration::from_millis(EVENT_POLL_INTERVAL_MS);

        self.draw()?;

        loop {
            if !event::poll(interval)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key)? {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an existing terminal. Used by tests with `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: TableStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        // Ctrl+C quits even while typing a search term
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        let result = match (self.app_state.mode, key.code) {
            (InputMode::Search, KeyCode::Char(ch))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.app_state.push_search_char(ch)
            }
            (InputMode::Search, KeyCode::Backspace) => self.app_state.pop_search_char(),
            (InputMode::Search, KeyCode::Enter | KeyCode::Esc) | (InputMode::Browse, _) => {
                match self.key_bindings.get(key) {
                    Some(action) => self.app_state.handle_action(action),
                    None => Ok(()),
                }
            }
            (InputMode::Search, _) => Ok(()),
        };

        match result {
            Ok(()) => {}
            // The state is unchanged on a rejected action; keep the console running
            Err(e @ ViewError::InvalidArgument { .. }) => {
                warn!(error = %e, "Ignoring rejected action");
                self.app_state.status_message = Some(e.to_string());
            }
            Err(e) => return Err(e.into()),
        }

        Ok(self.app_state.should_quit)
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, styles))?;
        Ok(())
    }

    #[cfg(test)]
    fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, styles: TableStyles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `setup`, calling `restore` before passing on its error.
///
/// Raw mode is already on when the rest of the terminal is set up, and a failure there
/// must not leave the shell in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    let result = setup();
    if let Err(e) = &result {
        warn!(error = %e, "Terminal setup failed, restoring terminal");
        restore();
    }
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
