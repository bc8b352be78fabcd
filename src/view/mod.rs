//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod layout;
pub mod page;
mod sections;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{page_areas, render_layout, PageAreas};
pub use page::{build_page, wrap_words, PageView};
pub use styles::{ColorConfig, Theme};

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::AppState;
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Rendering options resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Styles for every widget.
    pub theme: Theme,
    /// Longest wait for input before engines are ticked again.
    pub frame_interval: Duration,
}

impl ViewOptions {
    /// Bundle a theme and frame interval.
    pub fn new(theme: Theme, frame_interval: Duration) -> Self {
        Self {
            theme,
            frame_interval,
        }
    }
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
    options: ViewOptions,
    year: i32,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and wrap `app_state`.
    pub fn new(app_state: AppState, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, app_state, options))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already prepared terminal.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, options: ViewOptions) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            options,
            year: chrono::Local::now().year(),
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Waits up to one frame interval for input, then ticks every engine;
    /// redraws only when input arrived or an engine reported a change.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(self.options.frame_interval)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.app_state.tick(Instant::now()) {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if app should quit.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            info!("Quit requested");
            self.app_state.dispose();
            return true;
        }

        self.app_state.apply_action(action, now);
        false
    }

    /// Render the current frame
    ///
    /// Builds the page for the current terminal size, feeds the measured
    /// layout back to the state, then draws.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);

        let lines = if self.app_state.is_loading() {
            Vec::new()
        } else {
            let areas = page_areas(frame_area);
            let page = build_page(
                &self.app_state,
                &self.options.theme,
                areas.content.width,
                areas.content.height,
                self.year,
            );
            self.app_state
                .set_layout(page.layout, areas.content.height, Instant::now());
            page.lines
        };

        let theme = self.options.theme;
        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state, &theme, lines);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key, Instant::now())
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, options: ViewOptions) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(app_state, options) {
        Ok(app) => app,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

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
