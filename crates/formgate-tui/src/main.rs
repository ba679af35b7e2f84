//! Formgate TUI - confirmation-gated registration in the terminal
//!
//! Hosts the confirmation gate behind a small registration form. Submitting
//! the form opens a blocking modal dialog; the registration is written to
//! the log only when the dialog is answered affirmatively.

use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod confirm;
mod ui;

use app::App;

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive("formgate_tui=info".parse()?))
        .init();

    let result = run_app();

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Main application runner
fn run_app() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Restore terminal even when the event loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
