//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use crate::config::paths::ShellPaths;
use crate::config::settings::Settings;
use crate::site::{MailingList, ProfileFileIdentity, Subscriber};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode, alternate screen and mouse reporting
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, paths: &ShellPaths) -> Result<()> {
    let identity = ProfileFileIdentity::load_or_signed_out(settings.profile_file(paths));
    let subscriber: Arc<dyn Subscriber> = Arc::new(MailingList::new());

    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    let mut app = App::new(settings, Box::new(identity), Some(subscriber))?
        .with_event_sender(events.sender());

    // Initialize terminal
    let mut terminal = init_terminal()?;
    app.mount();
    info!("Shell started");

    // Main event loop
    let result = loop {
        if let Err(e) = terminal.draw(|frame| super::views::render(frame, &mut app)) {
            break Err(e.into());
        }

        let event = match events.next() {
            Ok(event) => event,
            Err(e) => break Err(e.into()),
        };
        if let Err(e) = handle_event(&mut app, event) {
            break Err(e);
        }

        // Check if we should quit
        if app.should_quit {
            break Ok(());
        }
    };

    app.unmount();
    info!("Shell stopped");

    // Restore terminal
    restore_terminal()?;

    result
}
