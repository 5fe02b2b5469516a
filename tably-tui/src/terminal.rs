//! Terminal management
//!
//! Handles terminal setup, teardown, and restoration.
//! Ensures the terminal is restored even on panic.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Setup terminal for TUI rendering: raw mode plus alternate screen
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore terminal to normal mode
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;

    Ok(())
}

/// Install panic hook to restore the terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
