//! Terminal lifecycle management.
//!
//! Terminal state is restored on normal exit, on error, and on panic.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Terminal type used by the slide viewer.
pub type SlideTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Sets up the terminal for the viewer.
///
/// - Enables raw mode
/// - Enters alternate screen
/// - Hides the cursor
///
/// Call `install_panic_hook()` before this to ensure terminal restore on panic.
pub fn setup_terminal() -> Result<SlideTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    Ok(terminal)
}

/// Restores terminal state.
///
/// Idempotent; safe to call from the panic hook and again on exit.
pub fn restore_terminal() -> Result<()> {
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )
    .context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
