//! Terminal lifecycle management.
//!
//! Terminal state is guaranteed to be restored on normal exit, panic, and
//! Ctrl+C (which arrives as a key event in raw mode and quits through the
//! reducer).

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal for the TUI.
///
/// Enables raw mode and bracketed paste, enters the alternate screen, and
/// creates the terminal instance. Call `install_panic_hook()` first so a
/// panic mid-setup still restores the terminal.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores terminal state.
///
/// Idempotent and safe to call multiple times; also called from the panic
/// hook, so it must not panic itself.
pub fn restore_terminal() -> Result<()> {
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the
/// panic message, so the message is readable instead of being swallowed by
/// the alternate screen.
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}
