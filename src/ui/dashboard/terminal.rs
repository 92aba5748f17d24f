use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{DashError, Result};

pub type DashTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen, mouse-capturing terminal.
///
/// The terminal is restored when the session is dropped, and also by a panic
/// hook installed on entry.
pub struct TerminalSession {
    terminal: DashTerminal,
}

impl TerminalSession {
    /// Take over the terminal. On failure, whatever was already enabled is undone.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| setup_failed("enable raw mode", e))?;

        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(setup_failed("enter alternate screen", e));
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(setup_failed("create terminal", e));
            }
        };

        if let Err(e) = terminal.hide_cursor() {
            restore();
            return Err(setup_failed("hide cursor", e));
        }

        install_panic_hook();
        log::info!("Terminal session started");

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut DashTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        log::info!("Terminal restored");
    }
}

/// Best-effort terminal restoration; safe to call more than once.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    );
}

fn setup_failed(step: &str, err: io::Error) -> DashError {
    DashError::terminal(format!("Failed to {}: {}", step, err))
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}
