//! Terminal lifecycle.
//!
//! [`TerminalGuard`] owns raw mode, the alternate screen and bracketed paste
//! for as long as it lives. Release happens exactly once: through
//! [`TerminalGuard::restore`], on drop, or from the panic hook, whichever
//! comes first.

use std::{
    io::{self, IsTerminal, Stdout},
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, warn};

use crate::tui::{
    event::{EventHandler, TuiEvent},
    Session,
};

/// Set while the terminal is in TUI mode.
static ACTIVE: AtomicBool = AtomicBool::new(false);

static PANIC_HOOK: Once = Once::new();

/// Leave TUI mode if it is active. Returns `Ok(false)` if there was nothing to do.
fn release() -> io::Result<bool> {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(false);
    }
    // Try every step even if an earlier one fails
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    raw.and(screen).map(|()| true)
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = release();
            original_hook(panic_info);
        }));
    });
}

/// Exclusive handle on the real terminal.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter TUI mode.
    ///
    /// Fails if stdin/stdout are not a terminal or another guard is alive.
    pub fn new() -> Result<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            anyhow::bail!("Cannot start form: stdin/stdout is not a terminal");
        }
        if ACTIVE.swap(true, Ordering::SeqCst) {
            anyhow::bail!("Cannot start form: a terminal session is already active");
        }

        install_panic_hook();

        let terminal = match Self::enter() {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = release();
                return Err(err);
            }
        };

        debug!("terminal acquired");
        Ok(Self { terminal })
    }

    fn enter() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("Failed to enter alternate screen")?;
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to initialize terminal")
    }

    /// Access the underlying ratatui terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leave TUI mode now and report any failure.
    ///
    /// Calling it again, or dropping the guard afterwards, does nothing.
    pub fn restore(&mut self) -> Result<()> {
        if release().context("Failed to restore terminal")? {
            debug!("terminal restored");
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("{err:#}");
        }
    }
}

/// The interactive session used by [`Form::run`](crate::form::Form::run).
pub struct TerminalSession {
    guard: TerminalGuard,
    events: EventHandler,
}

impl TerminalSession {
    /// Take over the terminal for one form run.
    pub fn acquire() -> Result<Self> {
        Ok(Self {
            guard: TerminalGuard::new()?,
            events: EventHandler,
        })
    }

    /// Release the terminal explicitly, surfacing restore errors that a
    /// plain drop would only log.
    pub fn close(mut self) -> Result<()> {
        self.guard.restore()
    }
}

impl Session for TerminalSession {
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> Result<()> {
        self.guard
            .terminal()
            .draw(|frame| render(frame))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<TuiEvent> {
        self.events.next()
    }
}
