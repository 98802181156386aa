//! Terminal events.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to a [`TuiApp`](super::TuiApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resized; the next frame redraws at the new size
    Resize(u16, u16),
}

/// Blocking reader over crossterm's event queue.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Wait for the next relevant event.
    ///
    /// Key releases and repeats (reported on some platforms), mouse and focus
    /// events are skipped.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key));
                }
                Event::Paste(content) => return Ok(TuiEvent::Paste(content)),
                Event::Resize(width, height) => return Ok(TuiEvent::Resize(width, height)),
                _ => {}
            }
        }
    }
}
