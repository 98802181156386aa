//! Headless session.
//!
//! [`ScriptedSession`] renders into an in-memory buffer and replays a fixed
//! list of events, so forms can be exercised without a terminal.

use std::{cell::Cell, collections::VecDeque, rc::Rc};

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Cell as BufferCell, Frame, Terminal};

use crate::tui::{event::TuiEvent, Session};

/// Counts how many times a [`ScriptedSession`] has been released.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCounter(Rc<Cell<usize>>);

impl ReleaseCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Session backed by ratatui's `TestBackend` and a queue of events.
///
/// Running out of events is an error, which makes an incomplete script
/// fail loudly instead of hanging.
pub struct ScriptedSession {
    terminal: Terminal<TestBackend>,
    events: VecDeque<TuiEvent>,
    frames: usize,
    releases: ReleaseCounter,
}

impl ScriptedSession {
    /// An 80x24 session replaying `events`.
    pub fn new(events: impl IntoIterator<Item = TuiEvent>) -> Result<Self> {
        Self::with_size(80, 24, events)
    }

    pub fn with_size(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = TuiEvent>,
    ) -> Result<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .context("Failed to create test terminal")?;
        Ok(Self {
            terminal,
            events: events.into_iter().collect(),
            frames: 0,
            releases: ReleaseCounter::default(),
        })
    }

    /// Handle that keeps counting after the session is dropped.
    pub fn release_counter(&self) -> ReleaseCounter {
        self.releases.clone()
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Number of frames drawn so far.
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Text of the last drawn frame, one line per row, trailing spaces trimmed.
    pub fn screen(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                let line: String = (area.left()..area.right())
                    .map(|x| buffer.cell((x, y)).map_or(" ", BufferCell::symbol))
                    .collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Session for ScriptedSession {
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(|frame| render(frame))
            .context("Failed to draw frame")?;
        self.frames += 1;
        Ok(())
    }

    fn next_event(&mut self) -> Result<TuiEvent> {
        self.events
            .pop_front()
            .context("Scripted session ran out of events")
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        let count = &self.releases.0;
        count.set(count.get() + 1);
    }
}

/// A plain key press.
pub fn key(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A `Ctrl+<c>` key press.
pub fn ctrl(c: char) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// One key press per character of `text`.
pub fn typed(text: &str) -> Vec<TuiEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// A bracketed paste.
pub fn paste(text: &str) -> TuiEvent {
    TuiEvent::Paste(text.to_string())
}
