//! Terminal User Interface module for tuiform.
//!
//! Provides the dialog event loop and the sessions it runs on.

pub mod event;
pub mod screens;
pub mod script;
pub mod terminal;
pub mod theme;
pub mod widgets;

use anyhow::Result;
use ratatui::Frame;

use crate::tui::event::TuiEvent;

/// Result of a TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// Application completed with a value
    Done(T),
    /// Application was cancelled by user
    Cancelled,
}

/// Trait for TUI applications.
///
/// Implement this trait to create interactive TUI screens.
pub trait TuiApp {
    /// The output type when the application completes.
    type Output;

    /// Handle an event and optionally return a result.
    ///
    /// Return `Some(AppResult)` to exit the application,
    /// or `None` to continue running.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Render the application to the frame.
    fn render(&mut self, frame: &mut Frame);
}

/// A drawable surface with an event source.
///
/// One session spans a whole form run. Releasing the underlying resource is
/// tied to dropping the session.
pub trait Session {
    /// Draw one frame.
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> Result<()>;

    /// Block until the next event.
    fn next_event(&mut self) -> Result<TuiEvent>;
}

impl<S: Session + ?Sized> Session for &mut S {
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame)) -> Result<()> {
        (**self).draw(render)
    }

    fn next_event(&mut self) -> Result<TuiEvent> {
        (**self).next_event()
    }
}

/// Run a TUI application to completion on an existing session.
///
/// Returns `Ok(Some(output))` if completed successfully,
/// `Ok(None)` if cancelled, or an error.
pub fn drive<S, A>(session: &mut S, app: &mut A) -> Result<Option<A::Output>>
where
    S: Session + ?Sized,
    A: TuiApp,
{
    loop {
        session.draw(&mut |frame| app.render(frame))?;

        let event = session.next_event()?;
        if let Some(result) = app.handle_event(&event) {
            return match result {
                AppResult::Done(output) => Ok(Some(output)),
                AppResult::Cancelled => Ok(None),
            };
        }
    }
}
