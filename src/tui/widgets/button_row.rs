//! Two-button row (OK/Cancel, Yes/No).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Which button of a [`ButtonRow`] is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left button (OK / Yes)
    Accept,
    /// Right button (Cancel / No)
    Reject,
}

/// A pair of buttons; the left one accepts, the right one rejects.
#[derive(Debug, Clone)]
pub struct ButtonRow {
    accept: String,
    reject: String,
    selected: Button,
}

impl ButtonRow {
    pub fn new(accept: impl Into<String>, reject: impl Into<String>) -> Self {
        Self {
            accept: accept.into(),
            reject: reject.into(),
            selected: Button::Accept,
        }
    }

    /// OK / Cancel, with OK highlighted.
    pub fn ok_cancel() -> Self {
        Self::new("OK", "Cancel")
    }

    #[must_use]
    pub const fn with_selected(mut self, button: Button) -> Self {
        self.selected = button;
        self
    }

    pub const fn selected(&self) -> Button {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            Button::Accept => Button::Reject,
            Button::Reject => Button::Accept,
        };
    }

    /// Handle arrow navigation. Returns `true` if the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = Button::Accept;
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = Button::Reject;
                true
            }
            _ => false,
        }
    }

    /// Render the widget.
    ///
    /// When the row is not focused the selection is shown without color.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool, theme: &Theme) {
        let button = |label: &str, is_selected: bool, color: Color| {
            if is_selected {
                let style = if focused {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Span::styled(format!("[{label}]"), style)
            } else {
                Span::styled(format!(" {label} "), theme.dim())
            }
        };

        let line = Line::from(vec![
            Span::raw("  "),
            button(&self.accept, self.selected == Button::Accept, Color::Green),
            Span::raw("   "),
            button(&self.reject, self.selected == Button::Reject, Color::Red),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_is_accept() {
        assert_eq!(ButtonRow::ok_cancel().selected(), Button::Accept);
    }

    #[test]
    fn test_arrow_navigation() {
        let mut row = ButtonRow::new("Yes", "No");
        assert!(row.handle_key(key(KeyCode::Right)));
        assert_eq!(row.selected(), Button::Reject);
        assert!(row.handle_key(key(KeyCode::Left)));
        assert_eq!(row.selected(), Button::Accept);
        assert!(!row.handle_key(key(KeyCode::Up)));
    }

    #[test]
    fn test_toggle() {
        let mut row = ButtonRow::ok_cancel().with_selected(Button::Reject);
        row.toggle();
        assert_eq!(row.selected(), Button::Accept);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut row = ButtonRow::new("Yes", "No");
        row.toggle();
        assert_eq!(row.selected(), Button::Reject);
        row.toggle();
        assert_eq!(row.selected(), Button::Accept);
    }
}
