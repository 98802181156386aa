//! Confirmation dialog screen.
//!
//! A yes/no question. "No" is highlighted initially.

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::dialog::{hint_line, is_cancel_key, DialogChrome};
use crate::tui::{
    event::TuiEvent,
    theme::Theme,
    widgets::{Button, ButtonRow},
    AppResult, TuiApp,
};

/// Confirmation dialog state.
pub struct ConfirmDialog {
    chrome: DialogChrome,
    buttons: ButtonRow,
    theme: Theme,
}

impl ConfirmDialog {
    /// Create a new confirmation dialog.
    pub fn new(chrome: DialogChrome, theme: Theme) -> Self {
        Self {
            chrome,
            buttons: ButtonRow::new("Yes", "No").with_selected(Button::Reject),
            theme,
        }
    }

    /// True while "Yes" is highlighted.
    pub fn yes_selected(&self) -> bool {
        self.buttons.selected() == Button::Accept
    }
}

impl TuiApp for ConfirmDialog {
    type Output = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };
        if is_cancel_key(key) {
            return Some(AppResult::Cancelled);
        }

        match key.code {
            // Quick keys for Yes/No
            KeyCode::Char('y' | 'Y') => Some(AppResult::Done(true)),
            KeyCode::Char('n' | 'N') => Some(AppResult::Done(false)),

            KeyCode::Tab | KeyCode::BackTab => {
                self.buttons.toggle();
                None
            }
            KeyCode::Enter => Some(AppResult::Done(self.yes_selected())),
            _ => {
                self.buttons.handle_key(*key);
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let hints = hint_line(
            &self.theme,
            &[("y/n", "Answer"), ("←→", "Move"), ("Esc", "Cancel")],
        );
        let areas = self.chrome.render(frame, &self.theme, 0, hints);
        self.buttons
            .render(areas.buttons, frame.buffer_mut(), true, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::script::{ctrl, key, ScriptedSession};
    use crate::tui::Session;

    fn dialog() -> ConfirmDialog {
        ConfirmDialog::new(DialogChrome::new("Confirm", "Test?"), Theme::default())
    }

    #[test]
    fn test_default_is_no() {
        let mut d = dialog();
        assert!(!d.yes_selected());
        assert_eq!(d.handle_event(&key(KeyCode::Enter)), Some(AppResult::Done(false)));
    }

    #[test]
    fn test_quick_yes() {
        let mut d = dialog();
        let result = d.handle_event(&key(KeyCode::Char('y')));
        assert_eq!(result, Some(AppResult::Done(true)));
    }

    #[test]
    fn test_quick_no() {
        let mut d = dialog();
        let result = d.handle_event(&key(KeyCode::Char('N')));
        assert_eq!(result, Some(AppResult::Done(false)));
    }

    #[test]
    fn test_arrow_navigation() {
        let mut d = dialog();
        d.handle_event(&key(KeyCode::Left));
        assert!(d.yes_selected());
        d.handle_event(&key(KeyCode::Right));
        assert!(!d.yes_selected());
    }

    #[test]
    fn test_tab_toggle() {
        let mut d = dialog();
        d.handle_event(&key(KeyCode::Tab));
        assert!(d.yes_selected());
        d.handle_event(&key(KeyCode::Tab));
        assert!(!d.yes_selected());
    }

    #[test]
    fn test_enter_confirms_selection() {
        let mut d = dialog();
        d.handle_event(&key(KeyCode::Left));
        let result = d.handle_event(&key(KeyCode::Enter));
        assert_eq!(result, Some(AppResult::Done(true)));
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        assert_eq!(dialog().handle_event(&key(KeyCode::Esc)), Some(AppResult::Cancelled));
        assert_eq!(dialog().handle_event(&ctrl('c')), Some(AppResult::Cancelled));
    }

    #[test]
    fn test_renders_buttons() {
        let mut session = ScriptedSession::new([]).unwrap();
        let mut d = dialog();
        session.draw(&mut |frame| d.render(frame)).unwrap();
        let screen = session.screen();
        assert!(screen.contains("Test?"));
        assert!(screen.contains(" Yes "));
        assert!(screen.contains("[No]"));
    }
}
