//! Text input dialog.

use crossterm::event::KeyCode;
use ratatui::{text::Line, Frame};

use super::dialog::{hint_line, is_cancel_key, DialogChrome, Focus};
use crate::{
    form::InputFilter,
    tui::{
        event::TuiEvent,
        theme::Theme,
        widgets::{Button, ButtonRow, TextInput},
        AppResult, TuiApp,
    },
};

/// Single-line text question.
///
/// Confirms with the buffer as typed; an empty buffer is a valid answer.
pub struct TextDialog {
    chrome: DialogChrome,
    input: TextInput,
    buttons: ButtonRow,
    focus: Focus,
    theme: Theme,
}

impl TextDialog {
    pub fn new(chrome: DialogChrome, theme: Theme) -> Self {
        Self {
            chrome,
            input: TextInput::new(""),
            buttons: ButtonRow::ok_cancel(),
            focus: Focus::Control,
            theme,
        }
    }

    /// Reject edits that would leave the buffer not matching `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<InputFilter>) -> Self {
        self.input = self.input.with_filter(filter);
        self
    }

    #[must_use]
    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.input = self.input.with_initial(value);
        self
    }

    pub fn content(&self) -> &str {
        self.input.content()
    }

    fn confirm(&self) -> AppResult<String> {
        AppResult::Done(self.input.content().to_string())
    }

    fn hints(&self) -> Line<'static> {
        if self.input.last_rejected() {
            if let Some(filter) = self.input.filter() {
                return Line::styled(
                    format!("Input must match {}", filter.pattern()),
                    self.theme.warn(),
                );
            }
        }
        hint_line(
            &self.theme,
            &[("Enter", "Confirm"), ("Tab", "Buttons"), ("Esc", "Cancel")],
        )
    }
}

impl TuiApp for TextDialog {
    type Output = String;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Paste(content) => {
                if self.focus == Focus::Control {
                    self.input.insert_text(content);
                }
                None
            }
            TuiEvent::Key(key) => {
                if is_cancel_key(key) {
                    return Some(AppResult::Cancelled);
                }

                match (key.code, self.focus) {
                    (KeyCode::Tab | KeyCode::BackTab, _) => {
                        self.focus = self.focus.toggle();
                        None
                    }
                    (KeyCode::Enter, Focus::Control) => Some(self.confirm()),
                    (KeyCode::Enter, Focus::Buttons) => match self.buttons.selected() {
                        Button::Accept => Some(self.confirm()),
                        Button::Reject => Some(AppResult::Cancelled),
                    },
                    (_, Focus::Control) => {
                        self.input.handle_key(*key);
                        None
                    }
                    (_, Focus::Buttons) => {
                        self.buttons.handle_key(*key);
                        None
                    }
                }
            }
            TuiEvent::Resize(..) => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let hints = self.hints();
        let areas = self.chrome.render(frame, &self.theme, 3, hints);
        let buf = frame.buffer_mut();
        self.input
            .render(areas.control, buf, self.focus == Focus::Control, &self.theme);
        self.buttons
            .render(areas.buttons, buf, self.focus == Focus::Buttons, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::script::{ctrl, key, paste, typed};

    fn dialog() -> TextDialog {
        TextDialog::new(DialogChrome::new("Name", "Your name"), Theme::default())
    }

    fn feed(dialog: &mut TextDialog, events: &[TuiEvent]) -> Option<AppResult<String>> {
        events.iter().find_map(|e| dialog.handle_event(e))
    }

    #[test]
    fn test_enter_confirms_buffer() {
        let mut d = dialog();
        let result = feed(&mut d, &[typed("Ada"), vec![key(KeyCode::Enter)]].concat());
        assert_eq!(result, Some(AppResult::Done("Ada".to_string())));
    }

    #[test]
    fn test_empty_buffer_is_accepted() {
        let mut d = dialog();
        assert_eq!(
            d.handle_event(&key(KeyCode::Enter)),
            Some(AppResult::Done(String::new()))
        );
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let mut d = dialog();
        assert_eq!(d.handle_event(&key(KeyCode::Esc)), Some(AppResult::Cancelled));
        let mut d = dialog();
        assert_eq!(d.handle_event(&ctrl('c')), Some(AppResult::Cancelled));
    }

    #[test]
    fn test_digits_filter() {
        let mut d = dialog().with_filter(Some(InputFilter::digits()));
        let result = feed(&mut d, &[typed("4x2"), vec![key(KeyCode::Enter)]].concat());
        assert_eq!(result, Some(AppResult::Done("42".to_string())));
    }

    #[test]
    fn test_rejected_edit_shows_pattern() {
        let mut d = dialog().with_filter(Some(InputFilter::digits()));
        d.handle_event(&key(KeyCode::Char('x')));
        assert_eq!(d.hints().to_string(), "Input must match [0-9]*");
    }

    #[test]
    fn test_paste_goes_to_input() {
        let mut d = dialog();
        d.handle_event(&paste("multi\nline"));
        assert_eq!(d.content(), "multi line");
    }

    #[test]
    fn test_cancel_button() {
        let mut d = dialog().with_initial("kept");
        let result = feed(
            &mut d,
            &[key(KeyCode::Tab), key(KeyCode::Right), key(KeyCode::Enter)],
        );
        assert_eq!(result, Some(AppResult::Cancelled));
    }

    #[test]
    fn test_ok_button() {
        let mut d = dialog().with_initial("kept");
        let result = feed(&mut d, &[key(KeyCode::BackTab), key(KeyCode::Enter)]);
        assert_eq!(result, Some(AppResult::Done("kept".to_string())));
    }

    #[test]
    fn test_keys_on_buttons_do_not_edit() {
        let mut d = dialog();
        feed(&mut d, &[key(KeyCode::Tab), key(KeyCode::Char('a'))]);
        assert_eq!(d.content(), "");
    }
}
