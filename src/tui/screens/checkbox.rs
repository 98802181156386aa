//! Multi-select dialog.

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::dialog::{hint_line, is_cancel_key, DialogChrome, Focus};
use crate::{
    constants::LIST_MAX_VISIBLE_ROWS,
    tui::{
        event::TuiEvent,
        theme::Theme,
        widgets::{Button, ButtonRow, CheckboxList, SelectAction},
        AppResult, TuiApp,
    },
};

/// Checkbox list question. Confirms with the checked labels in option
/// order; nothing checked is a valid answer.
pub struct CheckboxDialog {
    chrome: DialogChrome,
    list: CheckboxList,
    buttons: ButtonRow,
    focus: Focus,
    theme: Theme,
}

impl CheckboxDialog {
    pub fn new<T: ToString>(chrome: DialogChrome, options: Vec<T>, theme: Theme) -> Self {
        Self {
            chrome,
            list: CheckboxList::new(options),
            buttons: ButtonRow::ok_cancel(),
            focus: Focus::Control,
            theme,
        }
    }

    fn confirm(&self) -> AppResult<Vec<String>> {
        AppResult::Done(
            self.list
                .checked_items()
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    }
}

impl TuiApp for CheckboxDialog {
    type Output = Vec<String>;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };
        if is_cancel_key(key) {
            return Some(AppResult::Cancelled);
        }

        match (key.code, self.focus) {
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                None
            }
            (_, Focus::Control) => match self.list.handle_key(*key) {
                SelectAction::Confirm => Some(self.confirm()),
                SelectAction::Cancel => Some(AppResult::Cancelled),
                SelectAction::None => None,
            },
            (KeyCode::Enter, Focus::Buttons) => match self.buttons.selected() {
                Button::Accept => Some(self.confirm()),
                Button::Reject => Some(AppResult::Cancelled),
            },
            (_, Focus::Buttons) => {
                self.buttons.handle_key(*key);
                None
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut Frame) {
        let rows = self.list.len().min(LIST_MAX_VISIBLE_ROWS) as u16 + 2;
        let hints = hint_line(
            &self.theme,
            &[
                ("↑↓", "Move"),
                ("Space", "Toggle"),
                ("Enter", "Confirm"),
                ("Esc", "Cancel"),
            ],
        );
        let areas = self.chrome.render(frame, &self.theme, rows, hints);
        let buf = frame.buffer_mut();
        self.list
            .render(areas.control, buf, self.focus == Focus::Control, &self.theme);
        self.buttons
            .render(areas.buttons, buf, self.focus == Focus::Buttons, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::script::key;

    fn dialog() -> CheckboxDialog {
        CheckboxDialog::new(
            DialogChrome::new("Interests", "Pick any"),
            vec!["Cloud", "Database", "AI/ML"],
            Theme::default(),
        )
    }

    fn feed(dialog: &mut CheckboxDialog, events: &[TuiEvent]) -> Option<AppResult<Vec<String>>> {
        events.iter().find_map(|e| dialog.handle_event(e))
    }

    #[test]
    fn test_toggle_database() {
        let mut d = dialog();
        let result = feed(
            &mut d,
            &[key(KeyCode::Down), key(KeyCode::Char(' ')), key(KeyCode::Enter)],
        );
        assert_eq!(result, Some(AppResult::Done(vec!["Database".to_string()])));
    }

    #[test]
    fn test_nothing_checked_confirms_empty() {
        let mut d = dialog();
        assert_eq!(
            d.handle_event(&key(KeyCode::Enter)),
            Some(AppResult::Done(Vec::new()))
        );
    }

    #[test]
    fn test_result_in_option_order() {
        let mut d = dialog();
        let result = feed(
            &mut d,
            &[
                key(KeyCode::Up),
                key(KeyCode::Char(' ')),
                key(KeyCode::Down),
                key(KeyCode::Char(' ')),
                key(KeyCode::Tab),
                key(KeyCode::Enter),
            ],
        );
        assert_eq!(
            result,
            Some(AppResult::Done(vec!["Cloud".to_string(), "AI/ML".to_string()]))
        );
    }

    #[test]
    fn test_escape_cancels_after_toggles() {
        let mut d = dialog();
        let result = feed(&mut d, &[key(KeyCode::Char(' ')), key(KeyCode::Esc)]);
        assert_eq!(result, Some(AppResult::Cancelled));
    }
}
