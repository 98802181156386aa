//! Single-select dialog.

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::dialog::{hint_line, is_cancel_key, DialogChrome, Focus};
use crate::{
    constants::LIST_MAX_VISIBLE_ROWS,
    tui::{
        event::TuiEvent,
        theme::Theme,
        widgets::{Button, ButtonRow, RadioList, SelectAction},
        AppResult, TuiApp,
    },
};

/// Radio list question. The first option is checked until the user picks
/// another one.
pub struct RadioDialog {
    chrome: DialogChrome,
    list: RadioList,
    buttons: ButtonRow,
    focus: Focus,
    theme: Theme,
}

impl RadioDialog {
    pub fn new<T: ToString>(chrome: DialogChrome, options: Vec<T>, theme: Theme) -> Self {
        Self {
            chrome,
            list: RadioList::new(options),
            buttons: ButtonRow::ok_cancel(),
            focus: Focus::Control,
            theme,
        }
    }

    fn confirm(&self) -> Option<AppResult<String>> {
        self.list
            .checked_item()
            .map(|item| AppResult::Done(item.to_string()))
    }
}

impl TuiApp for RadioDialog {
    type Output = String;

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
                SelectAction::Confirm => self.confirm(),
                SelectAction::Cancel => Some(AppResult::Cancelled),
                SelectAction::None => None,
            },
            (KeyCode::Enter, Focus::Buttons) => match self.buttons.selected() {
                Button::Accept => self.confirm(),
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
                ("Space", "Select"),
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
