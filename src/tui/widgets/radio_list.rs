//! Single-select radio list widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::tui::theme::Theme;

/// Actions from list interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// No action, continue
    None,
    /// User confirmed selection
    Confirm,
    /// User cancelled
    Cancel,
}

/// Radio list: a cursor plus exactly one checked option.
///
/// The first option starts checked. Moving the cursor does not change the
/// checked option; `Space` does, and `Enter` checks the option under the
/// cursor before confirming.
#[derive(Debug, Clone)]
pub struct RadioList {
    items: Vec<String>,
    state: ListState,
    checked: Option<usize>,
}

impl RadioList {
    /// Create a new radio list.
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
        let mut state = ListState::default();
        let checked = if items.is_empty() { None } else { Some(0) };
        state.select(checked);
        Self {
            items,
            state,
            checked,
        }
    }

    /// Get the cursor index.
    pub const fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Get the checked label.
    pub fn checked_item(&self) -> Option<&str> {
        self.checked
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Check the option under the cursor.
    pub fn check_current(&mut self) {
        if let Some(i) = self.state.selected() {
            self.checked = Some(i);
        }
    }

    /// Check if list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Move cursor up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Move cursor down, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> SelectAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                SelectAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                SelectAction::None
            }
            KeyCode::Char(' ') => {
                self.check_current();
                SelectAction::None
            }
            KeyCode::Enter => {
                self.check_current();
                if self.checked.is_some() {
                    SelectAction::Confirm
                } else {
                    SelectAction::None
                }
            }
            KeyCode::Esc => SelectAction::Cancel,
            _ => SelectAction::None,
        }
    }

    /// Render the widget.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(focused));

        let cursor = self.state.selected();
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_cursor = Some(i) == cursor;
                let style = if !focused {
                    theme.dim()
                } else if is_cursor {
                    theme.highlight()
                } else {
                    Style::default()
                };

                let marker = if Some(i) == self.checked {
                    "(•) "
                } else {
                    "( ) "
                };
                let prefix = if is_cursor && focused { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(marker, style),
                    Span::styled(item.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}
