//! Multi-select list widget with checkboxes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use super::SelectAction;
use crate::tui::theme::Theme;

/// Multi-select list with an independent toggle per option.
#[derive(Debug, Clone)]
pub struct CheckboxList {
    items: Vec<(String, bool)>,
    state: ListState,
}

impl CheckboxList {
    /// Create a new list with every option unchecked.
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<(String, bool)> =
            items.into_iter().map(|i| (i.to_string(), false)).collect();
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self { items, state }
    }

    /// Labels of the checked options, in option order.
    pub fn checked_items(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get the cursor position.
    pub const fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Toggle the option under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some((_, checked)) = self.items.get_mut(i) {
                *checked = !*checked;
            }
        }
    }

    /// Move selection up.
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

    /// Move selection down.
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
                self.toggle_current();
                SelectAction::None
            }
            KeyCode::Enter => SelectAction::Confirm,
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
            .map(|(i, (item, checked))| {
                let is_cursor = Some(i) == cursor;
                let style = if !focused {
                    // Unfocused: all content muted
                    theme.dim()
                } else if is_cursor {
                    theme.highlight()
                } else {
                    Style::default()
                };

                let checkbox = if *checked { "[x] " } else { "[ ] " };
                let prefix = if is_cursor && focused { "> " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(checkbox, style),
                    Span::styled(item.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn interests() -> CheckboxList {
        CheckboxList::new(vec!["Cloud", "Database", "AI/ML"])
    }

    #[test]
    fn test_nothing_checked_by_default() {
        assert!(interests().checked_items().is_empty());
    }

    #[test]
    fn test_toggle_single() {
        let mut list = interests();
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(list.checked_items(), vec!["Database"]);
    }

    #[test]
    fn test_checked_items_follow_option_order() {
        let mut list = interests();
        // Toggle AI/ML first, then Cloud
        list.handle_key(key(KeyCode::Up));
        list.handle_key(key(KeyCode::Char(' ')));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(list.checked_items(), vec!["Cloud", "AI/ML"]);
    }

    #[test]
    fn test_toggle_twice_unchecks() {
        let mut list = interests();
        list.handle_key(key(KeyCode::Char(' ')));
        list.handle_key(key(KeyCode::Char(' ')));
        assert!(list.checked_items().is_empty());
    }

    #[test]
    fn test_enter_and_escape() {
        let mut list = interests();
        assert_eq!(list.handle_key(key(KeyCode::Enter)), SelectAction::Confirm);
        assert_eq!(list.handle_key(key(KeyCode::Esc)), SelectAction::Cancel);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut list = CheckboxList::new(Vec::<String>::new());
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(list.cursor(), None);
        assert!(list.checked_items().is_empty());
    }
}
