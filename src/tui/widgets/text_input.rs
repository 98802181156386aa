//! Single-line text input widget.
//!
//! Fully supports UTF-8 input including multi-byte characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{form::InputFilter, tui::theme::Theme};

/// Single-line text input with cursor and optional filter.
///
/// The cursor position is tracked as a character index (not byte index)
/// to properly handle UTF-8 multi-byte characters. When a filter is set,
/// every edit is checked against it and dropped if the resulting buffer
/// would not match.
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    label: String,
    filter: Option<InputFilter>,
    /// Whether the most recent edit was dropped by the filter
    rejected: bool,
}

impl TextInput {
    /// Create a new text input with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            label: label.into(),
            filter: None,
            rejected: false,
        }
    }

    /// Restrict edits to buffers accepted by `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<InputFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Set initial content (not checked against the filter).
    #[must_use]
    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.content = value.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub const fn filter(&self) -> Option<&InputFilter> {
        self.filter.as_ref()
    }

    /// True if the last edit attempt was rejected by the filter.
    pub const fn last_rejected(&self) -> bool {
        self.rejected
    }

    /// Returns the byte index for a character position.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Returns the byte index for the current character cursor position.
    fn cursor_byte_index(&self) -> usize {
        self.byte_index(self.cursor)
    }

    /// Returns the character count of the content.
    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Apply an edit if the filter accepts the result.
    fn commit(&mut self, candidate: String, cursor: usize) -> bool {
        let accepted = self.filter.as_ref().map_or(true, |f| f.accepts(&candidate));
        if accepted {
            self.content = candidate;
            self.cursor = cursor;
        }
        self.rejected = !accepted;
        accepted
    }

    /// Insert text at the current cursor position.
    ///
    /// Used for paste operations. Multi-line content is flattened
    /// (newlines replaced with spaces) since this is a single-line input.
    /// Returns `false` if the filter rejected the paste.
    pub fn insert_text(&mut self, text: &str) -> bool {
        // Flatten to single line - replace newlines with spaces
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        let mut candidate = self.content.clone();
        candidate.insert_str(self.cursor_byte_index(), &flattened);
        let cursor = self.cursor + flattened.chars().count();
        self.commit(candidate, cursor)
    }

    /// Remove the characters in `[from, to)` (character indices).
    fn delete_range(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }
        let mut candidate = self.content.clone();
        candidate.replace_range(self.byte_index(from)..self.byte_index(to), "");
        let cursor = if self.cursor > from { from } else { self.cursor };
        self.commit(candidate, cursor);
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                // Handle Ctrl+key combinations first
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'u' => {
                            // Ctrl+U: Clear line
                            self.delete_range(0, self.char_count());
                            return true;
                        }
                        'w' => {
                            // Ctrl+W: Delete word backward
                            let mut start = self.cursor;
                            while start > 0 && self.char_at(start - 1) == Some(' ') {
                                start -= 1;
                            }
                            while start > 0 && self.char_at(start - 1) != Some(' ') {
                                start -= 1;
                            }
                            self.delete_range(start, self.cursor);
                            return true;
                        }
                        _ => return false, // Let other Ctrl combinations bubble up
                    }
                }
                // Regular character input
                let mut candidate = self.content.clone();
                candidate.insert(self.cursor_byte_index(), c);
                self.commit(candidate, self.cursor + 1);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.delete_range(self.cursor - 1, self.cursor);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    self.delete_range(self.cursor, self.cursor + 1);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Returns the character at the given character index.
    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.content.chars().nth(char_idx)
    }

    /// Render the widget.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(focused))
            .title(if self.label.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.label)
            });

        let inner = block.inner(area);
        block.render(area, buf);

        // Render content with cursor
        if focused {
            let byte_idx = self.cursor_byte_index();
            let (before, after) = self.content.split_at(byte_idx);
            let cursor_char = after.chars().next().unwrap_or(' ');
            let after_cursor: String = after.chars().skip(1).collect();

            let line = Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after_cursor),
            ]);

            Paragraph::new(line).render(inner, buf);
        } else {
            Paragraph::new(self.content.as_str()).render(inner, buf);
        }
    }
}
