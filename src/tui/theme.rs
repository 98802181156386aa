//! Dialog colors.
//!
//! The accent color marks focus and interactive elements (cyan unless
//! configured otherwise); everything unfocused is muted.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use ratatui::style::{Color, Modifier, Style};

/// Colors and chrome options shared by all dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub warning: Color,
    /// Show "step n/N" in the dialog border.
    pub show_progress: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            warning: Color::Yellow,
            show_progress: true,
        }
    }
}

impl Theme {
    /// Theme with the accent color parsed from a name (`"cyan"`,
    /// `"light-blue"`) or hex value (`"#00afff"`).
    pub fn with_accent(accent: &str) -> Result<Self> {
        let accent = Color::from_str(accent)
            .map_err(|_| anyhow!("Invalid accent color '{accent}'"))?;
        Ok(Self {
            accent,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Border of a focused or unfocused control.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Highlighted row or button.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Key names in help lines.
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn warn(&self) -> Style {
        Style::default().fg(self.warning)
    }
}
