//! Shared dialog frame.
//!
//! Every question is shown as a centered popup over a dimmed background:
//! a titled border (with "n/N" progress on the right), the prompt text,
//! room for the dialog's own control, a button row and a key hint line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{DIALOG_MAX_WIDTH, DIALOG_MIN_WIDTH, DIALOG_TITLE_RESERVE},
    tui::theme::Theme,
};

/// Which part of a dialog receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Control,
    Buttons,
}

impl Focus {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Control => Self::Buttons,
            Self::Buttons => Self::Control,
        }
    }
}

/// `Esc` or `Ctrl+C`.
pub fn is_cancel_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Areas left for the dialog's own widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAreas {
    pub control: Rect,
    pub buttons: Rect,
}

/// Title, prompt and progress of one dialog.
#[derive(Debug, Clone)]
pub struct DialogChrome {
    title: String,
    prompt: String,
    progress: Option<(usize, usize)>,
}

impl DialogChrome {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            progress: None,
        }
    }

    /// Show "`step`/`total`" in the border.
    #[must_use]
    pub const fn with_progress(mut self, step: usize, total: usize) -> Self {
        self.progress = Some((step, total));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub const fn progress(&self) -> Option<(usize, usize)> {
        self.progress
    }

    /// Popup width for the prompt and title, before clamping to the screen.
    fn preferred_width(&self) -> u16 {
        let prompt = self
            .prompt
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        let title = self.title.width() + DIALOG_TITLE_RESERVE;
        // Borders plus one column of padding on each side
        let width = prompt.max(title) + 4;
        u16::try_from(width)
            .unwrap_or(u16::MAX)
            .clamp(DIALOG_MIN_WIDTH, DIALOG_MAX_WIDTH)
    }

    /// Rows the prompt needs when wrapped to `width` columns.
    fn prompt_height(&self, width: u16) -> u16 {
        if width == 0 || self.prompt.is_empty() {
            return 0;
        }
        let width = usize::from(width);
        let rows: usize = self
            .prompt
            .lines()
            .map(|line| line.width().div_ceil(width).max(1))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Draw the popup and return the areas for the control and buttons.
    ///
    /// `control_height` is the number of rows the dialog wants for its
    /// control; the popup shrinks it when the screen is too small.
    pub fn render(
        &self,
        frame: &mut Frame,
        theme: &Theme,
        control_height: u16,
        hints: Line<'_>,
    ) -> DialogAreas {
        let area = frame.area();
        let width = self.preferred_width().min(area.width);
        let prompt_height = self.prompt_height(width.saturating_sub(4));
        // Borders, prompt, gap, control, gap, buttons, hints
        let height = prompt_height
            .saturating_add(control_height)
            .saturating_add(6)
            .min(area.height);
        let popup = centered_rect(width, height, area);

        let buf = frame.buffer_mut();
        dim_background(area, buf, theme);
        Clear.render(popup, buf);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                theme.highlight(),
            )));
        if theme.show_progress {
            if let Some((step, total)) = self.progress {
                block = block.title_top(
                    Line::from(Span::styled(format!(" {step}/{total} "), theme.dim()))
                        .alignment(Alignment::Right),
                );
            }
        }

        let inner = block.inner(popup);
        block.render(popup, buf);

        let padded = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let [prompt_area, _, control, _, buttons, hint_area] = Layout::vertical([
            Constraint::Length(prompt_height),
            Constraint::Length(1),
            Constraint::Length(control_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(padded);

        Paragraph::new(self.prompt.as_str())
            .wrap(Wrap { trim: false })
            .render(prompt_area, buf);
        Paragraph::new(hints).render(hint_area, buf);

        DialogAreas { control, buttons }
    }
}

/// Key hint line: `Enter Confirm  Esc Cancel`.
pub fn hint_line<'a>(theme: &Theme, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let spans: Vec<Span<'a>> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = if i + 1 < hints.len() { "  " } else { "" };
            [
                Span::styled(*key, theme.key_hint()),
                Span::styled(format!(" {action}{sep}"), theme.dim()),
            ]
        })
        .collect();
    Line::from(spans)
}

fn dim_background(area: Rect, buf: &mut Buffer, theme: &Theme) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::DIM),
                );
            }
        }
    }
}

/// Calculate a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
