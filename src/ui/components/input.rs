use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, DIALOG_BORDER, DISABLED, PLACEHOLDER, TEXT};

/// How a bordered text field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldLook {
    #[default]
    Normal,
    Focused,
    Disabled,
}

/// Draw a bordered single-line field showing `value`, or `placeholder`
/// when empty.
pub fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    value: &str,
    placeholder: &str,
    look: FieldLook,
) {
    let border = match look {
        FieldLook::Normal => DIALOG_BORDER,
        FieldLook::Focused => ACCENT,
        FieldLook::Disabled => DISABLED,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(PLACEHOLDER))
    } else if look == FieldLook::Disabled {
        Span::styled(value.to_string(), Style::default().fg(DISABLED))
    } else {
        Span::styled(value.to_string(), Style::default().fg(TEXT))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`.
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text and put the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('u') if ctrl => {
                let changed = !self.value.is_empty();
                self.set_value(String::new());
                changed
            }
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let at = self.byte_index();
                self.value.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index();
                self.value.remove(at);
                true
            }
            KeyCode::Delete if self.cursor < self.len() => {
                let at = self.byte_index();
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        }
    }

    /// Draw the field; when focused, park the terminal cursor at the
    /// insertion point.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, placeholder: &str, focused: bool) {
        let look = if focused {
            FieldLook::Focused
        } else {
            FieldLook::Normal
        };
        render_text_field(frame, area, &self.value, placeholder, look);

        if focused && area.width > 2 && area.height > 2 {
            let prefix: String = self.value.chars().take(self.cursor).collect();
            let offset = (Span::raw(prefix).width() as u16).min(area.width - 3);
            frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }
}
