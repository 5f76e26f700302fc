use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::layout::contains;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DISABLED, TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            disabled: false,
        }
    }

    pub fn ghost(label: &'a str) -> Self {
        Self {
            variant: ButtonVariant::Ghost,
            ..Self::new(label)
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Display width including one cell of padding on each side.
    pub fn width(&self) -> u16 {
        Span::raw(self.label).width() as u16 + 2
    }

    pub fn span(&self) -> Span<'a> {
        let style = if self.disabled {
            Style::default().fg(DISABLED)
        } else {
            match self.variant {
                ButtonVariant::Primary => Style::default()
                    .fg(TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
                ButtonVariant::Ghost => Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT),
            }
        };
        Span::styled(format!(" {} ", self.label), style)
    }
}

/// Right-aligned row of buttons, as in a dialog footer.
pub struct ButtonRow<'a> {
    buttons: Vec<Button<'a>>,
}

const GAP: u16 = 2;

impl<'a> ButtonRow<'a> {
    pub fn new(buttons: Vec<Button<'a>>) -> Self {
        Self { buttons }
    }

    /// Where each button lands inside `area`, in declaration order.
    pub fn rects(&self, area: Rect) -> Vec<Rect> {
        let total: u16 = self.buttons.iter().map(Button::width).sum::<u16>()
            + GAP * self.buttons.len().saturating_sub(1) as u16;
        let mut x = area.x + area.width.saturating_sub(total);

        self.buttons
            .iter()
            .map(|button| {
                let rect = Rect {
                    x,
                    y: area.y,
                    width: button.width().min(area.right().saturating_sub(x)),
                    height: area.height.min(1),
                };
                x = x.saturating_add(button.width() + GAP);
                rect
            })
            .collect()
    }

    /// Index of the enabled button under (`column`, `row`).
    pub fn hit(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        self.rects(area)
            .into_iter()
            .zip(&self.buttons)
            .position(|(rect, button)| !button.disabled && contains(rect, column, row))
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        for (rect, button) in self.rects(area).into_iter().zip(&self.buttons) {
            frame.render_widget(Line::from(button.span()), rect);
        }
    }
}
