//! Generic dialog host.
//!
//! Knows nothing about what it hosts. It draws a dimmed backdrop and a
//! centered surface when open, draws nothing when closed, and reports
//! dismissal gestures (ESC, a press on the backdrop) to its caller. It never
//! changes open state itself; the caller owns that.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::{centered_rect_by_size, contains};
use crate::ui::theme::{DIALOG_BORDER, MUTED_TEXT, TEXT};

/// Why the host wants the dialog closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Backdrop,
}

/// Screen areas of an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRegions {
    pub surface: Rect,
    pub description: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub struct Modal<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    width: u16,
    height: u16,
    with_footer: bool,
}

impl<'a> Modal<'a> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            title: None,
            description: None,
            width,
            height,
            with_footer: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description).filter(|d| !d.is_empty());
        self
    }

    /// Reserve the last inner row for action buttons.
    pub fn with_footer(mut self) -> Self {
        self.with_footer = true;
        self
    }

    pub fn regions(&self, screen: Rect) -> ModalRegions {
        let surface = centered_rect_by_size(self.width, self.height, screen);
        let inner = Rect {
            x: surface.x.saturating_add(1),
            y: surface.y.saturating_add(1),
            width: surface.width.saturating_sub(2),
            height: surface.height.saturating_sub(2),
        };

        // Description line plus a spacer row.
        let description_height = if self.description.is_some() {
            inner.height.min(1)
        } else {
            0
        };
        let header_height = if self.description.is_some() {
            inner.height.min(2)
        } else {
            0
        };
        let footer_height = if self.with_footer {
            inner.height.saturating_sub(header_height).min(1)
        } else {
            0
        };

        let description = Rect {
            height: description_height,
            ..inner
        };
        let footer = Rect {
            y: inner.y + inner.height.saturating_sub(footer_height),
            height: footer_height,
            ..inner
        };
        let body = Rect {
            y: inner.y + header_height,
            height: inner
                .height
                .saturating_sub(header_height)
                .saturating_sub(footer_height),
            ..inner
        };

        ModalRegions {
            surface,
            description,
            body,
            footer,
        }
    }

    /// Report a dismissal gesture, if `event` is one.
    ///
    /// Nothing is intercepted while closed. A press inside the surface is
    /// never a backdrop dismissal.
    pub fn dismissal(&self, open: bool, screen: Rect, event: &Event) -> Option<DismissReason> {
        if !open {
            return None;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc => {
                Some(DismissReason::Escape)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let surface = self.regions(screen).surface;
                (!contains(surface, *column, *row)).then_some(DismissReason::Backdrop)
            }
            _ => None,
        }
    }

    /// Draw the backdrop and empty dialog frame.
    ///
    /// Returns the regions the caller fills in, or `None` (having drawn
    /// nothing) when closed.
    pub fn render(&self, frame: &mut Frame<'_>, open: bool) -> Option<ModalRegions> {
        if !open {
            return None;
        }

        let screen = frame.area();
        let regions = self.regions(screen);

        frame
            .buffer_mut()
            .set_style(screen, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(Clear, regions.surface);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIALOG_BORDER));
        if let Some(title) = self.title {
            block = block
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .title_style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD));
        }
        frame.render_widget(block, regions.surface);

        if let Some(description) = self.description {
            frame.render_widget(
                Paragraph::new(Line::from(description))
                    .style(Style::default().fg(MUTED_TEXT))
                    .wrap(Wrap { trim: true }),
                regions.description,
            );
        }

        Some(regions)
    }
}
