use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Bottom band: key hints on the left, version on the right.
pub struct Footer<'a> {
    hints: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let [hints, version] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(VERSION.len() as u16 + 1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(format!(" {}", self.hints)).style(style), hints);
        frame.render_widget(Paragraph::new(VERSION).style(style), version);
    }
}
