use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top band: which demo is running, plus the current notice if any.
pub struct Header<'a> {
    title: &'a str,
    notice: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, notice: Option<&'a str>) -> Self {
        Self { title, notice }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "staffpick",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(self.title, text_style),
        ];
        if let Some(notice) = self.notice {
            spans.push(Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)));
            spans.push(Span::styled(notice, Style::default().fg(STATUS_OK)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
