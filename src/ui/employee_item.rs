use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::directory::Employee;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, TEXT};

/// Rows one result occupies in the list.
pub const ITEM_HEIGHT: u16 = 2;

/// Two-line rendering of one search result: name with department and
/// position, then email.
pub fn employee_item_lines(employee: &Employee, selected: bool) -> [Line<'_>; 2] {
    let marker = if selected { "▌" } else { " " };
    let mut head = vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(
            employee.name.as_str(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    let meta = employee.meta_line();
    if !meta.is_empty() {
        head.push(Span::raw("  "));
        head.push(Span::styled(meta, Style::default().fg(MUTED_TEXT)));
    }

    let email = Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(
            employee.email.as_deref().unwrap_or(""),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);

    let mut lines = [Line::from(head), email];
    if selected {
        for line in &mut lines {
            line.style = Style::default().bg(ACTIVE_HIGHLIGHT);
        }
    }
    lines
}
