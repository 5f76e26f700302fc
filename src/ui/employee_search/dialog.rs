//! Rendering and hit-testing for the employee search dialog.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::components::{Button, ButtonRow, TextInput};
use crate::ui::employee_item::{employee_item_lines, ITEM_HEIGHT};
use crate::ui::layout::contains;
use crate::ui::modal::{Modal, ModalRegions};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{EmployeeSearchState, SearchSession};
use super::widget::SearchModalOptions;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 24;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;

pub const CLOSE_LABEL: &str = "닫기";
pub const CONFIRM_LABEL: &str = "선택";
pub const PROMPT_TEXT: &str = "검색어를 입력하세요.";
pub const LOADING_TEXT: &str = "검색 중...";
pub const EMPTY_TEXT: &str = "검색 결과가 없습니다.";

/// Index of the close button in [`footer_buttons`].
pub const CLOSE_BUTTON: usize = 0;
/// Index of the confirm button in [`footer_buttons`].
pub const CONFIRM_BUTTON: usize = 1;

pub fn modal(options: &SearchModalOptions) -> Modal<'_> {
    Modal::new(DIALOG_WIDTH, DIALOG_HEIGHT)
        .title(&options.title)
        .description(&options.description)
        .with_footer()
}

pub fn footer_buttons(can_confirm: bool) -> ButtonRow<'static> {
    ButtonRow::new(vec![
        Button::ghost(CLOSE_LABEL),
        Button::new(CONFIRM_LABEL).disabled(!can_confirm),
    ])
}

/// Sub-areas of the dialog body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDialogLayout {
    pub input: Rect,
    pub status: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl SearchDialogLayout {
    pub fn new(regions: &ModalRegions) -> Self {
        let body = regions.body;
        let input_height = INPUT_HEIGHT.min(body.height);
        let status_height = STATUS_HEIGHT.min(body.height - input_height);

        let input = Rect {
            height: input_height,
            ..body
        };
        let status = Rect {
            y: body.y + input_height,
            height: status_height,
            ..body
        };
        let list = Rect {
            y: status.y + status_height,
            height: body.height - input_height - status_height,
            ..body
        };

        Self {
            input,
            status,
            list,
            footer: regions.footer,
        }
    }

    pub fn visible_rows(&self) -> usize {
        (self.list.height / ITEM_HEIGHT) as usize
    }

    /// Item index under (`column`, `row`), given the current scroll window.
    pub fn item_at(&self, session: &SearchSession, column: u16, row: u16) -> Option<usize> {
        if !contains(self.list, column, row) {
            return None;
        }
        let (start, end) = visible_window(
            session.items.len(),
            session.selected_index(),
            self.visible_rows(),
        );
        let index = start + ((row - self.list.y) / ITEM_HEIGHT) as usize;
        (index < end).then_some(index)
    }
}

/// Range of items to draw so that the selected one stays on screen.
pub fn visible_window(len: usize, selected: Option<usize>, capacity: usize) -> (usize, usize) {
    if capacity == 0 {
        return (0, 0);
    }
    let start = match selected {
        Some(index) if index >= capacity => index + 1 - capacity,
        _ => 0,
    };
    (start, (start + capacity).min(len))
}

/// The line above the results: progress, the settled query, or a prompt.
pub fn status_text(session: &SearchSession) -> String {
    if session.phase.is_loading() {
        LOADING_TEXT.to_string()
    } else if !session.settled.is_empty() {
        format!("검색어: \"{}\"", session.settled)
    } else {
        PROMPT_TEXT.to_string()
    }
}

pub fn render_search_dialog(
    frame: &mut Frame<'_>,
    options: &SearchModalOptions,
    state: &EmployeeSearchState,
    input: &TextInput,
) {
    let Some(session) = state.session() else {
        return;
    };
    let Some(regions) = modal(options).render(frame, true) else {
        return;
    };
    let layout = SearchDialogLayout::new(&regions);

    input.render(frame, layout.input, &options.placeholder, true);

    let status_color = if session.phase.is_loading() {
        STATUS_OK
    } else {
        MUTED_TEXT
    };
    let mut status_lines = vec![Line::from(Span::styled(
        status_text(session),
        Style::default().fg(status_color),
    ))];
    if let Some(error) = session.phase.error() {
        status_lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    frame.render_widget(Paragraph::new(status_lines), layout.status);

    if session.is_empty_result() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                EMPTY_TEXT,
                Style::default().fg(MUTED_TEXT),
            ))),
            layout.list,
        );
    } else {
        let selected = session.selected_index();
        let (start, end) = visible_window(session.items.len(), selected, layout.visible_rows());
        let lines: Vec<Line> = session.items[start..end]
            .iter()
            .enumerate()
            .flat_map(|(offset, employee)| {
                employee_item_lines(employee, selected == Some(start + offset))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), layout.list);
    }

    footer_buttons(session.selected_employee().is_some()).render(frame, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Employee;
    use crate::search::SearchPhase;

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_window(10, Some(0), 4), (0, 4));
        assert_eq!(visible_window(10, Some(5), 4), (2, 6));
        assert_eq!(visible_window(3, None, 4), (0, 3));
        assert_eq!(visible_window(3, Some(1), 0), (0, 0));
    }

    #[test]
    fn status_prefers_loading_then_query_then_prompt() {
        let mut session = SearchSession::default();
        assert_eq!(status_text(&session), PROMPT_TEXT);

        session.settled = "김철수".into();
        session.phase = SearchPhase::Ready;
        assert_eq!(status_text(&session), "검색어: \"김철수\"");

        session.phase = SearchPhase::Loading;
        assert_eq!(status_text(&session), LOADING_TEXT);
    }

    #[test]
    fn item_at_maps_rows_to_items() {
        let regions = modal(&SearchModalOptions::default()).regions(Rect::new(0, 0, 100, 40));
        let layout = SearchDialogLayout::new(&regions);
        let session = SearchSession {
            items: vec![Employee::new("1", "a"), Employee::new("2", "b")],
            selected: Some("1".into()),
            ..SearchSession::default()
        };

        let x = layout.list.x + 1;
        assert_eq!(layout.item_at(&session, x, layout.list.y), Some(0));
        assert_eq!(layout.item_at(&session, x, layout.list.y + 1), Some(0));
        assert_eq!(layout.item_at(&session, x, layout.list.y + 2), Some(1));
        assert_eq!(layout.item_at(&session, x, layout.list.y + 4), None);
        assert_eq!(layout.item_at(&session, x, layout.input.y), None);
    }
}
