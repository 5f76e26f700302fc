//! Rendering and hit-testing for the picker field and its dialog.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::ui::components::{render_text_field, Button, ButtonRow, FieldLook, TextInput};
use crate::ui::modal::{Modal, ModalRegions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, TEXT};

use super::state::{PickerDialogState, PickerFocus, PickerSession};
use super::value::PickerValue;
use super::widget::PickerOptions;

const DIALOG_WIDTH: u16 = 72;
const INPUT_HEIGHT: u16 = 3;
const EMP_NO_WIDTH: u16 = 14;
const TRIGGER_WIDTH: u16 = 8;

pub const HINT_TEXT: &str = "행을 클릭해서 사용자를 선택한 뒤 “선택”을 누르세요.";
pub const KEYWORD_PLACEHOLDER: &str = "이름/사번/부서 등으로 검색";
pub const SEARCH_LABEL: &str = "검색";
pub const COLUMNS: [&str; 3] = ["사번", "이름", "부서"];

pub const CLOSE_BUTTON: usize = 0;
pub const CONFIRM_BUTTON: usize = 1;

/// Dialog height for a table of `page_size` rows: borders, hint, footer,
/// keyword box, status line, table header and pager line.
fn dialog_height(page_size: usize) -> u16 {
    let rows = page_size.min(u16::MAX as usize / 2) as u16;
    11 + rows
}

pub fn modal(options: &PickerOptions) -> Modal<'_> {
    Modal::new(DIALOG_WIDTH, dialog_height(options.page_size))
        .title(&options.modal_title)
        .description(HINT_TEXT)
        .with_footer()
}

pub fn footer_buttons(can_confirm: bool) -> ButtonRow<'static> {
    ButtonRow::new(vec![
        Button::ghost("닫기"),
        Button::new("선택").disabled(!can_confirm),
    ])
}

/// Areas of the closed picker field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub emp_no: Option<Rect>,
    pub name: Rect,
    pub trigger: Rect,
}

impl FieldLayout {
    pub fn new(area: Rect, show_emp_no: bool) -> Self {
        if show_emp_no {
            let [emp_no, name, trigger] = Layout::horizontal([
                Constraint::Length(EMP_NO_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(TRIGGER_WIDTH),
            ])
            .areas(area);
            Self {
                emp_no: Some(emp_no),
                name,
                trigger: button_line(trigger),
            }
        } else {
            let [name, trigger] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(TRIGGER_WIDTH)])
                    .areas(area);
            Self {
                emp_no: None,
                name,
                trigger: button_line(trigger),
            }
        }
    }
}

/// The middle row of a three-row field, where a button sits.
fn button_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn trigger_button(disabled: bool) -> ButtonRow<'static> {
    ButtonRow::new(vec![Button::new(SEARCH_LABEL).disabled(disabled)])
}

/// True when (`column`, `row`) hits the enabled search trigger.
pub fn trigger_hit(layout: &FieldLayout, disabled: bool, column: u16, row: u16) -> bool {
    trigger_button(disabled).hit(layout.trigger, column, row).is_some()
}

pub fn render_field(frame: &mut Frame<'_>, area: Rect, options: &PickerOptions, value: &PickerValue) {
    let layout = FieldLayout::new(area, options.show_emp_no);
    let look = if options.disabled {
        FieldLook::Disabled
    } else {
        FieldLook::Normal
    };

    if let Some(emp_no) = layout.emp_no {
        render_text_field(frame, emp_no, &value.emp_no, &options.emp_no_placeholder, look);
    }
    render_text_field(frame, layout.name, &value.name, &options.name_placeholder, look);
    trigger_button(options.disabled).render(frame, layout.trigger);
}

/// Sub-areas of the open dialog's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerDialogLayout {
    pub keyword: Rect,
    pub search: Rect,
    pub status: Rect,
    pub table: Rect,
    pub pager: Rect,
    pub footer: Rect,
}

impl PickerDialogLayout {
    pub fn new(regions: &ModalRegions) -> Self {
        let [input_row, status, table, pager] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(regions.body);
        let [keyword, search] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(TRIGGER_WIDTH)])
                .areas(input_row);

        Self {
            keyword,
            search: button_line(search),
            status,
            table,
            pager,
            footer: regions.footer,
        }
    }

    /// Index into `session.rows` of the table row under (`column`, `row`).
    pub fn row_at(&self, session: &PickerSession, column: u16, row: u16) -> Option<usize> {
        if column < self.table.x || column >= self.table.right() {
            return None;
        }
        // First table line is the header.
        let offset = row.checked_sub(self.table.y + 1)? as usize;
        if row >= self.table.bottom() {
            return None;
        }
        session
            .page_rows()
            .nth(offset)
            .map(|(index, _)| index)
    }

    pub fn search_hit(&self, loading: bool, column: u16, row: u16) -> bool {
        trigger_button(loading).hit(self.search, column, row).is_some()
    }
}

pub fn render_picker_dialog(
    frame: &mut Frame<'_>,
    options: &PickerOptions,
    state: &PickerDialogState,
    keyword: &TextInput,
) {
    let Some(session) = state.session() else {
        return;
    };
    let Some(regions) = modal(options).render(frame, true) else {
        return;
    };
    let layout = PickerDialogLayout::new(&regions);
    let loading = session.phase.is_loading();

    keyword.render(
        frame,
        layout.keyword,
        KEYWORD_PLACEHOLDER,
        session.focus == PickerFocus::Keyword,
    );
    trigger_button(loading).render(frame, layout.search);

    let status = if loading {
        Span::styled("검색 중...", Style::default().fg(STATUS_OK))
    } else if let Some(error) = session.phase.error() {
        Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(Line::from(status)), layout.status);

    render_table(frame, layout.table, session);

    let pager = format!(
        "{} / {}  (PgUp/PgDn)",
        session.page + 1,
        session.page_count()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(pager, Style::default().fg(MUTED_TEXT))))
            .alignment(Alignment::Right),
        layout.pager,
    );

    footer_buttons(session.selected_row().is_some()).render(frame, layout.footer);
}

fn render_table(frame: &mut Frame<'_>, area: Rect, session: &PickerSession) {
    let header = Row::new(COLUMNS.map(|title| {
        Cell::from(title).style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    }));

    let selected = session.selected.as_deref();
    let rows: Vec<Row> = session
        .page_rows()
        .map(|(_, employee)| {
            let style = if selected == Some(employee.id.as_str()) {
                Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(TEXT)
            };
            Row::new(vec![
                Cell::from(employee.emp_no.as_str()),
                Cell::from(employee.name.as_str()),
                Cell::from(employee.department.as_deref().unwrap_or("")),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(8),
        ],
    )
    .header(header);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Employee;

    #[test]
    fn field_hides_emp_no_box_on_request() {
        let area = Rect::new(0, 0, 40, 3);
        let with = FieldLayout::new(area, true);
        assert_eq!(with.emp_no, Some(Rect::new(0, 0, 14, 3)));
        assert_eq!(with.trigger, Rect::new(32, 1, 8, 1));

        let without = FieldLayout::new(area, false);
        assert_eq!(without.emp_no, None);
        assert_eq!(without.name, Rect::new(0, 0, 32, 3));
    }

    #[test]
    fn disabled_trigger_is_not_hit() {
        let layout = FieldLayout::new(Rect::new(0, 0, 40, 3), true);
        let x = layout.trigger.right() - 2;
        assert!(trigger_hit(&layout, false, x, 1));
        assert!(!trigger_hit(&layout, true, x, 1));
    }

    #[test]
    fn row_at_skips_header_and_follows_page() {
        let options = PickerOptions {
            page_size: 2,
            ..PickerOptions::default()
        };
        let regions = modal(&options).regions(Rect::new(0, 0, 100, 40));
        let layout = PickerDialogLayout::new(&regions);
        let session = PickerSession {
            rows: (1..=3).map(|n| Employee::new(n.to_string(), "x")).collect(),
            page: 1,
            page_size: 2,
            ..PickerSession::default()
        };

        let x = layout.table.x + 1;
        assert_eq!(layout.row_at(&session, x, layout.table.y), None);
        assert_eq!(layout.row_at(&session, x, layout.table.y + 1), Some(2));
        assert_eq!(layout.row_at(&session, x, layout.table.y + 2), None);
    }
}
