use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::directory::EmployeeDirectory;
use crate::search::{completion_sink, EventSink, SearchEvent, SearchOrchestrator};
use crate::ui::components::TextInput;
use crate::ui::mvi::Reducer;

use super::dialog::{self, FieldLayout, PickerDialogLayout, CLOSE_BUTTON, CONFIRM_BUTTON};
use super::intent::PickerIntent;
use super::reducer::PickerReducer;
use super::state::{PickerDialogState, PickerFocus};
use super::value::{ControllableValue, PickerValue};

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub emp_no_placeholder: String,
    pub name_placeholder: String,
    pub modal_title: String,
    /// Show the employee-number box. The value keeps `emp_no` either way.
    pub show_emp_no: bool,
    pub disabled: bool,
    pub page_size: usize,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            emp_no_placeholder: "사번".to_string(),
            name_placeholder: "이름".to_string(),
            modal_title: "사용자 검색".to_string(),
            show_emp_no: true,
            disabled: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutput {
    /// The field value changed to this.
    Changed(PickerValue),
}

/// Read-only employee field with a search trigger that opens a
/// keyword/table dialog.
///
/// Unlike the search modal, the picker owns its dialog's open state.
pub struct UserPicker {
    options: PickerOptions,
    value: ControllableValue<PickerValue>,
    dialog: PickerDialogState,
    keyword: TextInput,
    orchestrator: SearchOrchestrator,
}

macro_rules! dispatch {
    ($self:expr, $intent:expr) => {
        $self.dialog = PickerReducer::reduce(std::mem::take(&mut $self.dialog), $intent);
    };
}

impl UserPicker {
    pub fn new(
        options: PickerOptions,
        directory: Arc<dyn EmployeeDirectory>,
        events: EventSink,
    ) -> Self {
        Self::with_value(options, PickerValue::default(), directory, events)
    }

    /// An uncontrolled picker whose field starts out holding `value`.
    pub fn with_value(
        options: PickerOptions,
        value: PickerValue,
        directory: Arc<dyn EmployeeDirectory>,
        events: EventSink,
    ) -> Self {
        Self {
            options,
            value: ControllableValue::uncontrolled(value),
            dialog: PickerDialogState::Hidden,
            keyword: TextInput::default(),
            orchestrator: SearchOrchestrator::new(directory, completion_sink(&events)),
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn set_show_emp_no(&mut self, show: bool) {
        self.options.show_emp_no = show;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// The value on display: the external one when controlled.
    pub fn value(&self) -> &PickerValue {
        self.value.get()
    }

    /// Make `value` authoritative (controlled), or hand ownership back to
    /// the picker with `None`.
    pub fn set_external_value(&mut self, value: Option<PickerValue>) {
        self.value.set_external(value);
    }

    pub fn dialog(&self) -> &PickerDialogState {
        &self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Open the dialog in a fresh state. Does nothing while disabled.
    pub fn open_dialog(&mut self) {
        if self.options.disabled {
            return;
        }
        tracing::info!("Opening user picker");
        self.orchestrator.cancel();
        self.keyword.set_value(String::new());
        dispatch!(
            self,
            PickerIntent::Open {
                page_size: self.options.page_size
            }
        );
    }

    pub fn close_dialog(&mut self) {
        self.orchestrator.cancel();
        dispatch!(self, PickerIntent::Close);
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.keyword.set_value(keyword);
        self.keyword_edited();
    }

    /// Look up the current keyword. A blank keyword clears the table
    /// without a lookup. Must be called from within a tokio runtime.
    pub fn search(&mut self) {
        if !self.is_open() {
            return;
        }
        let keyword = self.keyword.value().trim().to_string();
        if keyword.is_empty() {
            self.orchestrator.cancel();
            dispatch!(self, PickerIntent::SearchCleared);
            return;
        }
        self.orchestrator.start(keyword);
        dispatch!(self, PickerIntent::SearchStarted);
    }

    /// Feed a completion from this picker's lookups. Settled events are
    /// not produced by the picker and are ignored.
    pub fn handle_event(&mut self, event: SearchEvent) {
        let SearchEvent::Finished(completion) = event else {
            return;
        };
        let Some(result) = self.orchestrator.accept(completion) else {
            return;
        };
        match result {
            Ok(rows) => {
                dispatch!(self, PickerIntent::SearchSucceeded { rows });
            }
            Err(err) => {
                let message = err.user_message();
                dispatch!(self, PickerIntent::SearchFailed { message });
            }
        }
    }

    pub fn select_row(&mut self, id: impl Into<String>) {
        dispatch!(self, PickerIntent::SelectRow { id: id.into() });
    }

    pub fn move_selection(&mut self, delta: isize) {
        dispatch!(self, PickerIntent::MoveSelection { delta });
    }

    pub fn change_page(&mut self, delta: isize) {
        dispatch!(self, PickerIntent::ChangePage { delta });
    }

    /// Take the selected row as the new value and close. Nothing happens
    /// without a selection.
    pub fn confirm(&mut self) -> Option<PickerOutput> {
        let next = self
            .dialog
            .session()
            .and_then(|session| session.selected_row())
            .map(PickerValue::from)?;

        tracing::info!("Picker value set to {} ({})", next.name, next.emp_no);
        let reported = self.value.set(next);
        self.close_dialog();
        Some(PickerOutput::Changed(reported))
    }

    /// Route a terminal event. `screen` is the full frame area; `field` is
    /// where [`render_field`](Self::render_field) drew the picker.
    pub fn handle_input(&mut self, event: &Event, screen: Rect, field: Rect) -> Option<PickerOutput> {
        if !self.is_open() {
            self.handle_closed_input(event, field);
            return None;
        }

        let modal = dialog::modal(&self.options);
        if modal.dismissal(true, screen, event).is_some() {
            self.close_dialog();
            return None;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let focus = self.dialog.session().map(|s| s.focus).unwrap_or_default();
                match (key.code, focus) {
                    (KeyCode::Tab | KeyCode::BackTab, _) => {
                        dispatch!(self, PickerIntent::ToggleFocus);
                    }
                    (KeyCode::Enter, PickerFocus::Keyword) => self.search(),
                    (KeyCode::Enter, PickerFocus::Table) => return self.confirm(),
                    (KeyCode::Up, PickerFocus::Table) => self.move_selection(-1),
                    (KeyCode::Down, PickerFocus::Table) => self.move_selection(1),
                    (KeyCode::PageUp | KeyCode::Left, PickerFocus::Table) => self.change_page(-1),
                    (KeyCode::PageDown | KeyCode::Right, PickerFocus::Table) => {
                        self.change_page(1)
                    }
                    (KeyCode::PageUp, PickerFocus::Keyword) => self.change_page(-1),
                    (KeyCode::PageDown, PickerFocus::Keyword) => self.change_page(1),
                    (KeyCode::Down, PickerFocus::Keyword) => {
                        dispatch!(self, PickerIntent::ToggleFocus);
                    }
                    (_, PickerFocus::Keyword) => {
                        if self.keyword.handle_key(*key) {
                            self.keyword_edited();
                        }
                    }
                    _ => {}
                }
                None
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let layout = PickerDialogLayout::new(&modal.regions(screen));
                self.handle_click(&layout, mouse.column, mouse.row)
            }
            _ => None,
        }
    }

    pub fn render_field(&self, frame: &mut Frame<'_>, area: Rect) {
        dialog::render_field(frame, area, &self.options, self.value());
    }

    /// Draw the dialog on top of whatever is on screen; nothing when closed.
    pub fn render_dialog(&self, frame: &mut Frame<'_>) {
        dialog::render_picker_dialog(frame, &self.options, &self.dialog, &self.keyword);
    }

    fn handle_closed_input(&mut self, event: &Event, field: Rect) {
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) =>
            {
                self.open_dialog();
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let layout = FieldLayout::new(field, self.options.show_emp_no);
                if dialog::trigger_hit(&layout, self.options.disabled, mouse.column, mouse.row) {
                    self.open_dialog();
                }
            }
            _ => {}
        }
    }

    fn handle_click(
        &mut self,
        layout: &PickerDialogLayout,
        column: u16,
        row: u16,
    ) -> Option<PickerOutput> {
        let session = self.dialog.session()?;
        let loading = session.phase.is_loading();

        if let Some(index) = layout.row_at(session, column, row) {
            let id = session.rows[index].id.clone();
            self.select_row(id);
            return None;
        }

        let can_confirm = session.selected_row().is_some();
        if layout.search_hit(loading, column, row) {
            self.search();
            return None;
        }

        match dialog::footer_buttons(can_confirm).hit(layout.footer, column, row) {
            Some(CLOSE_BUTTON) => {
                self.close_dialog();
                None
            }
            Some(CONFIRM_BUTTON) => self.confirm(),
            _ => None,
        }
    }

    fn keyword_edited(&mut self) {
        let keyword = self.keyword.value().to_string();
        dispatch!(self, PickerIntent::KeywordEdited { keyword });
    }
}
