use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::directory::{Employee, EmployeeDirectory, EmptyDirectory};
use crate::search::{
    completion_sink, settled_sink, Debouncer, EventSink, SearchEvent, SearchOrchestrator,
    DEFAULT_DEBOUNCE_MS,
};
use crate::ui::components::TextInput;
use crate::ui::mvi::Reducer;

use super::dialog::{self, SearchDialogLayout, CLOSE_BUTTON, CONFIRM_BUTTON};
use super::intent::SearchIntent;
use super::reducer::SearchReducer;
use super::state::EmployeeSearchState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchModalOptions {
    pub title: String,
    pub description: String,
    /// Typed into the input on every open.
    pub initial_query: String,
    pub placeholder: String,
    pub debounce: Duration,
}

impl Default for SearchModalOptions {
    fn default() -> Self {
        Self {
            title: "사원 검색".to_string(),
            description: "이름/부서/이메일로 검색 후 사원을 선택하세요.".to_string(),
            initial_query: String::new(),
            placeholder: "예) 김철수 / 개발1팀 / chulsoo@company.com".to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

/// What the dialog asks of its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchModalOutput {
    /// An employee was confirmed. Always followed by `CloseRequested`.
    Selected(Employee),
    /// Close the dialog. The dialog stays open until the owner calls
    /// [`EmployeeSearchModal::close`].
    CloseRequested,
}

/// Employee search dialog: debounced input, race-safe lookups, a
/// selectable result list and explicit confirm.
///
/// The owner decides when the dialog is open (`open`/`close`) and routes
/// terminal input, async [`SearchEvent`]s and drawing to it.
pub struct EmployeeSearchModal {
    options: SearchModalOptions,
    state: EmployeeSearchState,
    input: TextInput,
    debouncer: Debouncer<String>,
    orchestrator: SearchOrchestrator,
}

macro_rules! dispatch {
    ($self:expr, $intent:expr) => {
        $self.state = SearchReducer::reduce(std::mem::take(&mut $self.state), $intent);
    };
}

impl EmployeeSearchModal {
    pub fn new(
        options: SearchModalOptions,
        directory: Arc<dyn EmployeeDirectory>,
        events: EventSink,
    ) -> Self {
        let debouncer = Debouncer::new(String::new(), options.debounce, settled_sink(&events));
        let orchestrator = SearchOrchestrator::new(directory, completion_sink(&events));
        Self {
            options,
            state: EmployeeSearchState::Hidden,
            input: TextInput::default(),
            debouncer,
            orchestrator,
        }
    }

    /// A dialog with no directory behind it: every lookup comes back empty.
    pub fn without_directory(options: SearchModalOptions, events: EventSink) -> Self {
        Self::new(options, Arc::new(EmptyDirectory), events)
    }

    pub fn options(&self) -> &SearchModalOptions {
        &self.options
    }

    pub fn state(&self) -> &EmployeeSearchState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    /// Show the dialog in a fresh session seeded with the initial query.
    ///
    /// A non-blank initial query is searched right away, without waiting
    /// for the debounce delay. Must be called from within a tokio runtime.
    pub fn open(&mut self) {
        let initial = self.options.initial_query.clone();
        tracing::info!("Opening employee search with {:?}", initial);

        self.orchestrator.cancel();
        self.debouncer.reset(initial.clone());
        self.input.set_value(initial.clone());
        dispatch!(
            self,
            SearchIntent::Open {
                initial_query: initial.clone()
            }
        );
        self.apply_settled(initial);
    }

    /// Hide the dialog. Pending timers and lookups are forgotten.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.debouncer.cancel();
        self.orchestrator.cancel();
        dispatch!(self, SearchIntent::Close);
    }

    /// Replace the query text as if typed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.input.set_value(query);
        self.query_edited();
    }

    /// Feed an event produced by this dialog's timer or lookup tasks.
    pub fn handle_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Settled(settled) => {
                let previous = self.debouncer.settled().clone();
                if let Some(value) = self.debouncer.accept(settled) {
                    if value != previous {
                        self.apply_settled(value);
                    }
                }
            }
            SearchEvent::Finished(completion) => {
                let Some(result) = self.orchestrator.accept(completion) else {
                    return;
                };
                match result {
                    Ok(items) => {
                        dispatch!(self, SearchIntent::SearchSucceeded { items });
                    }
                    Err(err) => {
                        let message = err.user_message();
                        dispatch!(self, SearchIntent::SearchFailed { message });
                    }
                }
            }
        }
    }

    pub fn select_item(&mut self, id: impl Into<String>) {
        dispatch!(self, SearchIntent::Select { id: id.into() });
    }

    pub fn move_selection(&mut self, delta: isize) {
        dispatch!(self, SearchIntent::MoveSelection { delta });
    }

    /// Emit the selected employee and a close request; nothing when no
    /// current result is selected.
    pub fn confirm(&mut self) -> Vec<SearchModalOutput> {
        let Some(employee) = self
            .state
            .session()
            .and_then(|session| session.selected_employee())
            .cloned()
        else {
            return Vec::new();
        };
        tracing::info!("Employee {} confirmed", employee.id);
        vec![
            SearchModalOutput::Selected(employee),
            SearchModalOutput::CloseRequested,
        ]
    }

    /// Route a terminal event. `screen` is the full frame area, needed to
    /// hit-test mouse presses.
    pub fn handle_input(&mut self, event: &Event, screen: Rect) -> Vec<SearchModalOutput> {
        let modal = dialog::modal(&self.options);
        if modal.dismissal(self.is_open(), screen, event).is_some() {
            return vec![SearchModalOutput::CloseRequested];
        }
        if !self.is_open() {
            return Vec::new();
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter => self.confirm(),
                KeyCode::Up => {
                    self.move_selection(-1);
                    Vec::new()
                }
                KeyCode::Down => {
                    self.move_selection(1);
                    Vec::new()
                }
                _ => {
                    if self.input.handle_key(*key) {
                        self.query_edited();
                    }
                    Vec::new()
                }
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let layout = SearchDialogLayout::new(&modal.regions(screen));
                self.handle_click(&layout, mouse.column, mouse.row)
            }
            Event::Paste(text) => {
                let mut value = self.input.value().to_string();
                value.push_str(text);
                self.set_query(value);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>) {
        dialog::render_search_dialog(frame, &self.options, &self.state, &self.input);
    }

    fn handle_click(
        &mut self,
        layout: &SearchDialogLayout,
        column: u16,
        row: u16,
    ) -> Vec<SearchModalOutput> {
        let Some(session) = self.state.session() else {
            return Vec::new();
        };

        if let Some(index) = layout.item_at(session, column, row) {
            let id = session.items[index].id.clone();
            self.select_item(id);
            return Vec::new();
        }

        let buttons = dialog::footer_buttons(session.selected_employee().is_some());
        match buttons.hit(layout.footer, column, row) {
            Some(CLOSE_BUTTON) => vec![SearchModalOutput::CloseRequested],
            Some(CONFIRM_BUTTON) => self.confirm(),
            _ => Vec::new(),
        }
    }

    fn query_edited(&mut self) {
        let query = self.input.value().to_string();
        self.debouncer.push(query.clone());
        dispatch!(self, SearchIntent::QueryEdited { query });
    }

    fn apply_settled(&mut self, query: String) {
        let trimmed = query.trim().to_string();
        dispatch!(self, SearchIntent::QuerySettled { query });
        if trimmed.is_empty() {
            self.orchestrator.cancel();
        } else {
            self.orchestrator.start(trimmed);
        }
    }
}
