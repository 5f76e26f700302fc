use crate::directory::Employee;
use crate::search::SearchPhase;
use crate::ui::mvi::UiState;

/// State of one open search dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSession {
    /// Text in the input, updated on every keystroke.
    pub query: String,
    /// Trimmed settled query that the current results belong to.
    pub settled: String,
    pub phase: SearchPhase,
    /// Results of the last successful lookup, in response order.
    pub items: Vec<Employee>,
    /// Id of the highlighted result; always one of `items` when set.
    pub selected: Option<String>,
}

impl SearchSession {
    pub fn pristine(query: String) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.items.iter().position(|item| item.id == id)
    }

    /// Resolve the selection against the current results.
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.selected_index().map(|index| &self.items[index])
    }

    /// True when a finished lookup found nobody.
    pub fn is_empty_result(&self) -> bool {
        self.phase == SearchPhase::Ready && !self.settled.is_empty() && self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EmployeeSearchState {
    #[default]
    Hidden,
    Visible(SearchSession),
}

impl UiState for EmployeeSearchState {}

impl EmployeeSearchState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn session(&self) -> Option<&SearchSession> {
        match self {
            Self::Visible(session) => Some(session),
            Self::Hidden => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.session().is_some_and(|s| s.phase.is_loading())
    }

    pub fn error(&self) -> Option<&str> {
        self.session().and_then(|s| s.phase.error())
    }

    pub fn items(&self) -> &[Employee] {
        self.session().map(|s| s.items.as_slice()).unwrap_or(&[])
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.session().and_then(|s| s.selected.as_deref())
    }

    pub fn query(&self) -> &str {
        self.session().map(|s| s.query.as_str()).unwrap_or("")
    }
}
