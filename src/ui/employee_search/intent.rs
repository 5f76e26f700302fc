use crate::directory::Employee;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Show the dialog in its pristine state, with `initial_query` typed in.
    Open { initial_query: String },

    Close,

    /// The input text changed.
    QueryEdited { query: String },

    /// The query stopped changing; a blank one returns to idle, anything
    /// else starts loading.
    QuerySettled { query: String },

    /// The current lookup resolved.
    SearchSucceeded { items: Vec<Employee> },

    /// The current lookup failed with a displayable message.
    SearchFailed { message: String },

    Select { id: String },

    /// Move the highlight by `delta` rows, wrapping at either end.
    MoveSelection { delta: isize },
}

impl Intent for SearchIntent {}
