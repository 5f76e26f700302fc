use crate::directory::Employee;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Show the dialog with an empty keyword and no rows.
    Open { page_size: usize },

    Close,

    KeywordEdited { keyword: String },

    /// A lookup for the current keyword was issued.
    SearchStarted,

    /// The keyword was blank; rows and selection are dropped without a lookup.
    SearchCleared,

    SearchSucceeded { rows: Vec<Employee> },

    SearchFailed { message: String },

    SelectRow { id: String },

    /// Move the highlight by `delta` rows, following it across pages.
    MoveSelection { delta: isize },

    /// Flip by `delta` pages, clamped to the available pages.
    ChangePage { delta: isize },

    ToggleFocus,
}

impl Intent for PickerIntent {}
