//! User picker: a read-only employee-number/name field whose trigger opens
//! a keyword search dialog with a paged result table.
//!
//! Same MVI split as the employee search dialog; `value.rs` holds the
//! controlled/uncontrolled field value.

mod dialog;
mod intent;
mod reducer;
mod state;
mod value;
mod widget;

pub use dialog::{FieldLayout, COLUMNS, HINT_TEXT, KEYWORD_PLACEHOLDER};
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::{PickerDialogState, PickerFocus, PickerSession};
pub use value::{ControllableValue, PickerValue};
pub use widget::{PickerOptions, PickerOutput, UserPicker, DEFAULT_PAGE_SIZE};
