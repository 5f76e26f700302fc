//! Employee search dialog.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state enum and the per-open session
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering and hit-testing
//! - `widget.rs` - The stateful widget owning the debouncer and lookups

mod dialog;
mod intent;
mod reducer;
mod state;
mod widget;

pub use dialog::{EMPTY_TEXT, LOADING_TEXT, PROMPT_TEXT};
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{EmployeeSearchState, SearchSession};
pub use widget::{EmployeeSearchModal, SearchModalOptions, SearchModalOutput};
