//! Model-View-Intent primitives shared by the dialogs.
//!
//! ```text
//! key / mouse / async event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Anything with side effects (timers, directory
//! lookups, notifying the parent) lives in the widget that owns the state
//! and dispatches intents into it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
