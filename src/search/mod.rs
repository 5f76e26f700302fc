//! Search request lifecycle: debounce the query, issue lookups, and drop
//! whatever a newer request has superseded.
//!
//! ```text
//! keystroke ──→ Debouncer ──(Settled)──→ SearchOrchestrator ──(Completion)──→ widget state
//! ```
//!
//! Both timer and lookup tasks report through a [`SearchEvent`] sink, so
//! the owning widget sees them on the same event loop as key presses.

mod debounce;
mod guard;
mod orchestrator;

use std::sync::Arc;

pub use debounce::{Debouncer, Settled, SettledSink};
pub use guard::{RequestGuard, Ticket};
pub use orchestrator::{CompletionSink, SearchCompletion, SearchOrchestrator};

/// Debounce delay used by the employee search dialog.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Where a search session stands.
///
/// Loading keeps previously shown results on screen; only success replaces
/// them and only failure or an empty query clears them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No query to search for.
    #[default]
    Idle,
    /// A lookup is outstanding.
    Loading,
    /// The latest lookup succeeded (possibly with no results).
    Ready,
    /// The latest lookup failed.
    Failed { message: String },
}

impl SearchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Asynchronous notification addressed to a search widget.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// The query stopped changing for the debounce delay.
    Settled(Settled<String>),
    /// A directory lookup finished.
    Finished(SearchCompletion),
}

/// Where search widgets deliver their asynchronous events.
pub type EventSink = Arc<dyn Fn(SearchEvent) + Send + Sync>;

pub(crate) fn settled_sink(sink: &EventSink) -> SettledSink<String> {
    let sink = Arc::clone(sink);
    Arc::new(move |settled| sink(SearchEvent::Settled(settled)))
}

pub(crate) fn completion_sink(sink: &EventSink) -> CompletionSink {
    let sink = Arc::clone(sink);
    Arc::new(move |completion| sink(SearchEvent::Finished(completion)))
}
