//! Employee lookup sources.
//!
//! Widgets never talk to a concrete backend. They are handed an
//! [`EmployeeDirectory`] and only ever await `search`. The demo binary wires
//! in [`MockDirectory`] or [`FailingDirectory`]; tests wire in directories
//! whose responses they control.

mod employee;
mod function;
mod mock;
mod roster;

use async_trait::async_trait;
use thiserror::Error;

pub use employee::Employee;
pub use function::FnDirectory;
pub use mock::{sample_roster, EmptyDirectory, FailingDirectory, MockDirectory};
pub use roster::{load_roster, RosterError};

/// Message shown when a search fails without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "검색 중 오류가 발생했습니다.";

/// Failure reported by a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The backend rejected the lookup with a human-readable reason.
    #[error("{0}")]
    Rejected(String),

    /// The lookup failed and nothing explains why.
    #[error("search failed")]
    Unknown,
}

impl SearchError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Message suitable for inline display in a dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Asynchronous employee lookup.
///
/// Implementations must resolve with a (possibly empty) list or fail with a
/// [`SearchError`]. Callers pass the already-trimmed query.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Employee>, SearchError>;
}
