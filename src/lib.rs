//! Employee search and user picker widgets for terminal UIs.
//!
//! The search machinery ([`search`]) is independent of rendering: a
//! debouncer, a request guard and an orchestrator that drops superseded
//! lookups. The widgets in [`ui`] build on it with ratatui.

pub mod cli;
pub mod config;
pub mod directory;
pub mod logging;
pub mod search;
pub mod ui;
