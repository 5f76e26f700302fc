//! Terminal widgets and the demo application hosting them.

pub mod app;
pub mod components;
pub mod employee_item;
pub mod employee_search;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod terminal_guard;
pub mod theme;
pub mod user_picker;
