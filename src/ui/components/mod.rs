//! Small presentational building blocks used inside dialogs.

mod button;
mod input;

pub use button::{Button, ButtonRow, ButtonVariant};
pub use input::{render_text_field, FieldLook, TextInput};
