/// Marker trait for intents: user edits, selection moves, and settled
/// search outcomes that a reducer folds into state.
pub trait Intent: Send + 'static {}
