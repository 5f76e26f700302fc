/// Marker trait for dialog state.
///
/// `Default` is the hidden, pristine state a dialog returns to on close.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
