use super::intent::Intent;
use super::state::UiState;

/// The only place dialog state changes.
///
/// `reduce` must be pure: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
