use crate::search::SearchPhase;
use crate::ui::mvi::Reducer;
use crate::ui::selection::{existing_id, first_id, step_selection};

use super::intent::SearchIntent;
use super::state::{EmployeeSearchState, SearchSession};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = EmployeeSearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut session = match state {
            EmployeeSearchState::Visible(session) => session,
            EmployeeSearchState::Hidden if matches!(intent, SearchIntent::Open { .. }) => {
                SearchSession::default()
            }
            EmployeeSearchState::Hidden => return EmployeeSearchState::Hidden,
        };

        match intent {
            SearchIntent::Open { initial_query } => {
                session = SearchSession::pristine(initial_query);
            }

            SearchIntent::Close => return EmployeeSearchState::Hidden,

            SearchIntent::QueryEdited { query } => session.query = query,

            SearchIntent::QuerySettled { query } => {
                session.settled = query.trim().to_string();
                if session.settled.is_empty() {
                    session.phase = SearchPhase::Idle;
                    session.items.clear();
                    session.selected = None;
                } else {
                    session.phase = SearchPhase::Loading;
                }
            }

            SearchIntent::SearchSucceeded { items } => {
                session.selected = first_id(&items);
                session.items = items;
                session.phase = SearchPhase::Ready;
            }

            SearchIntent::SearchFailed { message } => {
                session.phase = SearchPhase::Failed { message };
                session.items.clear();
                session.selected = None;
            }

            SearchIntent::Select { id } => {
                if let Some(id) = existing_id(&session.items, &id) {
                    session.selected = Some(id);
                }
            }

            SearchIntent::MoveSelection { delta } => {
                session.selected =
                    step_selection(&session.items, session.selected.as_deref(), delta);
            }
        }

        EmployeeSearchState::Visible(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Employee;

    fn open(initial_query: &str) -> EmployeeSearchState {
        SearchReducer::reduce(
            EmployeeSearchState::Hidden,
            SearchIntent::Open {
                initial_query: initial_query.into(),
            },
        )
    }

    fn loaded(items: Vec<Employee>) -> EmployeeSearchState {
        let state = SearchReducer::reduce(
            open(""),
            SearchIntent::QuerySettled {
                query: "개발".into(),
            },
        );
        SearchReducer::reduce(state, SearchIntent::SearchSucceeded { items })
    }

    fn roster() -> Vec<Employee> {
        vec![Employee::new("1", "김철수"), Employee::new("2", "이영희")]
    }

    #[test]
    fn open_is_pristine_with_initial_query() {
        let state = open("개발");
        let session = state.session().unwrap();
        assert_eq!(session.query, "개발");
        assert_eq!(session.settled, "");
        assert_eq!(session.phase, SearchPhase::Idle);
        assert!(session.items.is_empty());
        assert_eq!(session.selected, None);
    }

    #[test]
    fn reopen_discards_previous_session() {
        let state = SearchReducer::reduce(
            loaded(roster()),
            SearchIntent::Open {
                initial_query: String::new(),
            },
        );
        assert_eq!(state, open(""));
    }

    #[test]
    fn settled_query_is_trimmed_and_starts_loading() {
        let state = SearchReducer::reduce(
            open(""),
            SearchIntent::QuerySettled {
                query: "  김철수 ".into(),
            },
        );
        assert!(state.is_loading());
        assert_eq!(state.session().unwrap().settled, "김철수");
    }

    #[test]
    fn loading_keeps_previous_results() {
        let state = SearchReducer::reduce(
            loaded(roster()),
            SearchIntent::QuerySettled { query: "이".into() },
        );
        assert!(state.is_loading());
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn blank_settled_query_returns_to_idle() {
        let state = SearchReducer::reduce(
            loaded(roster()),
            SearchIntent::QuerySettled { query: "   ".into() },
        );
        let session = state.session().unwrap();
        assert_eq!(session.phase, SearchPhase::Idle);
        assert!(session.items.is_empty());
        assert_eq!(session.selected, None);
    }

    #[test]
    fn success_selects_first_item() {
        let state = loaded(roster());
        assert_eq!(state.selected_id(), Some("1"));
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_success_selects_nothing() {
        let state = loaded(Vec::new());
        assert_eq!(state.selected_id(), None);
        assert!(state.session().unwrap().is_empty_result());
    }

    #[test]
    fn failure_clears_results_and_selection() {
        let state = SearchReducer::reduce(
            loaded(roster()),
            SearchIntent::SearchFailed {
                message: "서버 오류".into(),
            },
        );
        assert_eq!(state.error(), Some("서버 오류"));
        assert!(state.items().is_empty());
        assert_eq!(state.selected_id(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn next_settled_query_clears_error() {
        let failed = SearchReducer::reduce(
            loaded(roster()),
            SearchIntent::SearchFailed {
                message: "서버 오류".into(),
            },
        );
        let state = SearchReducer::reduce(failed, SearchIntent::QuerySettled { query: "김".into() });
        assert_eq!(state.error(), None);
    }

    #[test]
    fn select_ignores_unknown_ids() {
        let state = SearchReducer::reduce(loaded(roster()), SearchIntent::Select { id: "9".into() });
        assert_eq!(state.selected_id(), Some("1"));

        let state = SearchReducer::reduce(state, SearchIntent::Select { id: "2".into() });
        assert_eq!(state.selected_id(), Some("2"));
    }

    #[test]
    fn move_selection_wraps() {
        let state = SearchReducer::reduce(loaded(roster()), SearchIntent::MoveSelection { delta: -1 });
        assert_eq!(state.selected_id(), Some("2"));
    }

    #[test]
    fn intents_on_hidden_dialog_are_ignored() {
        let state = SearchReducer::reduce(
            EmployeeSearchState::Hidden,
            SearchIntent::SearchSucceeded { items: roster() },
        );
        assert_eq!(state, EmployeeSearchState::Hidden);
    }

    #[test]
    fn close_hides() {
        let state = SearchReducer::reduce(loaded(roster()), SearchIntent::Close);
        assert!(!state.is_visible());
    }
}
