use crate::search::SearchPhase;
use crate::ui::mvi::Reducer;
use crate::ui::selection::{existing_id, first_id, step_selection};

use super::intent::PickerIntent;
use super::state::{PickerDialogState, PickerFocus, PickerSession};

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerDialogState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if let PickerIntent::Open { page_size } = intent {
            return PickerDialogState::Visible(PickerSession {
                page_size: page_size.max(1),
                ..PickerSession::default()
            });
        }

        let PickerDialogState::Visible(mut session) = state else {
            return PickerDialogState::Hidden;
        };

        match intent {
            PickerIntent::Open { .. } | PickerIntent::Close => {
                return PickerDialogState::Hidden;
            }

            PickerIntent::KeywordEdited { keyword } => session.keyword = keyword,

            PickerIntent::SearchStarted => session.phase = SearchPhase::Loading,

            PickerIntent::SearchCleared => {
                session.phase = SearchPhase::Idle;
                session.rows.clear();
                session.selected = None;
                session.page = 0;
            }

            PickerIntent::SearchSucceeded { rows } => {
                session.selected = first_id(&rows);
                session.rows = rows;
                session.phase = SearchPhase::Ready;
                session.page = 0;
            }

            PickerIntent::SearchFailed { message } => {
                session.phase = SearchPhase::Failed { message };
                session.rows.clear();
                session.selected = None;
                session.page = 0;
            }

            PickerIntent::SelectRow { id } => {
                if let Some(id) = existing_id(&session.rows, &id) {
                    session.selected = Some(id);
                }
            }

            PickerIntent::MoveSelection { delta } => {
                session.selected =
                    step_selection(&session.rows, session.selected.as_deref(), delta);
                if let Some(index) = session.selected_index() {
                    session.page = index / session.page_size.max(1);
                }
            }

            PickerIntent::ChangePage { delta } => {
                let last = session.page_count() - 1;
                session.page = session.page.saturating_add_signed(delta).min(last);
            }

            PickerIntent::ToggleFocus => {
                session.focus = match session.focus {
                    PickerFocus::Keyword => PickerFocus::Table,
                    PickerFocus::Table => PickerFocus::Keyword,
                };
            }
        }

        PickerDialogState::Visible(session)
    }
}
