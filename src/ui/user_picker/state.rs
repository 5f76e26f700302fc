use crate::directory::Employee;
use crate::search::SearchPhase;
use crate::ui::mvi::UiState;

/// Which part of the picker dialog receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerFocus {
    #[default]
    Keyword,
    Table,
}

/// State of one open picker dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSession {
    pub keyword: String,
    pub phase: SearchPhase,
    pub rows: Vec<Employee>,
    pub selected: Option<String>,
    /// Zero-based page of `rows` on screen.
    pub page: usize,
    pub page_size: usize,
    pub focus: PickerFocus,
}

impl Default for PickerSession {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            phase: SearchPhase::Idle,
            rows: Vec::new(),
            selected: None,
            page: 0,
            page_size: 8,
            focus: PickerFocus::Keyword,
        }
    }
}

impl PickerSession {
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size.max(1)).max(1)
    }

    /// Rows on the current page, with their index into `rows`.
    pub fn page_rows(&self) -> impl Iterator<Item = (usize, &Employee)> {
        let size = self.page_size.max(1);
        self.rows
            .iter()
            .enumerate()
            .skip(self.page * size)
            .take(size)
    }

    pub fn selected_row(&self) -> Option<&Employee> {
        let id = self.selected.as_deref()?;
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.rows.iter().position(|row| row.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerDialogState {
    #[default]
    Hidden,
    Visible(PickerSession),
}

impl UiState for PickerDialogState {}

impl PickerDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn session(&self) -> Option<&PickerSession> {
        match self {
            Self::Visible(session) => Some(session),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|n| Employee::new(n.to_string(), format!("사원{n}")))
            .collect()
    }

    #[test]
    fn page_count_rounds_up_and_never_drops_below_one() {
        let mut session = PickerSession::default();
        assert_eq!(session.page_count(), 1);

        session.rows = rows(9);
        assert_eq!(session.page_count(), 2);

        session.rows = rows(16);
        assert_eq!(session.page_count(), 2);
    }

    #[test]
    fn page_rows_slice_the_current_page() {
        let session = PickerSession {
            rows: rows(10),
            page: 1,
            ..PickerSession::default()
        };
        let ids: Vec<_> = session.page_rows().map(|(_, row)| row.id.as_str()).collect();
        assert_eq!(ids, ["9", "10"]);
        assert_eq!(session.page_rows().next().map(|(index, _)| index), Some(8));
    }
}
