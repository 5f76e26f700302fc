//! Id-based row selection shared by the result list and the picker table.

use crate::directory::Employee;

/// Id of the row `delta` steps away from `current`, wrapping at either end.
///
/// With nothing selected, a forward step lands on the first row and a
/// backward step on the last. Returns `None` only for an empty list.
pub fn step_selection(items: &[Employee], current: Option<&str>, delta: isize) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let len = items.len() as isize;
    let position = current.and_then(|id| items.iter().position(|item| item.id == id));
    let next = match position {
        Some(index) => (index as isize + delta).rem_euclid(len),
        None if delta < 0 => len - 1,
        None => 0,
    };
    Some(items[next as usize].id.clone())
}

/// `id` if it names one of `items`, otherwise `None`.
pub fn existing_id(items: &[Employee], id: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.id.clone())
}

/// Id of the first row, the default highlight after a successful lookup.
pub fn first_id(items: &[Employee]) -> Option<String> {
    items.first().map(|item| item.id.clone())
}
