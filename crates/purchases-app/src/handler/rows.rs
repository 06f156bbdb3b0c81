//! Row cursor and expand/collapse handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.select_next();
    UpdateResult::none()
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    state.select_prev();
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.select_first();
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.select_last();
    UpdateResult::none()
}

/// Toggle the row under the cursor. No-op when the list is empty.
pub fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    state.toggle_selected();
    UpdateResult::none()
}
