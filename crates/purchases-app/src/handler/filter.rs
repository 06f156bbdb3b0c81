//! Search text and status select handlers

use purchases_core::StatusFilter;

use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Handle start search message (focus the search input)
pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

/// Handle end search message (return focus to the list, keep the query)
pub fn handle_end_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// Handle search input message. Applied on every keystroke.
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.set_search(text);
    UpdateResult::none()
}

pub fn handle_set_status(state: &mut AppState, status: StatusFilter) -> UpdateResult {
    state.set_status_filter(status);
    UpdateResult::none()
}

pub fn handle_next_status(state: &mut AppState) -> UpdateResult {
    let next = state.filter.status.next();
    state.set_status_filter(next);
    UpdateResult::none()
}

pub fn handle_prev_status(state: &mut AppState) -> UpdateResult {
    let prev = state.filter.status.prev();
    state.set_status_filter(prev);
    UpdateResult::none()
}
