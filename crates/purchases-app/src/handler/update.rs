//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::info;

use super::{filter, keys::handle_key, rows, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Input Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => filter::handle_start_search(state),
        Message::EndSearch => filter::handle_end_search(state),
        Message::SearchInput { text } => filter::handle_search_input(state, text),

        // ─────────────────────────────────────────────────────────
        // Status Select Messages
        // ─────────────────────────────────────────────────────────
        Message::SetStatusFilter(status) => filter::handle_set_status(state, status),
        Message::NextStatusFilter => filter::handle_next_status(state),
        Message::PrevStatusFilter => filter::handle_prev_status(state),

        // ─────────────────────────────────────────────────────────
        // Row Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => rows::handle_select_next(state),
        Message::SelectPrev => rows::handle_select_prev(state),
        Message::SelectFirst => rows::handle_select_first(state),
        Message::SelectLast => rows::handle_select_last(state),
        Message::ToggleSelected => rows::handle_toggle_selected(state),
    }
}
