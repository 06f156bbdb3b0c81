//! Key event handlers for different UI modes

use purchases_core::StatusFilter;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave input mode, keeping the query
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut query = state.filter.search.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut query = state.filter.search.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Tab => Some(Message::NextStatusFilter),
        InputKey::BackTab => Some(Message::PrevStatusFilter),
        InputKey::Char(c @ '0'..='3') => c
            .to_digit(10)
            .and_then(|d| StatusFilter::from_index(d as usize))
            .map(Message::SetStatusFilter),

        // ─────────────────────────────────────────────────────────
        // Rows
        // ─────────────────────────────────────────────────────────
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),

        _ => None,
    }
}
