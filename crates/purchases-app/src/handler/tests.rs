//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::process::process_message;
use crate::expansion::ExpansionState;
use crate::state::{AppState, UiMode};
use purchases_core::{OrderId, StatusFilter};

fn visible_numbers(state: &AppState) -> Vec<String> {
    state
        .visible_orders()
        .iter()
        .map(|o| o.order_number.clone())
        .collect()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process_message(state, Message::Key(InputKey::Char(c)));
    }
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_quits_in_normal_mode() {
    let state = AppState::new().unwrap();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_in_every_mode() {
    let mut state = AppState::new().unwrap();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
    state.ui_mode = UiMode::SearchInput;
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_q_is_text_in_search_mode() {
    let mut state = AppState::new().unwrap();
    state.ui_mode = UiMode::SearchInput;
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::SearchInput { text: "q".into() })
    );
}

#[test]
fn test_digit_keys_pick_status_option() {
    let state = AppState::new().unwrap();
    assert_eq!(
        handle_key(&state, InputKey::Char('0')),
        Some(Message::SetStatusFilter(StatusFilter::All))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::SetStatusFilter(StatusFilter::Pending))
    );
    assert_eq!(handle_key(&state, InputKey::Char('4')), None);
}

#[test]
fn test_enter_and_space_toggle_row() {
    let state = AppState::new().unwrap();
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ToggleSelected)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char(' ')),
        Some(Message::ToggleSelected)
    );
}

// ─────────────────────────────────────────────────────────
// Search flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_slash_enters_search_mode() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
}

#[test]
fn test_search_updates_on_every_keystroke() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::StartSearch);

    type_text(&mut state, "s");
    assert_eq!(state.filter.search, "s");
    assert_eq!(visible_numbers(&state).len(), 4);

    type_text(&mut state, "i");
    assert_eq!(visible_numbers(&state), ["ORD-2024-001", "ORD-2024-002"]);

    type_text(&mut state, "lla");
    assert_eq!(state.filter.search, "silla");
    assert_eq!(visible_numbers(&state), ["ORD-2024-001", "ORD-2024-002"]);
}

#[test]
fn test_backspace_and_clear() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::StartSearch);
    type_text(&mut state, "zzz");
    assert!(state.visible_orders().is_empty());

    process_message(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.filter.search, "zz");

    process_message(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert_eq!(state.filter.search, "");
    assert_eq!(state.visible_orders().len(), 4);
}

#[test]
fn test_enter_leaves_search_keeping_query() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::StartSearch);
    type_text(&mut state, "mesa");
    process_message(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.filter.search, "mesa");
    assert_eq!(visible_numbers(&state), ["ORD-2024-004"]);
}

// ─────────────────────────────────────────────────────────
// Status select flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_cycles_status() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.filter.status, StatusFilter::Settled);
    process_message(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.filter.status, StatusFilter::Pending);
    assert_eq!(visible_numbers(&state), ["ORD-2024-003"]);

    process_message(&mut state, Message::Key(InputKey::BackTab));
    process_message(&mut state, Message::Key(InputKey::BackTab));
    process_message(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.filter.status, StatusFilter::Cancelled);
}

#[test]
fn test_search_and_status_combine() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::SetStatusFilter(StatusFilter::Settled));
    process_message(
        &mut state,
        Message::SearchInput {
            text: "plegable".into(),
        },
    );
    assert_eq!(visible_numbers(&state), ["ORD-2024-002"]);
}

// ─────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_selected_twice_restores() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::Key(InputKey::Down));
    process_message(&mut state, Message::Key(InputKey::Enter));
    assert!(state.is_expanded(OrderId(2)));
    assert!(!state.is_expanded(OrderId(1)));

    process_message(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.is_expanded(OrderId(2)));
    assert_eq!(state.expansion, ExpansionState::new());
}

#[test]
fn test_toggle_on_empty_list_is_noop() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::SearchInput { text: "zzz".into() });
    let result = update(&mut state, Message::ToggleSelected);
    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.expansion, ExpansionState::new());
}

#[test]
fn test_navigation_keys() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.selected, 3);
    process_message(&mut state, Message::Key(InputKey::Char('k')));
    assert_eq!(state.selected, 2);
    process_message(&mut state, Message::Key(InputKey::Char('g')));
    assert_eq!(state.selected, 0);
    process_message(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.selected, 1);
}

#[test]
fn test_key_message_returns_follow_up() {
    let mut state = AppState::new().unwrap();
    let result = update(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(result, UpdateResult::message(Message::StartSearch));
    // The follow-up has not been applied yet
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_quit_sets_phase() {
    let mut state = AppState::new().unwrap();
    process_message(&mut state, Message::Quit);
    assert!(state.should_quit());
}
