//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use purchases_core::StatusFilter;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Input Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the search input
    StartSearch,
    /// Leave the search input, keeping the query
    EndSearch,
    /// Replace the search text (sent on every keystroke)
    SearchInput { text: String },

    // ─────────────────────────────────────────────────────────
    // Status Select Messages
    // ─────────────────────────────────────────────────────────
    /// Pick a status option directly
    SetStatusFilter(StatusFilter),
    /// Cycle to the next status option
    NextStatusFilter,
    /// Cycle to the previous status option
    PrevStatusFilter,

    // ─────────────────────────────────────────────────────────
    // Row Messages
    // ─────────────────────────────────────────────────────────
    /// Move the row cursor down
    SelectNext,
    /// Move the row cursor up
    SelectPrev,
    /// Jump to the first visible row
    SelectFirst,
    /// Jump to the last visible row
    SelectLast,
    /// Toggle details of the row under the cursor
    ToggleSelected,
}
