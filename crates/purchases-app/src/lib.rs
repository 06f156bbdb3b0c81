//! purchases-app - Application state and update logic for the purchase-history browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! `Message` values are fed through `handler::update`, which mutates `AppState`.
//! It also owns configuration loading and OS signal handling. It has no
//! dependency on the terminal library, so any front end can drive it.

pub mod config;
pub mod expansion;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use expansion::ExpansionState;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
