//! Message processing through the TEA update loop

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and any follow-up messages it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
