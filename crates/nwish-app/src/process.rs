//! Message processing loop
//!
//! Runs a message through [`update`] and follows any chained messages,
//! collecting the actions the event loop has to perform.

use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Actions are returned in the order they were produced.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use nwish_core::Document;

    #[test]
    fn test_chained_messages_are_followed() {
        let mut state = AppState::new(Document::from_text("doc"), Settings::default());
        // Key -> EnterScreen -> RequestSize
        let actions = process_message(&mut state, Message::Key(InputKey::Char('c')));
        assert_eq!(actions, vec![UpdateAction::RequestSize]);
        assert!(state.screen().is_some());
    }

    #[test]
    fn test_unmapped_key_yields_nothing() {
        let mut state = AppState::new(Document::from_text("doc"), Settings::default());
        assert!(process_message(&mut state, Message::Key(InputKey::Enter)).is_empty());
    }
}
