//! Keyboard chord handling for the message input.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Key that submits the message when pressed without Shift.
pub const SUBMIT_KEY: &str = "Enter";

/// What a keydown in the message input should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Suppress the default newline and submit the message.
    Submit,
    /// Let the browser handle the key (Shift+Enter inserts a newline).
    Default,
}

/// Classify a keydown by its `key` value and Shift modifier.
pub fn key_action(key: &str, shift_held: bool) -> KeyAction {
    if key == SUBMIT_KEY && !shift_held {
        KeyAction::Submit
    } else {
        KeyAction::Default
    }
}
