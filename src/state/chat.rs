#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AskError, AskReply};
use crate::util::clock;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    /// Host stylesheet class for messages of this origin.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "message user-message",
            Self::Bot => "message bot-message",
        }
    }
}

/// A single rendered chat message. Never mutated once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Render key only; does not correlate replies with requests.
    pub id: String,
    pub origin: Origin,
    pub text: String,
    /// Epoch milliseconds captured when the message was rendered.
    pub timestamp: f64,
    /// Localized `hour:minute` label derived from `timestamp`.
    pub time_label: String,
}

impl ChatMessage {
    pub fn new(origin: Origin, text: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            origin,
            text: text.into(),
            timestamp,
            time_label: clock::time_label(timestamp),
        }
    }
}

/// State for the chat panel.
///
/// `waiting` is a flag rather than a count of requests in flight: any reply
/// hides the indicator, even if an earlier submission is still pending.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub waiting: bool,
}

impl ChatState {
    /// State pre-populated with server-rendered history.
    pub fn with_history(history: Vec<ChatMessage>) -> Self {
        Self { messages: history, waiting: false }
    }

    /// Accept a submission.
    ///
    /// Returns the trimmed question to send, or `None` (and changes nothing)
    /// when the text is blank.
    pub fn submit(&mut self, raw: &str, now_ms: f64) -> Option<String> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Origin::User, question, now_ms));
        self.waiting = true;
        Some(question.to_owned())
    }

    /// Append the bot message for a decoded reply.
    pub fn receive_reply(&mut self, reply: &AskReply, now_ms: f64) {
        self.waiting = false;
        self.messages.push(ChatMessage::new(Origin::Bot, reply.display_text(), now_ms));
    }

    /// Append the fixed fallback bot message after a transport failure.
    pub fn receive_transport_failure(&mut self, fallback_text: &str, now_ms: f64) {
        self.waiting = false;
        self.messages.push(ChatMessage::new(Origin::Bot, fallback_text, now_ms));
    }

    /// Settle one request with whatever it produced.
    pub fn settle(&mut self, outcome: &Result<AskReply, AskError>, fallback_text: &str, now_ms: f64) {
        match outcome {
            Ok(reply) => self.receive_reply(reply, now_ms),
            Err(_) => self.receive_transport_failure(fallback_text, now_ms),
        }
    }

    /// CSS `display` value for the waiting indicator.
    pub fn indicator_display(&self) -> &'static str {
        if self.waiting { "block" } else { "none" }
    }
}
