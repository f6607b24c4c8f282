//! Wire types for the chat ask endpoint.
//!
//! DESIGN
//! ======
//! The endpoint answers with one of two JSON object shapes, `{"response": ..}`
//! or `{"error": ..}`. Both are decoded into the tagged [`AskReply`] so the
//! widget never renders a missing field. Anything else (non-JSON, non-object,
//! neither field present) is a transport-level [`AskError`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Prefix shown before application errors reported by the endpoint.
pub const ERROR_PREFIX: &str = "Error: ";

/// A successfully decoded reply body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AskReply {
    /// `{"response": "<text>"}`, shown verbatim.
    Answer(String),
    /// `{"error": "<message>"}`, shown with [`ERROR_PREFIX`].
    Failure(String),
}

/// Failure to obtain a usable reply body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to read response body (status {status}): {message}")]
    Body { status: u16, message: String },
    #[error("response is not valid JSON: {0}")]
    Decode(String),
    #[error("response has neither `response` nor `error`: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    response: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl AskReply {
    /// Decode a raw response body.
    ///
    /// A non-empty `error` wins over `response` when both are present, whatever
    /// `response` holds.
    ///
    /// # Errors
    ///
    /// Returns [`AskError::Decode`] when the body is not a JSON object with
    /// string fields, and [`AskError::Malformed`] when neither shape matches.
    pub fn decode(body: &str) -> Result<Self, AskError> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| AskError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`AskReply::decode`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, AskError> {
        if !value.is_object() {
            return Err(AskError::Malformed(value.to_string()));
        }
        let snapshot = value.to_string();
        let raw = RawReply::deserialize(value).map_err(|e| AskError::Decode(e.to_string()))?;

        match (raw.error, raw.response) {
            (Some(error), _) if !error.is_empty() => Ok(Self::Failure(error)),
            (_, Some(serde_json::Value::String(response))) => Ok(Self::Answer(response)),
            (_, Some(serde_json::Value::Null) | None) => Err(AskError::Malformed(snapshot)),
            (_, Some(other)) => Err(AskError::Decode(format!("`response` must be a string, got {other}"))),
        }
    }

    /// Text of the bot message rendered for this reply.
    pub fn display_text(&self) -> String {
        match self {
            Self::Answer(text) => text.clone(),
            Self::Failure(message) => format!("{ERROR_PREFIX}{message}"),
        }
    }
}
