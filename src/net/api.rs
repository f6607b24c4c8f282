//! HTTP helper for the chat ask endpoint.
//!
//! Client-side (hydrate): real `POST` via `gloo-net`.
//! Server-side (SSR): a stub that reports a network error, since the request
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not consulted. The endpoint reports application errors
//! as `{"error": ..}` bodies with 4xx/5xx statuses, so every body is decoded
//! and only unreadable or malformed bodies become [`AskError`]s.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AskError, AskReply};

/// Form field carrying the user's question.
pub const QUESTION_FIELD: &str = "question";

/// Content type of the outbound request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(any(test, feature = "hydrate"))]
fn form_body(encoded_question: &str) -> String {
    format!("{QUESTION_FIELD}={encoded_question}")
}

#[cfg(any(test, feature = "hydrate"))]
fn non_success_status_message(status: u16) -> String {
    format!("chat endpoint answered with status {status}")
}

/// Send `question` to `endpoint` and decode the reply.
///
/// # Errors
///
/// Returns [`AskError::Network`] if the request cannot be sent,
/// [`AskError::Body`] if the body cannot be read, and a decode error if the
/// body matches neither reply shape.
pub async fn ask(endpoint: &str, question: &str) -> Result<AskReply, AskError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(question));
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form_body(&encoded))
            .map_err(|e| AskError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;

        let status = resp.status();
        if !resp.ok() {
            leptos::logging::warn!("{}", non_success_status_message(status));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| AskError::Body { status, message: e.to_string() })?;
        AskReply::decode(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, question);
        Err(AskError::Network("not available on server".to_owned()))
    }
}
