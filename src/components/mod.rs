//! UI components for the chat widget.
//!
//! `chat_widget` owns the request cycle; `message_item` and
//! `typing_indicator` are presentational.

pub mod chat_widget;
pub mod message_item;
pub mod typing_indicator;
