//! Route-level pages.

pub mod chat;
