//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the form-encoded `POST` to the ask endpoint, and `types`
//! defines the two reply shapes plus the transport error taxonomy.

pub mod api;
pub mod types;
