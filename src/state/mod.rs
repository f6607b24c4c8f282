//! Client-side state for the chat widget.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on plain structs so they can be
//! exercised without a browser; components wrap them in `RwSignal`s.

pub mod chat;
