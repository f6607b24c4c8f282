//! Small browser-adjacent helpers shared by the widget.

pub mod clock;
pub mod keys;
