//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Every key
//! press is one discrete action; there is no key-state tracking. Bindings are
//! fixed.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_press, key_action, should_quit};
