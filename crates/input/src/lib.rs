//! Terminal input module (engine-facing).
//!
//! This crate does not depend on any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Flapping is a
//! discrete input, so there is no held-key or auto-repeat handling: each key
//! press is exactly one action.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, should_quit};
