//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values and flags the
//! interrupt chord. Every recognized key press yields exactly one command.

pub mod map;

pub use tui_lawn_types as types;

pub use map::{handle_key_event, is_interrupt, KeyCommand};
