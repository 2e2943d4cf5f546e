//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_quiz_types::GameAction`] based on the
//! screen currently shown, since the same key means different things on the
//! menu and mid-game.

pub mod map;

pub use tui_quiz_types as types;

pub use map::{map_key, should_quit};
