//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It
//! intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that is flushed to the terminal with run-level
//! diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Let the whole screen layout be unit-tested against the framebuffer

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_quiz_core as core;
pub use tui_quiz_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{wrap_text, GameView, Viewport};
pub use renderer::TerminalRenderer;
