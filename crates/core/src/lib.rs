//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole quiz engine: the screen state machine,
//! deadline-based timing, scoring, and fuzzy answer matching. It has **zero
//! dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical sessions
//! - **Testable**: Timing takes explicit `Instant`s, so tests never sleep
//! - **Portable**: Can run under any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`question`]: immutable question data and the loaded bank
//! - [`game_state`]: session state machine, timers, scoring, wrong answers
//! - [`similarity`]: sequence-matching ratio for fuzzy half-credit
//! - [`scoring`]: streak multipliers and per-answer points
//! - [`config`]: menu-entry parsing with silent fallback to defaults
//! - [`rng`]: deterministic question selection
//! - [`snapshot`]: per-frame view handed to renderers
//!
//! # Game Rules
//!
//! - Answers are compared trimmed and case-folded; an exact match earns 10
//!   points times the streak multiplier, a near-miss at ratio >= 0.9 earns
//!   half credit, anything else is recorded as a wrong answer
//! - The streak multiplier is 1 until three consecutive correct answers,
//!   then grows as `streak - 1`
//! - Normal mode draws questions at random, never the same one twice in a
//!   row; clear mode removes each question once answered correctly and ends
//!   when the pool is empty
//! - All timers are absolute deadlines, so pausing shifts them wholesale on
//!   resume without drift
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use tui_quiz_core::game_state::GameState;
//! use tui_quiz_core::question::{Question, QuestionBank};
//! use tui_quiz_types::{GameAction, Screen};
//!
//! let bank = QuestionBank::new(vec![
//!     Question::new("2+2?", "4", ""),
//!     Question::new("3+3?", "6", ""),
//! ]);
//!
//! let now = Instant::now();
//! let mut game = GameState::new(bank, 12345);
//! game.apply_action(GameAction::StartNormal, now);
//! assert_eq!(game.screen(), Screen::Playing);
//!
//! // Type the right answer and submit it.
//! let answer: String = game.current().unwrap().answer.clone();
//! for ch in answer.chars() {
//!     game.apply_action(GameAction::Insert(ch), now);
//! }
//! game.apply_action(GameAction::Submit, now);
//! assert_eq!(game.score(), 10);
//! ```

pub mod config;
pub mod game_state;
pub mod question;
pub mod rng;
pub mod scoring;
pub mod similarity;
pub mod snapshot;

pub use tui_quiz_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{Feedback, GameState, WrongAnswer};
pub use question::{Question, QuestionBank};
pub use rng::SimpleRng;
pub use scoring::{answer_points, streak_multiplier};
pub use similarity::similarity_ratio;
pub use snapshot::{FeedbackView, QuizSnapshot};
