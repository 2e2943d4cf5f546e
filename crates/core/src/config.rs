//! Session timing configuration parsed from the menu's text fields.
//!
//! Invalid input is never an error: anything that does not parse as a
//! positive number of seconds silently falls back to the default.

use std::time::Duration;

use crate::types::{DEFAULT_GAME_LENGTH_SECS, DEFAULT_QUESTION_TIME_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Global time budget for the session.
    pub game_length: Duration,
    /// Countdown per question.
    pub question_time: Duration,
}

impl GameConfig {
    pub fn from_entries(game_length: &str, question_time: &str) -> Self {
        Self {
            game_length: parse_secs(game_length, DEFAULT_GAME_LENGTH_SECS),
            question_time: parse_secs(question_time, DEFAULT_QUESTION_TIME_SECS),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_length: Duration::from_secs(DEFAULT_GAME_LENGTH_SECS),
            question_time: Duration::from_secs(DEFAULT_QUESTION_TIME_SECS),
        }
    }
}

/// Parse a positive whole number of seconds, else the default.
pub fn parse_secs(entry: &str, default_secs: u64) -> Duration {
    match entry.trim().parse::<u64>() {
        Ok(n) if n > 0 => Duration::from_secs(n),
        _ => Duration::from_secs(default_secs),
    }
}
