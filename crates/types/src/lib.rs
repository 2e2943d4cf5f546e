//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default global time budget for a session, in seconds.
pub const DEFAULT_GAME_LENGTH_SECS: u64 = 180;

/// Default per-question countdown, in seconds.
pub const DEFAULT_QUESTION_TIME_SECS: u64 = 15;

/// Frame interval for the host loop (milliseconds).
pub const TICK_MS: u64 = 16;

/// Points awarded for a fully correct answer before the streak multiplier.
pub const BASE_POINTS: u32 = 10;

/// Streak length at which the score multiplier starts to grow.
pub const STREAK_BONUS_MIN: u32 = 3;

/// Similarity ratio at or above which a near-miss answer earns half credit.
///
/// Two thresholds exist in the wild for this game (0.7 and 0.9); this build
/// uses the stricter 0.9 so that only genuine near-misses are rewarded.
pub const FUZZY_ACCEPT_RATIO: f64 = 0.9;

/// Recorded in place of the player's answer when the question timer expires.
pub const TIME_EXPIRED_ANSWER: &str = "(No answer - time expired)";

/// Top-level screens of the game.
///
/// `Playing` is the only screen on which timers advance and input is scored;
/// `Paused` freezes every deadline until resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Game modes selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Questions repeat indefinitely until the global budget runs out.
    Normal,
    /// Each question leaves the pool once answered correctly; the session
    /// ends when the pool is empty.
    Clear,
}

/// Discrete input events accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Insert(char),
    DeleteLast,
    Submit,
    PauseToggle,
    SoundToggle,
    LearningToggle,
    NextField,
    StartNormal,
    StartClear,
    Restart,
    MainMenu,
}

/// Editable numeric fields on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    GameLength,
    QuestionTime,
}

impl MenuField {
    pub fn next(&self) -> Self {
        match self {
            MenuField::GameLength => MenuField::QuestionTime,
            MenuField::QuestionTime => MenuField::GameLength,
        }
    }
}

/// Tone of a transient feedback message.
///
/// The renderer decides what color each tone maps to; the engine never deals
/// in colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    /// Full credit.
    Positive,
    /// Fuzzy match, half credit.
    Close,
    /// Incorrect answer.
    Negative,
    /// Informational ("Pass" on timeout).
    Neutral,
}

/// Fire-and-forget audio cues emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
}
