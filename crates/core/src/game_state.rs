//! Game state module - the session state machine, timing and scoring.
//!
//! `GameState` owns the whole mutable session and is driven from the host
//! loop through three entry points: `apply_action` for discrete input
//! events, `tick` once per frame, and `snapshot` for rendering. Every
//! operation takes the current `Instant` so the engine itself never reads
//! the clock, which keeps all timing behavior testable.
//!
//! All timers are stored as absolute deadlines. Pausing captures a single
//! timestamp; resuming shifts every outstanding deadline forward by the
//! paused duration, so pause/resume is timer-neutral for any pause length.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::question::{Question, QuestionBank};
use crate::rng::SimpleRng;
use crate::scoring::{answer_points, streak_multiplier};
use crate::similarity::similarity_ratio;
use crate::snapshot::{FeedbackView, QuizSnapshot};
use crate::types::{
    FeedbackTone, GameAction, GameMode, MenuField, Screen, SoundCue, DEFAULT_GAME_LENGTH_SECS,
    DEFAULT_QUESTION_TIME_SECS, FUZZY_ACCEPT_RATIO, TIME_EXPIRED_ANSWER,
};

/// One missed question, kept for the end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub question: String,
    pub correct_answer: String,
    /// The literal submitted text, or a sentinel when the timer expired.
    pub user_answer: String,
    pub extra_info: String,
}

impl WrongAnswer {
    fn submitted(question: &Question, user_answer: &str) -> Self {
        Self {
            question: question.prompt.clone(),
            correct_answer: question.answer.clone(),
            user_answer: user_answer.to_string(),
            extra_info: question.info.clone(),
        }
    }

    fn timed_out(question: &Question) -> Self {
        Self {
            question: question.prompt.clone(),
            correct_answer: question.answer.clone(),
            user_answer: TIME_EXPIRED_ANSWER.to_string(),
            extra_info: question.info.clone(),
        }
    }
}

/// Transient on-screen message with a tone the renderer maps to a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: FeedbackTone,
}

impl Feedback {
    fn new(text: impl Into<String>, tone: FeedbackTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameState {
    screen: Screen,
    mode: GameMode,
    bank: QuestionBank,
    /// Remaining questions in clear mode (a copy of the bank per session).
    pool: Vec<Question>,
    rng: SimpleRng,

    config: GameConfig,
    game_length_entry: String,
    question_time_entry: String,
    menu_focus: MenuField,

    current: Option<Question>,
    /// Absolute deadline for the global time budget.
    game_deadline: Option<Instant>,
    /// Absolute deadline for the current question.
    question_deadline: Option<Instant>,
    /// Feedback stays visible until this deadline.
    feedback_deadline: Option<Instant>,
    /// Set only while paused.
    pause_started: Option<Instant>,

    input: String,
    feedback: Option<Feedback>,
    /// Previous question's answer and info, for learning mode.
    last_answer: String,
    last_info: String,

    learning_mode: bool,
    sound_enabled: bool,

    score: u32,
    streak: u32,
    answered: u32,
    /// Correct count in half-units: exact answers add 2, fuzzy answers 1.
    correct_halves: u32,
    clear_correct: u32,

    wrong_answers: Vec<WrongAnswer>,
    pending_report: Option<Vec<WrongAnswer>>,
    report_path: Option<PathBuf>,
    pending_cue: Option<SoundCue>,
}

impl GameState {
    /// Create a new engine on the menu screen.
    ///
    /// The bank must be non-empty; loaders enforce this before the engine
    /// is ever constructed.
    pub fn new(bank: QuestionBank, seed: u32) -> Self {
        debug_assert!(!bank.is_empty(), "question bank must not be empty");
        Self {
            screen: Screen::Menu,
            mode: GameMode::Normal,
            bank,
            pool: Vec::new(),
            rng: SimpleRng::new(seed),
            config: GameConfig::default(),
            game_length_entry: DEFAULT_GAME_LENGTH_SECS.to_string(),
            question_time_entry: DEFAULT_QUESTION_TIME_SECS.to_string(),
            menu_focus: MenuField::GameLength,
            current: None,
            game_deadline: None,
            question_deadline: None,
            feedback_deadline: None,
            pause_started: None,
            input: String::new(),
            feedback: None,
            last_answer: String::new(),
            last_info: String::new(),
            learning_mode: false,
            sound_enabled: true,
            score: 0,
            streak: 0,
            answered: 0,
            correct_halves: 0,
            clear_correct: 0,
            wrong_answers: Vec::new(),
            pending_report: None,
            report_path: None,
            pending_cue: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    /// Correct count; fuzzy matches contribute 0.5.
    pub fn correct_count(&self) -> f64 {
        self.correct_halves as f64 / 2.0
    }

    pub fn clear_correct(&self) -> u32 {
        self.clear_correct
    }

    pub fn pool_remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn wrong_answers(&self) -> &[WrongAnswer] {
        &self.wrong_answers
    }

    pub fn learning_mode(&self) -> bool {
        self.learning_mode
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn report_path(&self) -> Option<&PathBuf> {
        self.report_path.as_ref()
    }

    /// Remaining global budget at `now` (zero-clamped).
    pub fn remaining_game_time(&self, now: Instant) -> Option<Duration> {
        self.game_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Remaining time on the current question at `now` (zero-clamped).
    pub fn remaining_question_time(&self, now: Instant) -> Option<Duration> {
        self.question_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Apply a discrete input event.
    pub fn apply_action(&mut self, action: GameAction, now: Instant) {
        match action {
            GameAction::SoundToggle => self.sound_enabled = !self.sound_enabled,
            GameAction::LearningToggle => self.learning_mode = !self.learning_mode,
            GameAction::PauseToggle => match self.screen {
                Screen::Playing => self.pause(now),
                Screen::Paused => self.resume(now),
                _ => {}
            },
            GameAction::Insert(ch) => match self.screen {
                Screen::Playing => self.input.push(ch),
                Screen::Menu => self.menu_entry_mut().push(ch),
                _ => {}
            },
            GameAction::DeleteLast => match self.screen {
                Screen::Playing => {
                    self.input.pop();
                }
                Screen::Menu => {
                    self.menu_entry_mut().pop();
                }
                _ => {}
            },
            GameAction::Submit => {
                if self.screen == Screen::Playing {
                    self.submit(now);
                }
            }
            GameAction::NextField => {
                if self.screen == Screen::Menu {
                    self.menu_focus = self.menu_focus.next();
                    // The focused field starts fresh so typing overwrites it.
                    self.menu_entry_mut().clear();
                }
            }
            GameAction::StartNormal => {
                if self.screen == Screen::Menu {
                    self.start(GameMode::Normal, now);
                }
            }
            GameAction::StartClear => {
                if self.screen == Screen::Menu {
                    self.start(GameMode::Clear, now);
                }
            }
            GameAction::Restart => {
                if self.screen == Screen::GameOver {
                    self.start(self.mode, now);
                }
            }
            GameAction::MainMenu => {
                if self.screen == Screen::GameOver {
                    self.screen = Screen::Menu;
                }
            }
        }
    }

    /// Start a fresh session in the given mode.
    pub fn start(&mut self, mode: GameMode, now: Instant) {
        self.mode = mode;
        self.config = GameConfig::from_entries(&self.game_length_entry, &self.question_time_entry);
        self.pool = match mode {
            GameMode::Clear => self.bank.questions().to_vec(),
            GameMode::Normal => Vec::new(),
        };
        self.score = 0;
        self.streak = 0;
        self.answered = 0;
        self.correct_halves = 0;
        self.clear_correct = 0;
        self.wrong_answers.clear();
        self.pending_report = None;
        self.report_path = None;
        self.pending_cue = None;
        self.input.clear();
        self.feedback = None;
        self.feedback_deadline = None;
        self.last_answer.clear();
        self.last_info.clear();
        self.current = None;
        self.pause_started = None;
        self.game_deadline = Some(now + self.config.game_length);
        self.screen = Screen::Playing;
        self.advance_question(now);
    }

    /// Freeze all timers. Only meaningful while playing.
    pub fn pause(&mut self, now: Instant) {
        if self.screen == Screen::Playing {
            self.screen = Screen::Paused;
            self.pause_started = Some(now);
        }
    }

    /// Shift every outstanding deadline forward by the paused duration.
    pub fn resume(&mut self, now: Instant) {
        if self.screen != Screen::Paused {
            return;
        }
        if let Some(pause_started) = self.pause_started.take() {
            let paused_for = now.saturating_duration_since(pause_started);
            self.game_deadline = self.game_deadline.map(|d| d + paused_for);
            self.question_deadline = self.question_deadline.map(|d| d + paused_for);
            self.feedback_deadline = self.feedback_deadline.map(|d| d + paused_for);
        }
        self.screen = Screen::Playing;
    }

    /// Per-frame update. A no-op outside the playing screen.
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Playing {
            return;
        }
        if let Some(game_deadline) = self.game_deadline {
            if now >= game_deadline {
                self.finish_session();
                return;
            }
        }
        if let Some(question_deadline) = self.question_deadline {
            if now > question_deadline {
                self.answered += 1;
                self.streak = 0;
                self.feedback = Some(Feedback::new("Pass", FeedbackTone::Neutral));
                if let Some(question) = &self.current {
                    self.wrong_answers.push(WrongAnswer::timed_out(question));
                }
                self.advance_question(now);
            }
        }
    }

    /// Score the current input buffer against the current question.
    fn submit(&mut self, now: Instant) {
        let Some(current) = self.current.clone() else {
            return;
        };
        self.answered += 1;

        let user_answer = normalize(&self.input);
        let expected = normalize(&current.answer);

        if user_answer == expected {
            self.correct_halves += 2;
            self.note_cleared(&current);
            self.streak += 1;
            let multiplier = streak_multiplier(self.streak);
            self.score += answer_points(multiplier, false);
            self.feedback = Some(Feedback::new(
                format!("Correct x{multiplier}"),
                FeedbackTone::Positive,
            ));
            self.emit_cue(SoundCue::Correct);
        } else if similarity_ratio(&user_answer, &expected) >= FUZZY_ACCEPT_RATIO {
            self.correct_halves += 1;
            self.note_cleared(&current);
            self.streak += 1;
            let multiplier = streak_multiplier(self.streak);
            self.score += answer_points(multiplier, true);
            self.feedback = Some(Feedback::new(
                format!("Close! - half points! x{multiplier}"),
                FeedbackTone::Close,
            ));
            self.emit_cue(SoundCue::Correct);
        } else {
            self.feedback = Some(Feedback::new("Incorrect", FeedbackTone::Negative));
            self.streak = 0;
            self.wrong_answers
                .push(WrongAnswer::submitted(&current, self.input.trim()));
            self.emit_cue(SoundCue::Wrong);
        }

        self.advance_question(now);
    }

    /// Clear-mode bookkeeping for a correctly answered question.
    fn note_cleared(&mut self, question: &Question) {
        if self.mode == GameMode::Clear {
            self.clear_correct += 1;
            if let Some(pos) = self.pool.iter().position(|q| q == question) {
                self.pool.remove(pos);
            }
        }
    }

    /// Move on to the next question, or end the session when the clear-mode
    /// pool is exhausted.
    fn advance_question(&mut self, now: Instant) {
        if let Some(previous) = &self.current {
            self.last_answer = previous.answer.clone();
            self.last_info = previous.info.clone();
        }

        let next = match self.mode {
            GameMode::Clear => {
                if self.pool.is_empty() {
                    self.finish_session();
                    return;
                }
                draw_distinct(&mut self.rng, &self.pool, self.current.as_ref())
            }
            GameMode::Normal => {
                draw_distinct(&mut self.rng, self.bank.questions(), self.current.as_ref())
            }
        };

        self.current = Some(next);
        self.question_deadline = Some(now + self.config.question_time);
        // Feedback from the previous answer stays up for the new question's
        // full time window.
        self.feedback_deadline = Some(now + self.config.question_time);
        self.input.clear();
    }

    /// Transition into game over. Runs exactly once per session; `tick` is a
    /// no-op afterwards.
    fn finish_session(&mut self) {
        if !self.wrong_answers.is_empty() {
            self.pending_report = Some(self.wrong_answers.clone());
        }
        self.screen = Screen::GameOver;
    }

    fn emit_cue(&mut self, cue: SoundCue) {
        if self.sound_enabled {
            self.pending_cue = Some(cue);
        }
    }

    fn menu_entry_mut(&mut self) -> &mut String {
        match self.menu_focus {
            MenuField::GameLength => &mut self.game_length_entry,
            MenuField::QuestionTime => &mut self.question_time_entry,
        }
    }

    /// Take the pending sound cue, if any (consumed by the host loop).
    pub fn take_sound_cue(&mut self) -> Option<SoundCue> {
        self.pending_cue.take()
    }

    /// Take the wrong answers awaiting persistence, if the session just
    /// ended with any. The host hands them to the report writer and reports
    /// the artifact path back through [`GameState::set_report_path`].
    pub fn take_report_request(&mut self) -> Option<Vec<WrongAnswer>> {
        self.pending_report.take()
    }

    pub fn set_report_path(&mut self, path: Option<PathBuf>) {
        self.report_path = path;
    }

    /// Produce the immutable-for-the-frame view consumed by the renderer.
    ///
    /// While paused the pause timestamp stands in for `now`, so displayed
    /// timers freeze instead of draining.
    pub fn snapshot(&self, now: Instant) -> QuizSnapshot {
        let now = self.pause_started.unwrap_or(now);
        let time_left_secs = self
            .remaining_game_time(now)
            .map(|left| left.as_secs())
            .unwrap_or(self.config.game_length.as_secs());
        let question_fraction = match self.remaining_question_time(now) {
            Some(left) if !self.config.question_time.is_zero() => {
                (left.as_secs_f32() / self.config.question_time.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        };
        let feedback = match (&self.feedback, self.feedback_deadline) {
            (Some(feedback), Some(deadline)) if now < deadline => Some(FeedbackView {
                text: feedback.text.clone(),
                tone: feedback.tone,
            }),
            _ => None,
        };

        QuizSnapshot {
            screen: self.screen,
            mode: self.mode,
            prompt: self
                .current
                .as_ref()
                .map(|q| q.prompt.clone())
                .unwrap_or_default(),
            input: self.input.clone(),
            time_left_secs,
            question_fraction,
            feedback,
            last_answer: self.last_answer.clone(),
            last_info: self.last_info.clone(),
            learning_mode: self.learning_mode,
            sound_enabled: self.sound_enabled,
            score: self.score,
            answered: self.answered,
            correct_halves: self.correct_halves,
            pool_remaining: self.pool.len(),
            clear_correct: self.clear_correct,
            menu_game_length: self.game_length_entry.clone(),
            menu_question_time: self.question_time_entry.clone(),
            menu_focus: self.menu_focus,
            report_path: self.report_path.clone(),
        }
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Draw uniformly from the candidates structurally different from `current`.
///
/// A single candidate is taken unconditionally. When every candidate equals
/// the current question, repetition is unavoidable and the first is taken.
/// This is distribution-equivalent to rejection sampling but always
/// terminates, even when the bank contains duplicate rows.
fn draw_distinct(
    rng: &mut SimpleRng,
    candidates: &[Question],
    current: Option<&Question>,
) -> Question {
    debug_assert!(!candidates.is_empty());
    if candidates.len() == 1 {
        return candidates[0].clone();
    }
    let eligible: Vec<&Question> = match current {
        Some(current) => candidates.iter().filter(|q| *q != current).collect(),
        None => candidates.iter().collect(),
    };
    if eligible.is_empty() {
        return candidates[0].clone();
    }
    let idx = rng.next_range(eligible.len() as u32) as usize;
    eligible[idx].clone()
}
