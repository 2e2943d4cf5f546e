//! GameView: maps a `QuizSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_quiz_core::snapshot::QuizSnapshot;
use tui_quiz_types::{FeedbackTone, GameMode, MenuField, Screen};

use crate::fb::{FrameBuffer, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const MARGIN: u16 = 2;
const PROMPT_ROW: u16 = 6;
const PROMPT_MAX_LINES: u16 = 4;
const INPUT_ROW: u16 = 11;
const FEEDBACK_ROW: u16 = 13;
const BAR_ROW: u16 = 4;

const WHITE: Rgb = Rgb::new(255, 255, 255);
const YELLOW: Rgb = Rgb::new(255, 225, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const RED: Rgb = Rgb::new(255, 0, 0);
const BAR_TRACK: Rgb = Rgb::new(100, 100, 100);
const BAR_FILL: Rgb = Rgb::new(0, 200, 0);

fn tone_style(tone: FeedbackTone) -> Style {
    match tone {
        FeedbackTone::Positive => Style::fg(GREEN),
        FeedbackTone::Close => Style::fg(YELLOW),
        FeedbackTone::Negative => Style::fg(RED),
        FeedbackTone::Neutral => Style::fg(WHITE),
    }
}

/// Renders each screen of the quiz into a framebuffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &QuizSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        }
        fb.clear();

        self.draw_toggle_hints(snap, fb);
        match snap.screen {
            Screen::Menu => self.draw_menu(snap, fb),
            Screen::Playing => {
                self.draw_prompt(snap, fb);
                self.draw_session_info(snap, fb);
            }
            Screen::Paused => {
                // No prompt while paused - no cheating by reading it.
                self.draw_session_info(snap, fb);
                fb.put_str_centered(8, "PAUSED - press F9 to resume", Style::fg(YELLOW).bold());
            }
            Screen::GameOver => self.draw_game_over(snap, fb),
        }
    }

    /// Convenience allocation-per-call variant.
    pub fn render(&self, snap: &QuizSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_toggle_hints(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        let right = fb.width().saturating_sub(1);
        let sound = if snap.sound_enabled { "On" } else { "Off" };
        let learning = if snap.learning_mode { "On" } else { "Off" };
        fb.put_str_right(right, 0, &format!("F11 > Sound: {sound}"), Style::default());
        fb.put_str_right(
            right,
            1,
            &format!("F12 > Learning Mode: {learning}"),
            Style::default(),
        );
        fb.put_str_right(right, 2, "F9 > Pause/Resume", Style::default());
    }

    fn draw_menu(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        fb.put_str_centered(2, "A+ Typing Game", Style::fg(WHITE).bold());

        self.draw_menu_field(
            fb,
            6,
            "Game Length (s):",
            &snap.menu_game_length,
            snap.menu_focus == MenuField::GameLength,
        );
        self.draw_menu_field(
            fb,
            8,
            "Question Time (s):",
            &snap.menu_question_time,
            snap.menu_focus == MenuField::QuestionTime,
        );

        fb.put_str(MARGIN, 11, "Enter > Start Game", Style::default());
        fb.put_str(MARGIN, 12, "F2    > Clear Mode", Style::default());
        fb.put_str(MARGIN, 13, "Tab   > Switch Field", Style::default());
        fb.put_str(MARGIN, 14, "Esc   > Quit", Style::default());
    }

    fn draw_menu_field(&self, fb: &mut FrameBuffer, y: u16, label: &str, entry: &str, focused: bool) {
        fb.put_str(MARGIN, y, label, Style::default());
        let style = if focused {
            Style::fg(Rgb::new(0, 0, 0)).on(WHITE)
        } else {
            Style::fg(WHITE).on(Rgb::new(60, 60, 60))
        };
        let x = MARGIN + label.chars().count() as u16 + 1;
        fb.put_str(x, y, &format!("{entry:<8}"), style);
    }

    fn draw_prompt(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        let width = fb.width().saturating_sub(2 * MARGIN).max(1);
        for (i, line) in wrap_text(&snap.prompt, width as usize)
            .iter()
            .take(PROMPT_MAX_LINES as usize)
            .enumerate()
        {
            fb.put_str(MARGIN, PROMPT_ROW + i as u16, line, Style::fg(WHITE).bold());
        }
    }

    fn draw_session_info(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        fb.put_str(
            MARGIN,
            0,
            &format!("Time Left: {}s", snap.time_left_secs),
            Style::default(),
        );
        if snap.mode == GameMode::Clear {
            fb.put_str(
                MARGIN,
                1,
                &format!("Questions Remaining: {}", snap.pool_remaining),
                Style::default(),
            );
            fb.put_str(
                MARGIN,
                2,
                &format!("Correct Questions: {}", snap.clear_correct),
                Style::default(),
            );
        }

        self.draw_question_timer_bar(snap, fb);

        fb.put_str(MARGIN, INPUT_ROW, &format!("> {}", snap.input), Style::default());

        if let Some(feedback) = &snap.feedback {
            fb.put_str_centered(FEEDBACK_ROW, &feedback.text, tone_style(feedback.tone));
            if snap.learning_mode {
                fb.put_str_centered(
                    FEEDBACK_ROW + 1,
                    &format!("Answer: {}", snap.last_answer),
                    Style::fg(YELLOW),
                );
                if !snap.last_info.trim().is_empty() {
                    let width = fb.width().saturating_sub(2 * MARGIN).max(1);
                    let info = format!("Info: {}", snap.last_info);
                    for (i, line) in wrap_text(&info, width as usize).iter().take(2).enumerate() {
                        fb.put_str(
                            MARGIN,
                            FEEDBACK_ROW + 2 + i as u16,
                            line,
                            Style::fg(Rgb::new(200, 200, 0)),
                        );
                    }
                }
            }
        }

        let bottom = fb.height().saturating_sub(2);
        fb.put_str(MARGIN, bottom, &format!("Score: {}", snap.score), Style::default());
        fb.put_str_centered(
            bottom,
            &format!("Correct: {}%", snap.correct_percentage()),
            Style::default(),
        );
    }

    fn draw_question_timer_bar(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        let track = fb.width().saturating_sub(2 * MARGIN);
        if track == 0 {
            return;
        }
        let filled = (track as f32 * snap.question_fraction).round() as u16;
        fb.fill_rect(MARGIN, BAR_ROW, track, 1, ' ', Style::default().on(BAR_TRACK));
        fb.fill_rect(MARGIN, BAR_ROW, filled.min(track), 1, ' ', Style::default().on(BAR_FILL));
    }

    fn draw_game_over(&self, snap: &QuizSnapshot, fb: &mut FrameBuffer) {
        fb.put_str_centered(6, "Game Over", Style::fg(WHITE).bold());
        fb.put_str_centered(8, &format!("Final Score: {}", snap.score), Style::default());
        if snap.mode == GameMode::Clear {
            fb.put_str_centered(
                9,
                &format!("Questions Completed: {}", snap.clear_correct),
                Style::default(),
            );
        }
        if let Some(name) = snap
            .report_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            fb.put_str_centered(
                4,
                &format!("Questions missed written to: {name}"),
                Style::fg(YELLOW),
            );
        }
        fb.put_str_centered(12, "Enter > Restart", Style::default());
        fb.put_str_centered(13, "M     > Main Menu", Style::default());
    }
}

/// Greedy word wrap. Words longer than the width get their own line and are
/// clipped by the framebuffer on output.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
