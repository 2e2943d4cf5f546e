//! Terminal quiz runner (default binary).
//!
//! Loads the question bank, then drives the engine from a fixed-tick event
//! loop: crossterm input events in, one `tick` per frame, a framebuffer out.
//! Sound cues and the end-of-session report request are drained to their
//! collaborators after every frame.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_quiz::bank::load_questions;
use tui_quiz::core::{GameState, QuestionBank};
use tui_quiz::input::{map_key, should_quit};
use tui_quiz::report::ReportWriter;
use tui_quiz::sound::SoundPlayer;
use tui_quiz::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_quiz::types::TICK_MS;

const DEFAULT_QUESTION_FILE: &str = "questions.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUESTION_FILE.to_string());
    let bank = load_questions(Path::new(&path))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, bank);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, bank: QuestionBank) -> Result<()> {
    let mut game = GameState::new(bank, seed());
    let sound = SoundPlayer::new();
    let report_writer = ReportWriter::new();
    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.snapshot(Instant::now());
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(game.screen(), key) {
                        game.apply_action(action, Instant::now());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(Instant::now());
        }

        // Collaborators: audio cues and the end-of-session report.
        if let Some(cue) = game.take_sound_cue() {
            sound.play(cue);
        }
        if let Some(entries) = game.take_report_request() {
            game.set_report_path(report_writer.write(&entries));
        }
    }
}

fn seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}
