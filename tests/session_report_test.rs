//! End-to-end scenario: exact answer, wrong answer, budget expiry, and the
//! persisted wrong-answers report.

use std::time::{Duration, Instant};

use tui_quiz::core::{GameState, Question, QuestionBank};
use tui_quiz::report::ReportWriter;
use tui_quiz::types::{GameAction, Screen};

fn type_str(game: &mut GameState, text: &str, now: Instant) {
    for ch in text.chars() {
        game.apply_action(GameAction::Insert(ch), now);
    }
}

#[test]
fn full_session_produces_a_report() {
    let bank = QuestionBank::new(vec![
        Question::new("2+2?", "4", ""),
        Question::new("3+3?", "6", ""),
    ]);
    let t0 = Instant::now();
    let mut game = GameState::new(bank, 12345);
    game.apply_action(GameAction::StartNormal, t0);
    assert_eq!(game.screen(), Screen::Playing);

    // t0+1: answer the first question correctly.
    let t1 = t0 + Duration::from_secs(1);
    game.tick(t1);
    let first = game.current().unwrap().clone();
    type_str(&mut game, &first.answer, t1);
    game.apply_action(GameAction::Submit, t1);
    assert_eq!(game.score(), 10);
    assert_eq!(game.streak(), 1);

    // With two distinct questions, the other one must come up next.
    let second = game.current().unwrap().clone();
    assert_ne!(second, first);

    // t0+2: miss the second question.
    let t2 = t0 + Duration::from_secs(2);
    game.tick(t2);
    type_str(&mut game, "five", t2);
    game.apply_action(GameAction::Submit, t2);
    assert_eq!(game.score(), 10);
    assert_eq!(game.streak(), 0);
    assert_eq!(game.wrong_answers().len(), 1);

    // t0+181: the 180-second budget has expired.
    game.tick(t0 + Duration::from_secs(181));
    assert_eq!(game.screen(), Screen::GameOver);

    // Persist the report the way the runner does.
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::with_base_dir(dir.path());
    let entries = game.take_report_request().expect("one wrong answer");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_answer, "five");

    let path = writer.write(&entries).expect("report written");
    game.set_report_path(Some(path.clone()));

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("Your Answer: five"));
    assert!(body.contains("Total Wrong Answers: 1"));

    // The game-over screen can now point at the artifact.
    let snap = game.snapshot(t0 + Duration::from_secs(181));
    assert_eq!(snap.report_path.as_deref(), Some(path.as_path()));
}
