use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_quiz::core::{similarity_ratio, GameState, Question, QuestionBank};
use tui_quiz::types::GameAction;

fn bank() -> QuestionBank {
    QuestionBank::new(
        (0..50)
            .map(|i| Question::new(format!("question {i}?"), format!("answer {i}"), ""))
            .collect(),
    )
}

fn bench_tick(c: &mut Criterion) {
    let t0 = Instant::now();
    let mut game = GameState::new(bank(), 12345);
    game.apply_action(GameAction::StartNormal, t0);
    let mid_question = t0 + Duration::from_secs(1);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick(black_box(mid_question));
        })
    });
}

fn bench_submit_cycle(c: &mut Criterion) {
    let t0 = Instant::now();
    let mut game = GameState::new(bank(), 12345);
    game.apply_action(GameAction::StartNormal, t0);

    c.bench_function("submit_correct_answer", |b| {
        b.iter(|| {
            let answer = game.current().unwrap().answer.clone();
            for ch in answer.chars() {
                game.apply_action(GameAction::Insert(ch), t0);
            }
            game.apply_action(GameAction::Submit, t0);
        })
    });
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity_ratio", |b| {
        b.iter(|| {
            similarity_ratio(
                black_box("the mitochondria is the powerhouse of the cell"),
                black_box("the mitochondria is the power house of the cel"),
            )
        })
    });
}

criterion_group!(benches, bench_tick, bench_submit_cycle, bench_similarity);
criterion_main!(benches);
