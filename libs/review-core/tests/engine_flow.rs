//! End-to-end flow over a real storage directory.

use review_core::{Difficulty, EngineError, ReviewEngine, StorageLayout};
use std::fs;
use tempfile::tempdir;

fn seeded_layout(dir: &std::path::Path) -> StorageLayout {
    let layout = StorageLayout::new(dir);
    fs::write(
        layout.word_path(),
        r#"{
            "run": ["run", "跑"],
            "technology": ["技术", "technology"],
            "cat": ["猫"]
        }"#,
    )
    .unwrap();
    layout
}

#[test]
fn full_review_cycle() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());
    let mut engine = ReviewEngine::with_seed(&layout, 42);
    assert_eq!(engine.items().len(), 3);

    let item = engine.next_item(Difficulty::Normal).unwrap();
    assert!(engine.items().iter().any(|i| i.term == item.term));

    // a correct answer lowers nothing below the floor and pushes the due date
    let outcome = engine.submit_answer("run", "跑").unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.matched.as_deref(), Some("跑"));
    assert_eq!(outcome.goal.current, 1);
    assert_eq!(outcome.goal.correct, 1);
    assert_eq!(outcome.record.weight, 1);
    assert_eq!(outcome.record.interval, 2);

    // a miss raises the weight, lands in the wrong book, breaks the streak
    let outcome = engine.submit_answer("run", "xyzzy").unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(outcome.matched, None);
    assert_eq!(outcome.goal.current, 2);
    assert_eq!(outcome.goal.correct, 1);
    assert_eq!(outcome.record.weight, 2);
    assert_eq!(outcome.record.interval, 1);

    let stats = engine.session_stats();
    assert_eq!(stats.total_questions, 2);
    assert_eq!(stats.correct_answers, 1);
    assert_eq!(stats.streak, 0);
    assert_eq!(stats.best_streak, 1);

    let wrong = engine.wrong_entries();
    assert_eq!(wrong.len(), 1);
    assert_eq!(wrong[0].term, "run");
    assert_eq!(engine.pick_wrong_entry().unwrap().term, "run");

    let history = engine.history(7);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total, 2);
    assert_eq!(history[0].accuracy, 50.0);

    assert!(matches!(
        engine.set_daily_target(0),
        Err(EngineError::InvalidDailyTarget(0))
    ));
    let goal = engine.set_daily_target(10).unwrap();
    assert_eq!(goal.target, 10);
    assert_eq!(goal.percentage, 20.0);

    assert!(engine.submit_answer("missing", "whatever").is_none());
}

#[test]
fn typo_tolerance_feeds_back_as_correct() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());
    let engine = ReviewEngine::with_seed(&layout, 7);

    let outcome = engine.submit_answer("technology", "technollogy").unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.matched.as_deref(), Some("technology"));
}

#[test]
fn difficulty_bands_narrow_selection() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());
    let mut engine = ReviewEngine::with_seed(&layout, 9);

    for _ in 0..20 {
        let item = engine.next_item(Difficulty::Hard).unwrap();
        assert!(item.term.chars().count() >= 6, "unexpected pick {}", item.term);
    }
}

#[test]
fn missing_vocabulary_falls_back_to_builtin() {
    let dir = tempdir().unwrap();
    let layout = StorageLayout::new(dir.path());
    let engine = ReviewEngine::open(&layout);
    assert_eq!(engine.items().len(), 8);
}

#[test]
fn reset_all_zeroes_state_but_keeps_vocabulary() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());
    let engine = ReviewEngine::with_seed(&layout, 11);

    engine.submit_answer("run", "跑").unwrap();
    engine.submit_answer("cat", "wrong").unwrap();
    assert!(engine.today_goal().current > 0);

    let outcome = engine.reset_all(std::slice::from_ref(&layout));
    assert!(outcome.failed.is_empty());

    assert_eq!(engine.today_goal().current, 0);
    assert_eq!(engine.session_stats().total_questions, 0);
    assert!(engine.wrong_entries().is_empty());

    // the seeded vocabulary survives
    let reopened = ReviewEngine::with_seed(&layout, 12);
    assert_eq!(reopened.items().len(), 3);
}
