//! Journey: an item learned from scratch and reviewed on schedule.
//!
//! Walks the full New -> Learning -> Mature trajectory and checks every
//! interval, due date, and derived label along the way.

use chrono::Duration;
use mnema_core::LearningState;
use mnema_e2e_tests::fixtures::{epoch, ReviewDriver};

#[test]
fn steady_good_recall_follows_the_sm2_ladder() {
    let mut driver = ReviewDriver::new();

    // Fresh item: immediately due, nothing learned yet
    assert_eq!(driver.state().interval, 0);
    assert_eq!(driver.state().due, epoch());
    assert_eq!(driver.state().learning_state(), LearningState::New);

    // Grade 4 keeps the ease factor at exactly 2.5, so the whole
    // trajectory is predictable: 1, 6, 15, 38, 95 days.
    let expected_intervals = [1u32, 6, 15, 38, 95];
    for (i, expected) in expected_intervals.iter().enumerate() {
        let result = driver.grade(4);
        assert_eq!(result.state.interval, *expected, "review {}", i + 1);
        assert_eq!(result.state.repetition, (i + 1) as u32);
        assert_eq!(result.next_review, result.state.due);
    }

    // Each review happened exactly at the due instant, so the final due
    // date is the epoch plus the sum of every interval
    let total_days: i64 = expected_intervals.iter().map(|d| i64::from(*d)).sum();
    assert_eq!(driver.state().due, epoch() + Duration::days(total_days));
}

#[test]
fn maturity_labels_track_repetition_count() {
    let mut driver = ReviewDriver::new();

    driver.grade(4);
    assert_eq!(driver.state().learning_state(), LearningState::Learning);

    driver.grade(4);
    assert_eq!(driver.state().learning_state(), LearningState::Learning);

    driver.grade(4);
    assert_eq!(driver.state().learning_state(), LearningState::Mature);

    driver.grade(4);
    assert_eq!(driver.state().learning_state(), LearningState::Mature);
}

#[test]
fn perfect_recall_accelerates_growth() {
    let mut fives = ReviewDriver::new();
    let mut fours = ReviewDriver::new();

    for _ in 0..4 {
        fives.grade(5);
        fours.grade(4);
    }

    // Grade 5 raises the ease factor 0.1 per review: 2.5 -> 2.9
    assert!((fives.state().ease_factor - 2.9).abs() < 1e-9);
    assert!((fours.state().ease_factor - 2.5).abs() < 1e-9);

    // Higher ease means longer intervals once growth is geometric
    assert!(fives.state().interval >= fours.state().interval);
}

#[test]
fn late_review_does_not_compound_lateness() {
    let mut on_time = ReviewDriver::new();
    let mut late = ReviewDriver::new();

    for _ in 0..3 {
        on_time.grade(4);
        late.grade(4);
    }

    // Same numeric state, but the late learner sits on the item for 10 days
    let on_time_result = on_time.grade(4);
    let late_result = late.grade_days_late(4, 10);

    // Identical interval either way
    assert_eq!(on_time_result.state.interval, late_result.state.interval);

    // The next due date is measured from the actual grading instant
    assert_eq!(
        late_result.state.due,
        on_time_result.state.due + Duration::days(10)
    );
}
