//! Invariants quantified over every short grade sequence.
//!
//! Exhaustively replays all 6^4 grade sequences of length four from a fresh
//! item and asserts the properties the engine guarantees for every
//! reachable state.

use mnema_core::{
    FixedClock, Grade, LearningState, ReviewInput, Scheduler, MIN_EASE_FACTOR,
};
use mnema_e2e_tests::fixtures::epoch;

const SEQUENCE_LEN: u32 = 4;

/// Decode sequence index `i` into base-6 grades, oldest first.
fn sequence(i: u32) -> Vec<u8> {
    (0..SEQUENCE_LEN)
        .map(|pos| ((i / 6u32.pow(pos)) % 6) as u8)
        .collect()
}

#[test]
fn every_reachable_state_satisfies_the_contract() {
    let scheduler = Scheduler::new();

    for i in 0..6u32.pow(SEQUENCE_LEN) {
        let mut clock = FixedClock::new(epoch());
        let mut state = scheduler.initial_state_with(&clock);
        let mut consecutive_successes = 0u32;

        for grade in sequence(i) {
            clock.set(state.due);
            let grade = Grade::new(grade).unwrap();
            let result = scheduler.review(&state, &ReviewInput::new(grade), &clock);

            // Ease factor floor holds after every transition
            assert!(result.state.ease_factor >= MIN_EASE_FACTOR);

            // The duplicated field never diverges
            assert_eq!(result.state.due, result.next_review);

            // Failure resets, success counts consecutively
            if grade.is_successful() {
                consecutive_successes += 1;
            } else {
                consecutive_successes = 0;
                assert_eq!(result.state.interval, 1);
            }
            assert_eq!(result.state.repetition, consecutive_successes);

            // Interval 0 exists only in the freshly initialized state
            assert!(result.state.interval >= 1);

            // The derived label follows the repetition count
            let expected_label = match result.state.repetition {
                0 => LearningState::New,
                1..=2 => LearningState::Learning,
                _ => LearningState::Mature,
            };
            assert_eq!(result.state.learning_state(), expected_label);

            state = result.state;
        }
    }
}

#[test]
fn replaying_a_sequence_is_deterministic() {
    let scheduler = Scheduler::new();

    for i in (0..6u32.pow(SEQUENCE_LEN)).step_by(97) {
        let run = |seq: &[u8]| {
            let mut clock = FixedClock::new(epoch());
            let mut state = scheduler.initial_state_with(&clock);
            for &g in seq {
                clock.set(state.due);
                state = scheduler
                    .review(&state, &ReviewInput::new(Grade::new(g).unwrap()), &clock)
                    .state;
            }
            state
        };

        let seq = sequence(i);
        assert_eq!(run(&seq), run(&seq));
    }
}

#[test]
fn successful_intervals_never_shrink_while_ease_is_above_one() {
    let scheduler = Scheduler::new();
    let mut clock = FixedClock::new(epoch());
    let mut state = scheduler.initial_state_with(&clock);

    // Alternate grades 3 and 4; ease may fall to the floor, but a passing
    // streak must never shorten the interval
    let mut previous_interval = 0u32;
    for i in 0..12 {
        clock.set(state.due);
        let grade = Grade::new(if i % 2 == 0 { 3 } else { 4 }).unwrap();
        state = scheduler
            .review(&state, &ReviewInput::new(grade), &clock)
            .state;

        assert!(state.interval >= previous_interval);
        previous_interval = state.interval;
    }
}
