//! SM-2 scheduler
//!
//! The stateful face of the algorithm: review state, the grading transition,
//! and the per-grade preview. The scheduler owns no state of its own and
//! performs no I/O; callers persist one [`ReviewState`] per (learner, item)
//! pair and hand it back for every grading event.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{Result, SchedulerError};
use crate::sm2::algorithm::{
    next_ease_factor, next_interval, FIRST_INTERVAL_DAYS, INITIAL_EASE_FACTOR, MAX_GRADE,
    SUCCESS_THRESHOLD,
};

// ============================================================================
// GRADE
// ============================================================================

/// Self-assessed recall quality, 0 (total blackout) to 5 (perfect recall).
///
/// Validated at construction; once a `Grade` exists the grading transition
/// is total and cannot fail. Serializes as a bare integer and refuses
/// out-of-range values on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    /// Total recall failure
    pub const MIN: Grade = Grade(0);
    /// Perfect, effortless recall
    pub const MAX: Grade = Grade(MAX_GRADE);

    /// Create a grade, rejecting values above 5.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_GRADE {
            return Err(SchedulerError::InvalidGrade(value));
        }
        Ok(Self(value))
    }

    /// The raw 0-5 value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this grade counts as successful recall (grade >= 3).
    #[inline]
    pub fn is_successful(self) -> bool {
        self.0 >= SUCCESS_THRESHOLD
    }

    /// All grades in ascending order, for previews and exhaustive tests.
    pub fn all() -> impl Iterator<Item = Grade> {
        (0..=MAX_GRADE).map(Grade)
    }
}

impl TryFrom<u8> for Grade {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// LEARNING STATE
// ============================================================================

/// Derived maturity label over the numeric state.
///
/// Purely a read-only view: it is computed from `repetition` on demand and
/// never stored, so it cannot drift out of sync with the numbers that
/// define it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearningState {
    /// Never successfully reviewed (repetition 0)
    #[default]
    New,
    /// On the fixed 1-day / 6-day ladder (repetition 1-2)
    Learning,
    /// Interval grows geometrically with the ease factor (repetition >= 3)
    Mature,
}

impl LearningState {
    /// Classify a review state by its repetition count.
    pub fn classify(state: &ReviewState) -> Self {
        match state.repetition {
            0 => LearningState::New,
            1..=2 => LearningState::Learning,
            _ => LearningState::Mature,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningState::New => "new",
            LearningState::Learning => "learning",
            LearningState::Mature => "mature",
        }
    }

    /// Parse from string name.
    pub fn parse_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "new" => LearningState::New,
            "learning" => LearningState::Learning,
            "mature" => LearningState::Mature,
            _ => LearningState::New,
        }
    }
}

impl std::fmt::Display for LearningState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// REVIEW STATE
// ============================================================================

/// One item's scheduling memory for one learner.
///
/// Created once via [`Scheduler::initial_state`], mutated only by
/// [`Scheduler::review`], persisted by the caller between reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Days until the next review; 0 only in the freshly initialized state
    pub interval: u32,
    /// Consecutive reviews graded >= 3; resets to 0 on any failed review
    pub repetition: u32,
    /// Difficulty multiplier; always >= 1.3 after every transition
    pub ease_factor: f64,
    /// Absolute instant at which the item next becomes eligible for review
    pub due: DateTime<Utc>,
}

impl ReviewState {
    /// The derived maturity label for this state.
    pub fn learning_state(&self) -> LearningState {
        LearningState::classify(self)
    }
}

// ============================================================================
// REVIEW INPUT / RESULT
// ============================================================================

/// One grading event: the grade, plus an optional explicit review instant.
///
/// When `reviewed_at` is omitted the scheduler resolves "now" from the
/// injected [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    /// Self-reported recall quality
    pub grade: Grade,
    /// Instant of the review; `None` defers to the clock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewInput {
    /// A grading event timed by the clock.
    pub fn new(grade: Grade) -> Self {
        Self {
            grade,
            reviewed_at: None,
        }
    }

    /// A grading event pinned to an explicit instant.
    pub fn at(grade: Grade, reviewed_at: DateTime<Utc>) -> Self {
        Self {
            grade,
            reviewed_at: Some(reviewed_at),
        }
    }
}

/// Outcome of one grading transition.
///
/// `next_review` duplicates `state.due` by contract; the redundancy lets
/// callers read the headline value without digging into the state they are
/// about to persist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// The new state to persist
    #[serde(flatten)]
    pub state: ReviewState,
    /// When the item is next due; always equal to `state.due`
    pub next_review: DateTime<Utc>,
}

/// The would-be outcome for every grade, without committing a transition.
///
/// All six outcomes are computed against a single resolved instant, so the
/// preview is internally consistent even under a live clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResults {
    /// Outcomes indexed by grade, 0 through 5
    pub outcomes: [ReviewResult; 6],
}

impl PreviewResults {
    /// The outcome for a specific grade.
    pub fn for_grade(&self, grade: Grade) -> &ReviewResult {
        &self.outcomes[usize::from(grade.value())]
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// The SM-2 grading transition.
///
/// Pure and stateless: the same (state, input, clock) always produces the
/// same result, and nothing is shared between invocations, so a single
/// `Scheduler` may be used from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    /// Create a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// A fresh state: immediately due, no history, canonical ease factor.
    pub fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            interval: 0,
            repetition: 0,
            ease_factor: INITIAL_EASE_FACTOR,
            due: now,
        }
    }

    /// [`Scheduler::initial_state`] with "now" resolved from a clock.
    pub fn initial_state_with(&self, clock: &impl Clock) -> ReviewState {
        self.initial_state(clock.now())
    }

    /// Apply one grading event and produce the next state.
    ///
    /// Successful recall (grade >= 3) walks the interval ladder, increments
    /// the repetition count, and applies the ease-factor update. Failed
    /// recall (grade < 3) resets the repetition count and schedules the item
    /// for tomorrow; the ease factor is left unchanged on failure, unlike
    /// textbook SM-2 which applies the update on every review.
    ///
    /// The interval is always measured from the grading instant, never from
    /// the previous due date, so a late review does not compound lateness
    /// into the next interval.
    pub fn review(&self, state: &ReviewState, input: &ReviewInput, clock: &impl Clock) -> ReviewResult {
        let now = input.reviewed_at.unwrap_or_else(|| clock.now());

        let (interval, repetition, ease_factor) = if input.grade.is_successful() {
            (
                next_interval(state.interval, state.repetition, state.ease_factor),
                state.repetition + 1,
                next_ease_factor(state.ease_factor, input.grade.value()),
            )
        } else {
            // Ease factor deliberately untouched on failure
            (FIRST_INTERVAL_DAYS, 0, state.ease_factor)
        };

        let due = now + Duration::days(i64::from(interval));

        tracing::debug!(
            grade = input.grade.value(),
            interval,
            repetition,
            ease_factor,
            "scheduled next review"
        );

        ReviewResult {
            state: ReviewState {
                interval,
                repetition,
                ease_factor,
                due,
            },
            next_review: due,
        }
    }

    /// The outcome of every possible grade against `state`.
    ///
    /// Resolves "now" once, so the six outcomes share an instant.
    pub fn preview(&self, state: &ReviewState, clock: &impl Clock) -> PreviewResults {
        let now = clock.now();
        PreviewResults {
            outcomes: std::array::from_fn(|g| {
                self.review(state, &ReviewInput::at(Grade(g as u8), now), clock)
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
