//! # Mnema Core
//!
//! SM-2 spaced repetition scheduling engine. Decides, for one learnable item
//! and one learner, how many days must elapse before the item is shown
//! again, from a self-reported 0-5 recall-quality grade.
//!
//! - **Pure**: no I/O, no shared state, no side effects; the same inputs
//!   always produce the same result
//! - **Clock-injected**: time enters through the [`Clock`] trait, never via
//!   ambient system calls, so every schedule is replayable in tests
//! - **Caller-persisted**: the engine hands back a [`ReviewState`] per
//!   (learner, item) pair; storage, item selection, and grading UI are the
//!   caller's concern
//!
//! ## Quick Start
//!
//! ```rust
//! use mnema_core::{Grade, ReviewInput, Scheduler, SystemClock};
//!
//! # fn main() -> mnema_core::Result<()> {
//! let scheduler = Scheduler::new();
//! let clock = SystemClock;
//!
//! // A fresh item is immediately due
//! let state = scheduler.initial_state_with(&clock);
//!
//! // The learner reviews it and reports good recall
//! let result = scheduler.review(&state, &ReviewInput::new(Grade::new(4)?), &clock);
//! assert_eq!(result.state.interval, 1);
//! assert_eq!(result.state.due, result.next_review);
//!
//! // Persist result.state, show the item again at result.next_review
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Tests pin time with [`FixedClock`] and replay entire review histories:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use mnema_core::{FixedClock, Grade, ReviewInput, Scheduler};
//!
//! # fn main() -> mnema_core::Result<()> {
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
//! let scheduler = Scheduler::new();
//!
//! let state = scheduler.initial_state_with(&clock);
//! let input = ReviewInput::new(Grade::new(5)?);
//!
//! // Byte-identical outcomes on replay
//! assert_eq!(
//!     scheduler.review(&state, &input, &clock),
//!     scheduler.review(&state, &input, &clock),
//! );
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod clock;
pub mod error;
pub mod sm2;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Clock abstraction
pub use clock::{Clock, FixedClock, SystemClock};

// Errors
pub use error::{Result, SchedulerError};

// SM-2 scheduling
pub use sm2::{
    ease_factor_delta,
    next_ease_factor,
    // Core functions for advanced usage
    next_interval,
    Grade,
    LearningState,
    PreviewResults,
    ReviewInput,
    ReviewResult,
    ReviewState,
    Scheduler,
    // Constants
    FIRST_INTERVAL_DAYS,
    INITIAL_EASE_FACTOR,
    MAX_GRADE,
    MIN_EASE_FACTOR,
    SECOND_INTERVAL_DAYS,
    SUCCESS_THRESHOLD,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Clock, FixedClock, Grade, LearningState, PreviewResults, Result, ReviewInput,
        ReviewResult, ReviewState, Scheduler, SchedulerError, SystemClock,
    };
}
