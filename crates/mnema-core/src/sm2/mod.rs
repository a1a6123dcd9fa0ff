//! SM-2 (SuperMemo 2) Module
//!
//! The classic spaced repetition algorithm: review intervals computed from a
//! 0-5 recall-quality grade.
//!
//! Reference: https://super-memory.com/english/ol/sm2.htm
//!
//! ## Core rules:
//! - First two successful reviews use fixed intervals (1 day, then 6 days)
//! - From the third onward: interval = round(interval * ease_factor)
//! - Ease factor update: EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)),
//!   floored at 1.3
//! - A failed review (grade < 3) resets progress; the ease factor is left
//!   unchanged on failure (a deliberate departure from textbook SM-2)

mod algorithm;
mod scheduler;

pub use algorithm::{
    // Core functions
    ease_factor_delta,
    next_ease_factor,
    next_interval,
    // Constants
    FIRST_INTERVAL_DAYS,
    INITIAL_EASE_FACTOR,
    MAX_GRADE,
    MIN_EASE_FACTOR,
    SECOND_INTERVAL_DAYS,
    SUCCESS_THRESHOLD,
};

pub use scheduler::{
    Grade, LearningState, PreviewResults, ReviewInput, ReviewResult, ReviewState, Scheduler,
};
