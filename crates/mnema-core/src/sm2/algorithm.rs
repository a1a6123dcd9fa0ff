//! SM-2 numeric core
//!
//! The pure arithmetic of the algorithm: the ease-factor update formula, its
//! floor, and the interval ladder. Everything here is a total function over
//! plain numbers; state handling and due-date computation live in the
//! scheduler.
//!
//! The constants are part of the algorithm's contract. Tuning any of them
//! changes every schedule a caller has already persisted, so they are fixed
//! rather than configurable.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Ease factor assigned to a freshly initialized item (canonical SM-2 default)
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Hard floor for the ease factor, enforced after every update
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Interval after the first successful review, in days
pub const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second successful review, in days
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Highest recall quality grade
pub const MAX_GRADE: u8 = 5;

/// Lowest grade that counts as successful recall
pub const SUCCESS_THRESHOLD: u8 = 3;

// ============================================================================
// EASE FACTOR
// ============================================================================

/// The ease-factor adjustment for a grade, before flooring.
///
/// Classical SM-2 term: `0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)`.
/// Positive only for grade 5; grade 4 is neutral, grade 3 and below
/// pull the ease factor down.
#[inline]
pub fn ease_factor_delta(grade: u8) -> f64 {
    let q = f64::from(grade);
    0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)
}

/// Apply the SM-2 ease update for `grade`, flooring at [`MIN_EASE_FACTOR`].
#[inline]
pub fn next_ease_factor(ease_factor: f64, grade: u8) -> f64 {
    (ease_factor + ease_factor_delta(grade)).max(MIN_EASE_FACTOR)
}

// ============================================================================
// INTERVAL LADDER
// ============================================================================

/// The next interval after a successful review, in days.
///
/// Keyed on the repetition count *before* it is incremented:
/// repetition 0 graduates to 1 day, repetition 1 to 6 days, and from
/// repetition 2 onward the interval grows geometrically as
/// `round(interval * ease_factor)`. Rounding is to-nearest, not floor.
#[inline]
pub fn next_interval(interval: u32, repetition: u32, ease_factor: f64) -> u32 {
    match repetition {
        0 => FIRST_INTERVAL_DAYS,
        1 => SECOND_INTERVAL_DAYS,
        _ => (f64::from(interval) * ease_factor).round() as u32,
    }
}

// ============================================================================
// TESTS
// ============================================================================
