//! Clock Abstraction
//!
//! The grading transition never reads system time directly. Callers inject a
//! `Clock`, so every time-dependent computation is deterministic and
//! replayable: production code passes [`SystemClock`], tests pass a
//! [`FixedClock`] pinned to a known instant.

use chrono::{DateTime, Duration, Utc};

/// A narrow capability exposing the current instant.
///
/// Implementations must be synchronous; the scheduler calls [`Clock::now`]
/// at most once per transition.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time source for production callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a preset instant.
///
/// The workhorse of the test suites: fix an instant, run transitions, and
/// every due date is exactly predictable.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use mnema_core::{Clock, FixedClock};
///
/// let mut clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
/// let start = clock.now();
///
/// clock.advance(Duration::days(6));
/// assert_eq!(clock.now(), start + Duration::days(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock frozen at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Move the clock to a new instant.
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
    }

    /// Advance the clock by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.instant += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
