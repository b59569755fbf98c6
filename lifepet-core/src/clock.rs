//! Time source seam for the engine.
//!
//! Streaks and "today" summaries hinge on calendar-day arithmetic, so the
//! engine never reads the wall clock directly.

use chrono::{DateTime, NaiveDate, Utc};

/// Provides the current instant to engine operations.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date, derived from [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for tests and deterministic replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
