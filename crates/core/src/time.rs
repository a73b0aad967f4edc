use chrono::{DateTime, Duration, Utc};

/// Source of "now" for timers.
///
/// The desktop app runs on `System`; tests and simulations use `Manual` and
/// move time forward explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Manual(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// A clock stopped at `at` until `advance` is called.
    #[must_use]
    pub fn manual(at: DateTime<Utc>) -> Self {
        Self::Manual(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(t) => *t,
        }
    }

    /// Move a manual clock forward. Returns `false` (and does nothing) for
    /// the system clock.
    pub fn advance(&mut self, delta: Duration) -> bool {
        match self {
            Clock::Manual(t) => {
                *t += delta;
                true
            }
            Clock::System => false,
        }
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Clock::Manual(_))
    }
}

/// Convert a millisecond setting into a `Duration`, saturating on overflow.
#[must_use]
pub fn millis(ms: u64) -> Duration {
    i64::try_from(ms).map_or(Duration::MAX, Duration::milliseconds)
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// A manual clock at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::manual(fixed_now())
}
