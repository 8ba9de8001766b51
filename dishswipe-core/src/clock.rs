//! Injectable wall clock.
//!
//! Time-of-day scoring and swipe timestamps read "now" through [`Clock`] so
//! tests and callers can pin the instant instead of depending on the host
//! clock.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Timelike, Utc};

/// Source of the current local time.
///
/// Implementations must be thread-safe so engines holding a clock can be
/// shared across threads.
///
/// # Examples
/// ```
/// use dishswipe_core::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::at_hour(8).expect("valid hour");
/// assert_eq!(clock.hour(), 8);
/// ```
pub trait Clock: Send + Sync {
    /// Return the current instant in the user's local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local wall-clock hour in `0..24`.
    fn hour(&self) -> u32 {
        self.now().hour()
    }

    /// Local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current instant in UTC, used for history timestamps.
    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// Clock backed by the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Pin the clock to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Pin the clock to `hour:00` UTC on 1 January 2024.
    ///
    /// Returns `None` when `hour` is outside `0..24`.
    #[must_use]
    pub fn at_hour(hour: u32) -> Option<Self> {
        let offset = FixedOffset::east_opt(0)?;
        offset
            .with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
            .single()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(23)]
    fn fixed_clock_reports_hour(#[case] hour: u32) {
        let clock = FixedClock::at_hour(hour).expect("hour in range");
        assert_eq!(clock.hour(), hour);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
    }

    #[rstest]
    fn fixed_clock_rejects_out_of_range_hour() {
        assert!(FixedClock::at_hour(24).is_none());
    }
}
