//! Week window - the half-open interval weekly token usage is counted over

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, Utc};

/// A booking week: Monday 00:00:00 UTC (inclusive) through the
/// following Monday 00:00:00 UTC (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl WeekWindow {
    /// The window containing the given instant.
    pub fn containing(now: DateTime<Utc>) -> Self {
        let days_from_monday = i64::from(now.weekday().num_days_from_monday());
        let monday = now.date_naive() - Duration::days(days_from_monday);
        let start = NaiveDateTime::new(monday, NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// Start of the window (inclusive)
    #[inline]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the window (exclusive)
    #[inline]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether the instant falls inside `[start, end)`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}
