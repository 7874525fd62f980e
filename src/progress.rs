//! Date-range progress metrics and the "today" policy.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset as _, Utc};

use crate::foundation::error::{GoalpaperError, GoalpaperResult};

/// Default "today" offset: UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 5 * 60 + 30;

/// How "today" is derived from the wall clock.
///
/// The current instant is shifted into a fixed UTC offset and truncated to its calendar date,
/// independent of the host time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodayPolicy {
    offset: FixedOffset,
}

impl Default for TodayPolicy {
    fn default() -> Self {
        Self::from_offset_minutes(DEFAULT_UTC_OFFSET_MINUTES)
            .unwrap_or(Self { offset: Utc.fix() })
    }
}

impl TodayPolicy {
    /// Build a policy from a signed offset in minutes east of UTC.
    pub fn from_offset_minutes(minutes: i32) -> GoalpaperResult<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                GoalpaperError::validation(format!(
                    "utc offset {minutes} min is out of range (must be within +/-24h)"
                ))
            })?;
        Ok(Self { offset })
    }

    pub fn offset(self) -> FixedOffset {
        self.offset
    }

    /// Calendar date of `now` in this policy's offset.
    pub fn date_at(self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Calendar date of the current instant.
    pub fn today(self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

/// Derived progress for one render; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Whole days from start to end. Zero or negative for empty/inverted ranges.
    pub total_days: i64,
    /// Days from start to today, clamped at zero.
    pub days_passed: i64,
    /// Days from today to end, clamped at zero.
    pub days_remaining: i64,
    /// `round(days_passed / total_days * 100)`, or 0 for an empty range.
    pub percent: i64,
}

impl Progress {
    pub fn compute(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        let total_days = (end - start).num_days();
        let days_passed = (today - start).num_days().max(0);
        let days_remaining = (end - today).num_days().max(0);
        let percent = if total_days > 0 {
            // Half-up rounding without going through floats.
            (200 * days_passed + total_days) / (2 * total_days)
        } else {
            0
        };

        Self {
            total_days,
            days_passed,
            days_remaining,
            percent,
        }
    }

    /// Number of dots drawn.
    pub fn dot_count(self) -> u32 {
        u32::try_from(self.total_days.max(0)).unwrap_or(u32::MAX)
    }

    /// Classify dot `index` against today's position in the range.
    pub fn dot_state(self, index: u32) -> DotState {
        let i = i64::from(index);
        if i < self.days_passed {
            DotState::Completed
        } else if i == self.days_passed {
            DotState::Today
        } else {
            DotState::Remaining
        }
    }
}

/// Paint class of a single grid dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DotState {
    /// Day already passed.
    Completed,
    /// The current day.
    Today,
    /// Day still ahead.
    Remaining,
}

#[cfg(test)]
#[path = "../tests/unit/progress.rs"]
mod tests;
