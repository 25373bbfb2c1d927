use core::fmt;

use crate::time::{
    format_minute, ClockDuration, ClockTime, Period, WeekDay, HOURS_PER_DAY, MINUTES_PER_HOUR,
};

/// The clock reading after adding a duration to a start time, together with
/// the number of days that have passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSum {
    hour: u64,
    minute: u64,
    period: Period,
    week_day: Option<WeekDay>,
    days_later: u64,
}

impl TimeSum {
    #[must_use]
    pub fn compute(start: ClockTime, duration: ClockDuration, starting_day: Option<WeekDay>) -> Self {
        let total_minutes = start.as_minutes() + duration.as_minutes();

        let total_hours = total_minutes / MINUTES_PER_HOUR;
        // at most (2^64 - 1) * 122 minutes, so the days always fit into an u64
        let days_later = (total_hours / HOURS_PER_DAY) as u64;
        // below 24 and 60, the casts can not truncate
        let hour_of_day = (total_hours % HOURS_PER_DAY) as u64;
        let minute = (total_minutes % MINUTES_PER_HOUR) as u64;

        let hour = match hour_of_day % 12 {
            0 => 12,
            hour => hour,
        };

        Self {
            hour,
            minute,
            period: Period::of_hour(hour_of_day),
            week_day: starting_day.map(|day| day + days_later),
            days_later,
        }
    }

    /// The hour on a 12-hour clock, in the range `1..=12`.
    #[must_use]
    pub const fn hour(&self) -> u64 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u64 {
        self.minute
    }

    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// The resulting day, if a starting day was given.
    #[must_use]
    pub const fn week_day(&self) -> Option<WeekDay> {
        self.week_day
    }

    /// The number of full days that have passed, not reduced to a week.
    #[must_use]
    pub const fn days_later(&self) -> u64 {
        self.days_later
    }
}

impl fmt::Display for TimeSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.hour, format_minute(self.minute), self.period)?;

        if let Some(week_day) = self.week_day {
            write!(f, ", {}", week_day)?;
        }

        match self.days_later {
            0 => Ok(()),
            1 => write!(f, " (next day)"),
            days => write!(f, " ({} days later)", days),
        }
    }
}
