use serde::{Deserialize, Serialize};

use crate::time::{ClockDuration, ClockTime, TimeSum, WeekDay};

/// A single entry of a batch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Calculation {
    start: ClockTime,
    duration: ClockDuration,
    #[serde(default)]
    starting_day: Option<WeekDay>,
}

impl Calculation {
    #[must_use]
    pub const fn new(start: ClockTime, duration: ClockDuration, starting_day: Option<WeekDay>) -> Self {
        Self {
            start,
            duration,
            starting_day,
        }
    }

    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    #[must_use]
    pub const fn duration(&self) -> ClockDuration {
        self.duration
    }

    #[must_use]
    pub const fn starting_day(&self) -> Option<WeekDay> {
        self.starting_day
    }

    #[must_use]
    pub fn evaluate(&self) -> CalculationResult {
        let sum = TimeSum::compute(self.start, self.duration, self.starting_day);

        CalculationResult {
            start: self.start,
            duration: self.duration,
            starting_day: self.starting_day,
            result: sum.to_string(),
            days_later: sum.days_later(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    start: ClockTime,
    duration: ClockDuration,
    starting_day: Option<WeekDay>,
    result: String,
    days_later: u64,
}

impl CalculationResult {
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub const fn days_later(&self) -> u64 {
        self.days_later
    }
}
