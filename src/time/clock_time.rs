use std::str::FromStr;

use derive_more::Display;
use serde::{ser, Deserialize, Serialize};

use crate::time::{parse_number, split_segments, FormatError, Period, MINUTES_PER_HOUR};

/// A reading of a 12-hour clock like `3:00 PM`.
///
/// The hour and the minute are taken as they are written, values like
/// `13:75 AM` are not rejected.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[display("{hour}:{minute:02} {period}")]
pub struct ClockTime {
    hour: u64,
    minute: u64,
    period: Period,
}

impl ClockTime {
    #[must_use]
    pub const fn new(hour: u64, minute: u64, period: Period) -> Self {
        Self {
            hour,
            minute,
            period,
        }
    }

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

    /// Returns the minutes since midnight.
    ///
    /// Every PM hour is shifted by 12 hours, including 12 PM, and 12 AM is
    /// not shifted back to 0. So `12:30 AM` is 750 minutes and `12:30 PM`
    /// is 1470 minutes.
    #[must_use]
    pub const fn as_minutes(&self) -> u128 {
        let hour = match self.period {
            Period::Am => self.hour as u128,
            Period::Pm => self.hour as u128 + 12,
        };

        hour * MINUTES_PER_HOUR + self.minute as u128
    }
}

impl FromStr for ClockTime {
    type Err = FormatError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [clock, period] = split_segments::<2>(string, " ")?;
        let [hour, minute] = split_segments::<2>(clock, ":")?;

        Ok(Self::new(
            parse_number(hour)?,
            parse_number(minute)?,
            Period::from_token(period),
        ))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = FormatError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
