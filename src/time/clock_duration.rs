use std::str::FromStr;

use derive_more::Display;
use serde::{ser, Deserialize, Serialize};

use crate::time::{parse_number, split_segments, FormatError, MINUTES_PER_HOUR};

/// A duration written as `hours:minutes`.
///
/// There is no upper bound on either part, `25:00` or `0:90` are valid.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(try_from = "String")]
#[display("{hours}:{minutes:02}")]
pub struct ClockDuration {
    hours: u64,
    minutes: u64,
}

impl ClockDuration {
    #[must_use]
    pub const fn new(hours: u64, minutes: u64) -> Self {
        Self { hours, minutes }
    }

    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    // the maximum is (2^64 - 1) * 61, which fits easily into an u128
    #[must_use]
    pub const fn as_minutes(&self) -> u128 {
        self.hours as u128 * MINUTES_PER_HOUR + self.minutes as u128
    }
}

impl FromStr for ClockDuration {
    type Err = FormatError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [hours, minutes] = split_segments::<2>(string, ":")?;

        Ok(Self::new(parse_number(hours)?, parse_number(minutes)?))
    }
}

impl TryFrom<String> for ClockDuration {
    type Error = FormatError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}

impl Serialize for ClockDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
