use std::ops::Add;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::DAYS_PER_WEEK;

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(try_from = "String")]
pub enum WeekDay {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl WeekDay {
    #[must_use]
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self::week_days()[(self.as_usize() + 1) % 7]
    }
}

impl Add<u64> for WeekDay {
    type Output = Self;

    fn add(self, days: u64) -> Self::Output {
        // the remainder is below 7, so it always fits into an usize
        let offset = (days % DAYS_PER_WEEK) as usize;
        Self::week_days()[(self.as_usize() + offset) % 7]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{name}\" is not a day of the week")]
pub struct InvalidWeekDay {
    name: String,
}

impl InvalidWeekDay {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    /// Parses the english name of the day, ignoring the case.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let name = string.to_lowercase();

        Self::week_days()
            .into_iter()
            .find(|day| day.to_string().to_lowercase() == name)
            .ok_or_else(|| InvalidWeekDay {
                name: string.to_string(),
            })
    }
}

impl TryFrom<String> for WeekDay {
    type Error = InvalidWeekDay;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}
