use derive_more::Display;

/// The half of the day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Period {
    #[display("AM")]
    Am,
    #[display("PM")]
    Pm,
}

impl Period {
    /// Returns the period an hour of the 24-hour day (`0..24`) falls into.
    #[must_use]
    pub const fn of_hour(hour_of_day: u64) -> Self {
        if hour_of_day <= 11 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    /// Reads the period of a clock reading, ignoring the case.
    ///
    /// Only `PM` shifts the hour, so every other token counts as `AM`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.to_uppercase() == "PM" {
            Self::Pm
        } else {
            Self::Am
        }
    }
}
