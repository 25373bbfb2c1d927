pub const MINUTES_PER_HOUR: u128 = 60;
pub const HOURS_PER_DAY: u128 = 24;
pub const DAYS_PER_WEEK: u64 = 7;

/// Formats the minute of an hour with two digits.
///
/// Only values below 10 are padded, so anything above 99 is returned as-is.
#[must_use]
pub fn format_minute(minute: u64) -> String {
    if minute < 10 {
        format!("0{}", minute)
    } else {
        minute.to_string()
    }
}

mod format_error;
pub use format_error::*;
mod period;
pub use period::*;
mod clock_time;
pub use clock_time::*;
mod clock_duration;
pub use clock_duration::*;
mod week_day;
pub use week_day::*;
mod time_sum;
pub use time_sum::*;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_minute() {
        for minute in 0..10 {
            assert_eq!(format_minute(minute), format!("0{}", minute));
        }

        for minute in 10..60 {
            assert_eq!(format_minute(minute), minute.to_string());
        }

        assert_eq!(format_minute(100), "100".to_string());
    }
}
