mod error;
mod utils;

pub mod input;
pub mod time;

pub use error::Error;

#[doc(hidden)]
pub use static_assertions;

use log::{debug, trace};

use crate::time::{ClockDuration, ClockTime, TimeSum, WeekDay};

/// Adds the `duration` to the `start_time` and returns the resulting time.
///
/// The `start_time` is a 12-hour clock reading like `"3:00 PM"`, the
/// `duration` is written as `"hours:minutes"`. If a `starting_day` is given,
/// the resulting day of the week is part of the returned string.
///
/// ```
/// # use time_calculator::add_time;
/// assert_eq!(add_time("11:59 PM", "24:05", None).unwrap(), "12:04 AM (2 days later)");
/// assert_eq!(
///     add_time("2:59 AM", "24:00", Some("saturDay")).unwrap(),
///     "2:59 AM, Sunday (next day)"
/// );
/// ```
pub fn add_time(
    start_time: &str,
    duration: &str,
    starting_day: Option<&str>,
) -> Result<String, Error> {
    Ok(compute_time_sum(start_time, duration, starting_day)?.to_string())
}

/// Like [`add_time`], but returns the parts of the result.
///
/// An empty `starting_day` is treated like no starting day.
pub fn compute_time_sum(
    start_time: &str,
    duration: &str,
    starting_day: Option<&str>,
) -> Result<TimeSum, Error> {
    let start: ClockTime = start_time.parse()?;
    let duration: ClockDuration = duration.parse()?;
    let starting_day = starting_day
        .filter(|day| !day.is_empty())
        .map(str::parse::<WeekDay>)
        .transpose()?;

    trace!(
        "adding {} to {} (starting day: {:?})",
        duration,
        start,
        starting_day
    );

    let sum = TimeSum::compute(start, duration, starting_day);
    debug!("{} + {} = {:?}", start, duration, sum);

    Ok(sum)
}
