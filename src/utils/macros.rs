/// Creates a [`ClockTime`](crate::time::ClockTime) from a literal like `11:59 PM`.
///
/// Unlike the parser, the literal is checked to be a valid 12-hour clock
/// reading at compile time.
#[macro_export]
macro_rules! clock_time {
    (@inner $hour:literal : $minute:literal, $period:expr) => {{
        $crate::static_assertions::const_assert!($hour >= 1 && $hour <= 12);
        $crate::static_assertions::const_assert!($minute < 60);

        $crate::time::ClockTime::new($hour, $minute, $period)
    }};
    ( $hour:literal : $minute:literal AM ) => {
        $crate::clock_time!(@inner $hour : $minute, $crate::time::Period::Am)
    };
    ( $hour:literal : $minute:literal PM ) => {
        $crate::clock_time!(@inner $hour : $minute, $crate::time::Period::Pm)
    };
}

#[macro_export]
macro_rules! clock_duration {
    ( $hours:literal : $minutes:literal ) => {
        $crate::time::ClockDuration::new($hours, $minutes)
    };
}
