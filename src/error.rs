use crate::consts::{FIRST_YEAR, LAST_YEAR};

/// Error type for calendar conversions.
///
/// Every variant describes bad input: the conversion functions are pure, so
/// retrying with the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Date is not a real date, or lies outside 1900-01-31..=3000-12-31.
    #[error(
        "Date {year}-{month:02}-{day:02} is outside the supported range ({first}-01-31 to {last}-12-31)",
        first = FIRST_YEAR,
        last = LAST_YEAR
    )]
    InputRange { year: u16, month: u8, day: u8 },

    /// Text that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The requested leap month does not exist in that lunar year.
    #[error("Lunar year {year} has no leap month {month}")]
    InvalidLeapMonth { year: u16, month: u8 },

    /// The lunar day exceeds the length of the resolved month.
    #[error(
        "Invalid lunar day {day} for {year}-{month:02}{leap} (month has {max} days)",
        leap = leap_suffix(.is_leap)
    )]
    DayOutOfRange {
        year:    u16,
        month:   u8,
        day:     u8,
        is_leap: bool,
        max:     u8,
    },
}

const fn leap_suffix(is_leap: &bool) -> &'static str {
    if *is_leap { " (leap)" } else { "" }
}

impl CalendarError {
    pub(crate) const fn input_range(year: u16, month: u8, day: u8) -> Self {
        Self::InputRange { year, month, day }
    }
}
