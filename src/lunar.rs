//! The validated [`LunarDate`] type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::attrs::{day_name, month_name};
use crate::consts::{LAST_YEAR, MAX_MONTH, MIN_DAY};
use crate::record::YearRecord;

/// A date in the Chinese lunisolar calendar.
///
/// `month` is the number of the regular month; a leap month carries the
/// number of the regular month it follows, with `is_leap` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLunarDate")]
pub struct LunarDate {
    year:    u16,
    month:   u8,
    is_leap: bool,
    day:     u8,
}

impl LunarDate {
    /// Creates a new lunar date, checking it against the year's month layout.
    ///
    /// # Errors
    /// - `CalendarError::InputRange` if the year is outside 1900..=3000, the
    ///   month outside 1..=12, or the date is past lunar 3000-12-01.
    /// - `CalendarError::InvalidLeapMonth` if `is_leap` is set and the year's
    ///   leap month is not `month`.
    /// - `CalendarError::DayOutOfRange` if the day is 0 or exceeds the month's length.
    pub fn new(year: u16, month: u8, day: u8, is_leap: bool) -> Result<Self, CalendarError> {
        let record = YearRecord::for_year(year).map_err(|_| CalendarError::input_range(year, month, day))?;
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(CalendarError::input_range(year, month, day));
        }
        // The last lunar month of the table range is only accepted up to its first day.
        if year == LAST_YEAR && month == MAX_MONTH && day > MIN_DAY {
            return Err(CalendarError::input_range(year, month, day));
        }

        let max = record
            .length_of(month, is_leap)
            .ok_or(CalendarError::InvalidLeapMonth { year, month })?;
        if day < MIN_DAY || day > max {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                is_leap,
                max,
            });
        }

        Ok(Self {
            year,
            month,
            is_leap,
            day,
        })
    }

    /// Builds a date the forward conversion has already proven valid.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8, is_leap: bool) -> Self {
        Self {
            year,
            month,
            is_leap,
            day,
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.is_leap
    }

    /// Chinese month name, e.g. 九月 or 闰六月.
    pub fn month_name(&self) -> String {
        // month and day are in range once constructed
        month_name(self.month, self.is_leap).unwrap_or_default()
    }

    /// Chinese day name, e.g. 初十.
    pub fn day_name(&self) -> String {
        day_name(self.day).unwrap_or_default()
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}

/// Unvalidated shape used for deserialization.
#[derive(Deserialize)]
struct RawLunarDate {
    year:    u16,
    month:   u8,
    #[serde(default)]
    is_leap: bool,
    day:     u8,
}

impl TryFrom<RawLunarDate> for LunarDate {
    type Error = CalendarError;

    fn try_from(raw: RawLunarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day, raw.is_leap)
    }
}
