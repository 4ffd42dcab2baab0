//! Gregorian calendar arithmetic and the validated [`SolarDate`] type.

use std::fmt;
use std::str::FromStr;

use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, EPOCH, EPOCH_WEEKDAY, FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_YEAR,
    GREGORIAN_CYCLE, LAST_YEAR, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};

/// Julian day number of the epoch, 1900-01-31.
const EPOCH_JDN: i64 = jdn(EPOCH.0 as i64, EPOCH.1 as i64, EPOCH.2 as i64);

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a Gregorian month, `None` for a month outside 1..=12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// Julian day number of a proleptic Gregorian date.
const fn jdn(y: i64, m: i64, d: i64) -> i64 {
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Proleptic Gregorian (year, month, day) of a Julian day number.
const fn from_jdn(jdn: i64) -> (i64, i64, i64) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year, month, day)
}

/// A Gregorian date inside the supported range, 1900-01-31 to 3000-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl SolarDate {
    /// Creates a new date, validating both the calendar and the supported range.
    ///
    /// # Errors
    /// Returns `CalendarError::InputRange` if the date does not exist, or lies
    /// before 1900-01-31 or after 3000-12-31.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let err = CalendarError::input_range(year, month, day);
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(err);
        }
        let Some(max) = days_in_month(year, month) else {
            return Err(err);
        };
        if day < MIN_DAY || day > max {
            return Err(err);
        }
        let date = Self { year, month, day };
        if (year, month, day) < EPOCH {
            return Err(err);
        }
        Ok(date)
    }

    /// Earliest supported date (the epoch)
    pub const MIN: Self = Self {
        year:  EPOCH.0,
        month: EPOCH.1,
        day:   EPOCH.2,
    };

    /// Latest supported date
    pub const MAX: Self = Self {
        year:  LAST_YEAR,
        month: DECEMBER,
        day:   31,
    };

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

    /// Days elapsed since the epoch (1900-01-31 is day 0).
    pub const fn epoch_day_number(&self) -> u32 {
        (jdn(self.year as i64, self.month as i64, self.day as i64) - EPOCH_JDN) as u32
    }

    /// Inverse of [`epoch_day_number`](Self::epoch_day_number).
    ///
    /// # Errors
    /// Returns `CalendarError::InputRange` if the day lands after 3000-12-31.
    pub fn from_epoch_day(days: u32) -> Result<Self, CalendarError> {
        let (y, m, d) = from_jdn(EPOCH_JDN + i64::from(days));
        // Month and day always fit; a year past u16 is clamped and then rejected.
        let year = u16::try_from(y).unwrap_or(u16::MAX);
        Self::new(year, m as u8, d as u8)
    }

    /// ISO weekday, Monday = 1 through Sunday = 7.
    pub const fn iso_weekday(&self) -> u8 {
        ((self.epoch_day_number() + EPOCH_WEEKDAY as u32 - 1) % 7) as u8 + 1
    }

    /// Today's date on the local clock, if it is inside the supported range.
    pub fn today() -> Option<Self> {
        chrono::Local::now().date_naive().try_into().ok()
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` date.
    ///
    /// Text that is not three numbers is `CalendarError::InvalidFormat`; a
    /// well-formed date outside the calendar or the range is `InputRange`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::InvalidFormat(s.to_owned());
        let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).map(str::trim).collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(malformed());
        };
        let year = y.parse::<u16>().map_err(|_| malformed())?;
        let month = m.parse::<u8>().map_err(|_| malformed())?;
        let day = d.parse::<u8>().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for SolarDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<SolarDate> for (u16, u8, u8) {
    fn from(date: SolarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl TryFrom<chrono::NaiveDate> for SolarDate {
    type Error = CalendarError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year()).unwrap_or(0);
        // chrono guarantees month <= 12 and day <= 31
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<SolarDate> for chrono::NaiveDate {
    type Error = CalendarError;

    fn try_from(date: SolarDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .ok_or_else(|| CalendarError::input_range(date.year, date.month, date.day))
    }
}

impl serde::Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2800,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Some(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28), "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), Some(29), "Century year divisible by 400");
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_new_bounds() {
        assert!(SolarDate::new(1900, 1, 31).is_ok());
        assert!(SolarDate::new(3000, 12, 31).is_ok());

        let result = SolarDate::new(1900, 1, 30);
        assert!(matches!(
            result,
            Err(CalendarError::InputRange {
                year:  1900,
                month: 1,
                day:   30,
            })
        ));
        assert!(SolarDate::new(1899, 12, 31).is_err());
        assert!(SolarDate::new(3001, 1, 1).is_err());
    }

    #[test]
    fn test_new_rejects_impossible_dates() {
        assert!(SolarDate::new(2023, 2, 29).is_err());
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        assert!(SolarDate::new(2024, 4, 31).is_err());
        assert!(SolarDate::new(2024, 13, 1).is_err());
        assert!(SolarDate::new(2024, 0, 1).is_err());
        assert!(SolarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_epoch_day_number() {
        assert_eq!(SolarDate::MIN.epoch_day_number(), 0);
        assert_eq!(SolarDate::new(1900, 2, 1).unwrap().epoch_day_number(), 1);
        assert_eq!(SolarDate::new(1901, 1, 31).unwrap().epoch_day_number(), 365);
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().epoch_day_number(), 36494);
        assert_eq!(SolarDate::MAX.epoch_day_number(), 402_101);
    }

    #[test]
    fn test_from_epoch_day() {
        assert_eq!(SolarDate::from_epoch_day(0).unwrap(), SolarDate::MIN);
        assert_eq!(SolarDate::from_epoch_day(402_101).unwrap(), SolarDate::MAX);
        assert_eq!(
            SolarDate::from_epoch_day(29).unwrap(),
            SolarDate::new(1900, 3, 1).unwrap(),
            "1900 is not a leap year"
        );
        assert!(SolarDate::from_epoch_day(402_102).is_err());
    }

    #[test]
    fn test_epoch_day_inverse_across_range() {
        for days in (0..=402_101).step_by(97) {
            let date = SolarDate::from_epoch_day(days).unwrap();
            assert_eq!(date.epoch_day_number(), days, "{date}");
        }
    }

    #[test]
    fn test_iso_weekday() {
        assert_eq!(SolarDate::MIN.iso_weekday(), 3, "1900-01-31 was a Wednesday");
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().iso_weekday(), 6);
        assert_eq!(SolarDate::new(1987, 11, 1).unwrap().iso_weekday(), 7);
        assert_eq!(SolarDate::MAX.iso_weekday(), 3);
    }

    #[test]
    fn test_display_and_parse() {
        let date = SolarDate::new(1987, 11, 1).unwrap();
        assert_eq!(date.to_string(), "1987-11-01");
        assert_eq!("1987-11-01".parse::<SolarDate>().unwrap(), date);
        assert_eq!(" 1987-11-1 ".parse::<SolarDate>().unwrap(), date);
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:    &'static str,
            expected: CalendarError,
        }

        let cases = [
            TestCase {
                input:    "1987-11",
                expected: CalendarError::InvalidFormat("1987-11".to_owned()),
            },
            TestCase {
                input:    "1987/11/01",
                expected: CalendarError::InvalidFormat("1987/11/01".to_owned()),
            },
            TestCase {
                input:    "1987-xx-01",
                expected: CalendarError::InvalidFormat("1987-xx-01".to_owned()),
            },
            TestCase {
                input:    "",
                expected: CalendarError::InvalidFormat(String::new()),
            },
            TestCase {
                input:    "1900-01-30",
                expected: CalendarError::input_range(1900, 1, 30),
            },
            TestCase {
                input:    "2023-02-29",
                expected: CalendarError::input_range(2023, 2, 29),
            },
        ];

        for case in &cases {
            assert_eq!(case.input.parse::<SolarDate>(), Err(case.expected.clone()), "{:?}", case.input);
        }
        let err = "1987/11/01".parse::<SolarDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format: 1987/11/01");
    }

    #[test]
    fn test_chrono_interop() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let date = SolarDate::try_from(naive).unwrap();
        assert_eq!(date, SolarDate::new(2024, 2, 10).unwrap());
        assert_eq!(chrono::NaiveDate::try_from(date).unwrap(), naive);
        assert_eq!(chrono::NaiveDate::try_from(SolarDate::MIN).unwrap().to_string(), "1900-01-31");
        assert_eq!(chrono::NaiveDate::try_from(SolarDate::MAX).unwrap().to_string(), "3000-12-31");

        let too_early = chrono::NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
        assert!(SolarDate::try_from(too_early).is_err());
    }

    #[test]
    fn test_serde() {
        let date = SolarDate::new(2024, 2, 10).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-02-10""#);
        let parsed: SolarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<SolarDate, _> = serde_json::from_str(r#""1900-01-30""#);
        assert!(result.is_err());
    }
}
