//! Conversion between Gregorian and lunar dates.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::CalendarError;
use crate::attrs::{Animal, Weekday, ZodiacSign, lunar_festival, solar_festival};
use crate::consts::MAX_MONTH;
use crate::lunar::LunarDate;
use crate::record::YearIndex;
use crate::sexagenary::{StemBranch, day_pillar, month_pillar, year_pillar};
use crate::solar::SolarDate;
use crate::term::{SolarTerm, term_on, terms_of_month};

/// Everything known about one day, in both calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub solar:            SolarDate,
    pub lunar:            LunarDate,
    pub ganzhi_year:      StemBranch,
    pub ganzhi_month:     StemBranch,
    pub ganzhi_day:       StemBranch,
    pub animal:           Animal,
    pub astro:            ZodiacSign,
    pub weekday:          Weekday,
    pub term:             Option<SolarTerm>,
    pub festival:         Option<String>,
    pub lunar_festival:   Option<String>,
    pub lunar_month_name: String,
    pub lunar_day_name:   String,
    pub weekday_name:     String,
    /// Whether the solar date is today on the local clock.
    pub is_today:         bool,
}

/// Converts a Gregorian date to the lunar calendar.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date does not exist or lies
/// outside 1900-01-31..=3000-12-31.
///
/// # Example
/// ```
/// let result = nongli::solar_to_lunar(1987, 11, 1).unwrap();
/// assert_eq!(result.lunar.to_string(), "1987年九月初十");
/// assert_eq!(result.ganzhi_year.to_string(), "丁卯");
/// ```
pub fn solar_to_lunar(year: u16, month: u8, day: u8) -> Result<ConversionResult, CalendarError> {
    convert_solar(SolarDate::new(year, month, day)?)
}

/// Converts a lunar date to the Gregorian calendar.
///
/// # Errors
/// - `CalendarError::InputRange` if the year or month is out of range, or the
///   date falls after 3000-12-31.
/// - `CalendarError::InvalidLeapMonth` if `is_leap` is set for a month that is
///   not doubled in that year.
/// - `CalendarError::DayOutOfRange` if the day exceeds the month's length.
pub fn lunar_to_solar(year: u16, month: u8, day: u8, is_leap: bool) -> Result<ConversionResult, CalendarError> {
    convert_lunar(LunarDate::new(year, month, day, is_leap)?)
}

/// Forward conversion from an already validated Gregorian date.
///
/// # Errors
/// Cannot fail for dates built through [`SolarDate::new`]; the error is kept
/// for the table lookups, which check their own inputs.
#[tracing::instrument(level = "trace", skip_all, fields(date = %solar))]
pub fn convert_solar(solar: SolarDate) -> Result<ConversionResult, CalendarError> {
    let out_of_range = || CalendarError::input_range(solar.year(), solar.month(), solar.day());
    let epoch_day = solar.epoch_day_number();
    let (record, mut offset) = YearIndex::get().locate(epoch_day);

    let mut found = None;
    for (month, is_leap, len) in record.months() {
        let len = u32::from(len);
        if offset < len {
            found = Some((month, is_leap));
            break;
        }
        trace!(month, is_leap, len, "skipping lunar month");
        offset -= len;
    }
    // The last supported solar day lies inside lunar 3000-11.
    let (month, is_leap) = found.ok_or_else(out_of_range)?;
    let day = u8::try_from(offset + 1).map_err(|_| out_of_range())?;
    let lunar = LunarDate::from_parts(record.year(), month, day, is_leap);

    let [(_, first_term_day), _] = terms_of_month(solar.year(), solar.month())?;
    let term = term_on(solar.year(), solar.month(), solar.day())?;
    let weekday = Weekday::from_iso(solar.iso_weekday()).map_err(|_| out_of_range())?;
    let ganzhi_month = month_pillar(solar.year(), solar.month(), solar.day(), first_term_day)?;
    let astro = ZodiacSign::of_date(solar.month(), solar.day()).ok_or_else(out_of_range)?;

    debug!(%solar, %lunar, "converted solar date");
    Ok(ConversionResult {
        solar,
        lunar,
        ganzhi_year: year_pillar(lunar.year()),
        ganzhi_month,
        ganzhi_day: day_pillar(epoch_day),
        animal: Animal::of_year(lunar.year()),
        astro,
        weekday,
        term,
        festival: solar_festival(solar.month(), solar.day()).map(str::to_owned),
        lunar_festival: lunar_festival(month, day, record.regular_length(MAX_MONTH)).map(str::to_owned),
        lunar_month_name: lunar.month_name(),
        lunar_day_name: lunar.day_name(),
        weekday_name: weekday.name(),
        is_today: SolarDate::today() == Some(solar),
    })
}

/// Reverse conversion from an already validated lunar date.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date falls after 3000-12-31.
#[tracing::instrument(level = "trace", skip_all, fields(date = %lunar))]
pub fn convert_lunar(lunar: LunarDate) -> Result<ConversionResult, CalendarError> {
    let index = YearIndex::get();
    let record = index.record(lunar.year());

    let preceding: u32 = record
        .months()
        .take_while(|&(m, leap, _)| (m, leap) != (lunar.month(), lunar.is_leap()))
        .map(|(_, _, len)| u32::from(len))
        .sum();
    let epoch_day = index.year_start(lunar.year()) + preceding + u32::from(lunar.day()) - 1;
    debug!(%lunar, epoch_day, "resolved lunar date");

    convert_solar(SolarDate::from_epoch_day(epoch_day)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_to_lunar_1987_11_01() {
        let result = solar_to_lunar(1987, 11, 1).unwrap();
        assert_eq!(result.lunar, LunarDate::new(1987, 9, 10, false).unwrap());
        assert_eq!(result.ganzhi_year.to_string(), "丁卯");
        assert_eq!(result.ganzhi_month.to_string(), "庚戌");
        assert_eq!(result.ganzhi_day.to_string(), "甲寅");
        assert_eq!(result.animal, Animal::Rabbit);
        assert_eq!(result.astro, ZodiacSign::Scorpio);
        assert_eq!(result.weekday.number(), 7);
        assert_eq!(result.weekday_name, "星期日");
        assert_eq!(result.lunar_month_name, "九月");
        assert_eq!(result.lunar_day_name, "初十");
        assert_eq!(result.term, None);
        assert_eq!(result.festival, None);
        assert_eq!(result.lunar_festival, None);
    }

    #[test]
    fn test_solar_to_lunar_cases() {
        struct TestCase {
            solar:    (u16, u8, u8),
            lunar:    (u16, u8, u8, bool),
            festival: Option<&'static str>,
        }

        let cases = [
            TestCase {
                solar:    (1900, 1, 31),
                lunar:    (1900, 1, 1, false),
                festival: Some("春节"),
            },
            TestCase {
                solar:    (2000, 2, 5),
                lunar:    (2000, 1, 1, false),
                festival: Some("春节"),
            },
            TestCase {
                solar:    (2024, 2, 10),
                lunar:    (2024, 1, 1, false),
                festival: Some("春节"),
            },
            TestCase {
                solar:    (1987, 7, 26),
                lunar:    (1987, 6, 1, true),
                festival: None,
            },
            TestCase {
                solar:    (2023, 3, 22),
                lunar:    (2023, 2, 1, true),
                festival: None,
            },
            TestCase {
                solar:    (2025, 7, 25),
                lunar:    (2025, 6, 1, true),
                festival: None,
            },
            TestCase {
                solar:    (2033, 12, 22),
                lunar:    (2033, 11, 1, true),
                festival: None,
            },
            TestCase {
                solar:    (3000, 12, 18),
                lunar:    (3000, 11, 1, false),
                festival: None,
            },
            TestCase {
                solar:    (3000, 12, 31),
                lunar:    (3000, 11, 14, false),
                festival: None,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.solar;
            let result = solar_to_lunar(y, m, d).unwrap();
            let (ly, lm, ld, leap) = case.lunar;
            assert_eq!(
                (result.lunar.year(), result.lunar.month(), result.lunar.day(), result.lunar.is_leap()),
                (ly, lm, ld, leap),
                "{y}-{m}-{d}"
            );
            assert_eq!(result.lunar_festival.as_deref(), case.festival, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_solar_to_lunar_rejects_out_of_range() {
        for (y, m, d) in [(1900, 1, 30), (1899, 12, 31), (3001, 1, 1), (2023, 2, 29), (2024, 13, 1)] {
            assert!(
                matches!(solar_to_lunar(y, m, d), Err(CalendarError::InputRange { .. })),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn test_lunar_to_solar_cases() {
        let result = lunar_to_solar(1987, 9, 10, false).unwrap();
        assert_eq!(result.solar, SolarDate::new(1987, 11, 1).unwrap());

        let result = lunar_to_solar(1987, 6, 1, true).unwrap();
        assert_eq!(result.solar, SolarDate::new(1987, 7, 26).unwrap());
        assert_eq!(result.lunar_month_name, "闰六月");

        let result = lunar_to_solar(1900, 1, 1, false).unwrap();
        assert_eq!(result.solar, SolarDate::MIN);
    }

    #[test]
    fn test_lunar_to_solar_errors() {
        assert!(matches!(
            lunar_to_solar(1988, 6, 1, true),
            Err(CalendarError::InvalidLeapMonth { year: 1988, month: 6 })
        ));
        assert!(matches!(
            lunar_to_solar(1987, 6, 30, true),
            Err(CalendarError::DayOutOfRange { max: 29, .. })
        ));
        assert!(matches!(
            lunar_to_solar(3000, 12, 2, false),
            Err(CalendarError::InputRange { .. })
        ));
        assert!(matches!(
            lunar_to_solar(1899, 12, 1, false),
            Err(CalendarError::InputRange { .. })
        ));
        // accepted by validation, but lands in 3001
        assert!(matches!(
            lunar_to_solar(3000, 12, 1, false),
            Err(CalendarError::InputRange { .. })
        ));
    }

    #[test]
    fn test_month_pillar_follows_first_term() {
        assert_eq!(solar_to_lunar(1987, 11, 7).unwrap().ganzhi_month.to_string(), "庚戌");
        assert_eq!(solar_to_lunar(1987, 11, 8).unwrap().ganzhi_month.to_string(), "辛亥");
        let result = solar_to_lunar(1987, 11, 8).unwrap();
        assert_eq!(result.term.map(SolarTerm::name), Some("立冬"));
    }

    #[test]
    fn test_festivals() {
        let result = solar_to_lunar(2024, 1, 1).unwrap();
        assert_eq!(result.festival.as_deref(), Some("元旦节"));

        // the day before lunar new year is always 除夕
        let result = solar_to_lunar(2024, 2, 9).unwrap();
        assert_eq!(result.lunar.month(), 12);
        assert_eq!(result.lunar_festival.as_deref(), Some("除夕"));

        // 2021's twelfth month is short
        let result = solar_to_lunar(2022, 1, 31).unwrap();
        assert_eq!((result.lunar.month(), result.lunar.day()), (12, 29));
        assert_eq!(result.lunar_festival.as_deref(), Some("除夕"));
    }

    #[test]
    fn test_serde() {
        let result = solar_to_lunar(1987, 11, 1).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["solar"], "1987-11-01");
        assert_eq!(json["ganzhi_year"], "丁卯");
        assert_eq!(json["animal"], "兔");
        assert_eq!(json["astro"], "天蝎座");
        assert_eq!(json["weekday"], 7);
        assert_eq!(json["lunar"]["month"], 9);
        assert_eq!(json["term"], serde_json::Value::Null);

        let parsed: ConversionResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, result);
    }
}
