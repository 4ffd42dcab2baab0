//! Attributes derived from a date: zodiac animal, tropical sign, weekday,
//! festivals and Chinese numerals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BRANCH_COUNT, LONG_MONTH_DAYS, MAX_MONTH, MAX_SOLAR_DAY, SEXAGENARY_YEAR_ANCHOR, SHORT_MONTH_DAYS,
};
use crate::prelude::*;
use crate::tables::{DAY_TENS, DIGITS, LUNAR_FESTIVALS, MONTH_NUMERALS, SOLAR_FESTIVALS, ZODIAC_CUTOVER_DAYS};

/// Chinese zodiac animal (生肖), in branch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Animal {
    #[display(fmt = "鼠")]
    #[serde(rename = "鼠")]
    Rat,
    #[display(fmt = "牛")]
    #[serde(rename = "牛")]
    Ox,
    #[display(fmt = "虎")]
    #[serde(rename = "虎")]
    Tiger,
    #[display(fmt = "兔")]
    #[serde(rename = "兔")]
    Rabbit,
    #[display(fmt = "龙")]
    #[serde(rename = "龙")]
    Dragon,
    #[display(fmt = "蛇")]
    #[serde(rename = "蛇")]
    Snake,
    #[display(fmt = "马")]
    #[serde(rename = "马")]
    Horse,
    #[display(fmt = "羊")]
    #[serde(rename = "羊")]
    Goat,
    #[display(fmt = "猴")]
    #[serde(rename = "猴")]
    Monkey,
    #[display(fmt = "鸡")]
    #[serde(rename = "鸡")]
    Rooster,
    #[display(fmt = "狗")]
    #[serde(rename = "狗")]
    Dog,
    #[display(fmt = "猪")]
    #[serde(rename = "猪")]
    Pig,
}

impl Animal {
    pub const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Animal of a lunar year; 1900 is a year of the rat.
    pub const fn of_year(lunar_year: u16) -> Self {
        let i = (lunar_year as i32 - SEXAGENARY_YEAR_ANCHOR).rem_euclid(BRANCH_COUNT as i32);
        Self::ALL[i as usize]
    }
}

/// Tropical zodiac sign (星座).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[display(fmt = "摩羯座")]
    #[serde(rename = "摩羯座")]
    Capricorn,
    #[display(fmt = "水瓶座")]
    #[serde(rename = "水瓶座")]
    Aquarius,
    #[display(fmt = "双鱼座")]
    #[serde(rename = "双鱼座")]
    Pisces,
    #[display(fmt = "白羊座")]
    #[serde(rename = "白羊座")]
    Aries,
    #[display(fmt = "金牛座")]
    #[serde(rename = "金牛座")]
    Taurus,
    #[display(fmt = "双子座")]
    #[serde(rename = "双子座")]
    Gemini,
    #[display(fmt = "巨蟹座")]
    #[serde(rename = "巨蟹座")]
    Cancer,
    #[display(fmt = "狮子座")]
    #[serde(rename = "狮子座")]
    Leo,
    #[display(fmt = "处女座")]
    #[serde(rename = "处女座")]
    Virgo,
    #[display(fmt = "天秤座")]
    #[serde(rename = "天秤座")]
    Libra,
    #[display(fmt = "天蝎座")]
    #[serde(rename = "天蝎座")]
    Scorpio,
    #[display(fmt = "射手座")]
    #[serde(rename = "射手座")]
    Sagittarius,
}

impl ZodiacSign {
    /// Signs in the order they begin, starting with the one in force on January 1.
    pub const ALL: [Self; 12] = [
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
    ];

    /// Sign of a Gregorian month and day, `None` if either is out of range.
    pub const fn of_date(month: u8, day: u8) -> Option<Self> {
        if month == 0 || month > MAX_MONTH || day == 0 || day > MAX_SOLAR_DAY {
            return None;
        }
        let m = month as usize;
        if day < ZODIAC_CUTOVER_DAYS[m - 1] {
            Some(Self::ALL[m - 1])
        } else {
            Some(Self::ALL[m % 12])
        }
    }
}

/// Day of the week, ISO numbered (Monday = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// # Errors
    /// Returns the rejected value if it is outside 1..=7.
    pub const fn from_iso(n: u8) -> Result<Self, u8> {
        if n >= 1 && n <= 7 { Ok(Self(n)) } else { Err(n) }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Chinese name, 星期一 through 星期日.
    pub fn name(self) -> String {
        format!("星期{}", DIGITS[usize::from(self.0 % 7)])
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_iso(value).map_err(|n| format!("Invalid weekday: {n} (must be 1-7)"))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Gregorian festival on a month and day, e.g. 元旦节 on 1-1.
pub fn solar_festival(month: u8, day: u8) -> Option<&'static str> {
    lookup(&SOLAR_FESTIVALS, (month, day))
}

/// Lunar festival on a lunar month and day.
///
/// 除夕 is the last day of the twelfth month, so when that month is short its
/// 29th day is looked up as the 30th.
pub fn lunar_festival(month: u8, day: u8, twelfth_month_length: u8) -> Option<&'static str> {
    let key = if (month, day) == (12, SHORT_MONTH_DAYS) && twelfth_month_length == SHORT_MONTH_DAYS {
        (12, LONG_MONTH_DAYS)
    } else {
        (month, day)
    };
    lookup(&LUNAR_FESTIVALS, key)
}

fn lookup(table: &[((u8, u8), &'static str)], key: (u8, u8)) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
}

/// Chinese name of a lunar month: 正月 .. 十月, 冬月, 腊月, with 闰 for a leap month.
///
/// Returns `None` for a month outside 1..=12.
pub fn month_name(month: u8, is_leap: bool) -> Option<String> {
    let numeral = MONTH_NUMERALS.get(usize::from(month).checked_sub(1)?)?;
    let prefix = if is_leap { "闰" } else { "" };
    Some(format!("{prefix}{numeral}月"))
}

/// Chinese name of a lunar day: 初一 .. 初十, 十一 .. 十九, 二十, 廿一 .. 廿九, 三十.
///
/// Returns `None` for a day outside 1..=30.
pub fn day_name(day: u8) -> Option<String> {
    let name = match day {
        0 => return None,
        10 => "初十".to_owned(),
        20 => "二十".to_owned(),
        30 => "三十".to_owned(),
        1..LONG_MONTH_DAYS => format!("{}{}", DAY_TENS[usize::from(day / 10)], DIGITS[usize::from(day % 10)]),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_of_year() {
        assert_eq!(Animal::of_year(1900), Animal::Rat);
        assert_eq!(Animal::of_year(1987), Animal::Rabbit);
        assert_eq!(Animal::of_year(2024), Animal::Dragon);
        assert_eq!(Animal::of_year(3000), Animal::Monkey);
        assert_eq!(Animal::Rabbit.to_string(), "兔");
    }

    #[test]
    fn test_zodiac_sign_cases() {
        struct TestCase {
            month:    u8,
            day:      u8,
            expected: ZodiacSign,
        }

        let cases = [
            TestCase { month: 1, day: 1, expected: ZodiacSign::Capricorn },
            TestCase { month: 1, day: 19, expected: ZodiacSign::Capricorn },
            TestCase { month: 1, day: 20, expected: ZodiacSign::Aquarius },
            TestCase { month: 3, day: 21, expected: ZodiacSign::Aries },
            TestCase { month: 11, day: 1, expected: ZodiacSign::Scorpio },
            TestCase { month: 11, day: 22, expected: ZodiacSign::Sagittarius },
            TestCase { month: 12, day: 21, expected: ZodiacSign::Sagittarius },
            TestCase { month: 12, day: 22, expected: ZodiacSign::Capricorn },
            TestCase { month: 12, day: 31, expected: ZodiacSign::Capricorn },
        ];

        for case in &cases {
            assert_eq!(
                ZodiacSign::of_date(case.month, case.day),
                Some(case.expected),
                "{}-{}",
                case.month,
                case.day
            );
        }
        assert_eq!(ZodiacSign::Scorpio.to_string(), "天蝎座");
    }

    #[test]
    fn test_zodiac_sign_rejects_invalid_dates() {
        for (month, day) in [(0, 1), (13, 1), (1, 0), (1, 32)] {
            assert_eq!(ZodiacSign::of_date(month, day), None, "{month}-{day}");
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Weekday::from_iso(1).unwrap().name(), "星期一");
        assert_eq!(Weekday::from_iso(6).unwrap().name(), "星期六");
        assert_eq!(Weekday::from_iso(7).unwrap().name(), "星期日");
        assert!(Weekday::from_iso(0).is_err());
        assert!(Weekday::from_iso(8).is_err());
    }

    #[test]
    fn test_festivals() {
        assert_eq!(solar_festival(1, 1), Some("元旦节"));
        assert_eq!(solar_festival(10, 1), Some("国庆节"));
        assert_eq!(solar_festival(10, 2), None);

        assert_eq!(lunar_festival(1, 1, 30), Some("春节"));
        assert_eq!(lunar_festival(8, 15, 29), Some("中秋节"));
        assert_eq!(lunar_festival(12, 30, 30), Some("除夕"));
    }

    #[test]
    fn test_new_years_eve_in_short_twelfth_month() {
        assert_eq!(lunar_festival(12, 29, 29), Some("除夕"), "short month ends on the 29th");
        assert_eq!(lunar_festival(12, 29, 30), None, "long month ends on the 30th");
        assert_eq!(lunar_festival(11, 29, 29), None);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1, false).as_deref(), Some("正月"));
        assert_eq!(month_name(9, false).as_deref(), Some("九月"));
        assert_eq!(month_name(11, false).as_deref(), Some("冬月"));
        assert_eq!(month_name(12, false).as_deref(), Some("腊月"));
        assert_eq!(month_name(6, true).as_deref(), Some("闰六月"));
        assert_eq!(month_name(0, false), None);
        assert_eq!(month_name(13, true), None);
    }

    #[test]
    fn test_day_name() {
        for (day, expected) in [
            (1, "初一"),
            (9, "初九"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(day_name(day).as_deref(), Some(expected), "day {day}");
        }
        for day in [0, 31, 40, u8::MAX] {
            assert_eq!(day_name(day), None, "day {day}");
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Animal::Rabbit).unwrap();
        assert_eq!(json, r#""兔""#);
        let parsed: ZodiacSign = serde_json::from_str(r#""天蝎座""#).unwrap();
        assert_eq!(parsed, ZodiacSign::Scorpio);
        let weekday: Weekday = serde_json::from_str("7").unwrap();
        assert_eq!(weekday.number(), 7);
        assert!(serde_json::from_str::<Weekday>("0").is_err());
    }
}
