//! The 24 solar terms (节气) and the days they fall on.

use std::fmt;
use std::str::FromStr;

use crate::CalendarError;
use crate::consts::{FIRST_YEAR, LAST_YEAR, MAX_MONTH, TERM_COUNT, TERM_OFFSET_BITS};
use crate::tables::{SOLAR_TERM_NAMES, TERM_DAY_BASE, TERM_DAY_OFFSETS};

/// One of the 24 solar terms, identified by its position in the Gregorian
/// year (0 = 小寒 in early January, 23 = 冬至 in December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarTerm(u8);

impl SolarTerm {
    /// Creates a term from its index in `0..24`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < TERM_COUNT { Some(Self(index)) } else { None }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Gregorian month the term falls in.
    pub const fn month(self) -> u8 {
        self.0 / 2 + 1
    }

    /// Whether this is the first term of its month (a 节, which opens a month pillar).
    pub const fn is_sectional(self) -> bool {
        self.0 % 2 == 0
    }

    pub const fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.0 as usize]
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolarTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SOLAR_TERM_NAMES
            .iter()
            .position(|name| *name == s.trim())
            .map(|i| Self(i as u8))
            .ok_or_else(|| format!("Unknown solar term: {s}"))
    }
}

impl serde::Serialize for SolarTerm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for SolarTerm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// All 24 term days of a Gregorian year, in term order.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the year is outside 1900..=3000.
pub fn term_days(year: u16) -> Result<[u8; TERM_COUNT], CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::input_range(year, 1, 1));
    }
    let packed = TERM_DAY_OFFSETS[usize::from(year - FIRST_YEAR)];
    let mask = (1u128 << TERM_OFFSET_BITS) - 1;
    Ok(std::array::from_fn(|i| {
        let offset = (packed >> (TERM_OFFSET_BITS as usize * i)) & mask;
        TERM_DAY_BASE[i] + offset as u8
    }))
}

/// Day of month on which `term` falls in `year`.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the year is outside 1900..=3000.
pub fn term_day(year: u16, term: SolarTerm) -> Result<u8, CalendarError> {
    Ok(term_days(year)?[usize::from(term.index())])
}

/// The two terms of a Gregorian month with their days: `[(节, day), (中气, day)]`.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the year is outside 1900..=3000 or
/// the month outside 1..=12.
pub fn terms_of_month(year: u16, month: u8) -> Result<[(SolarTerm, u8); 2], CalendarError> {
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::input_range(year, month, 1));
    }
    let days = term_days(year)?;
    let first = (month - 1) * 2;
    Ok([first, first + 1].map(|i| (SolarTerm(i), days[usize::from(i)])))
}

/// The solar term that falls on the given date, if any.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the year is outside 1900..=3000 or
/// the month outside 1..=12.
pub fn term_on(year: u16, month: u8, day: u8) -> Result<Option<SolarTerm>, CalendarError> {
    let terms = terms_of_month(year, month)?;
    Ok(terms.into_iter().find(|&(_, d)| d == day).map(|(term, _)| term))
}
