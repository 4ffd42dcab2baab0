//! Stem-branch (干支) pillars for years, months and days.

use std::fmt;
use std::str::FromStr;

use crate::CalendarError;
use crate::consts::{
    BRANCH_COUNT, EPOCH_DAY_CYCLE_INDEX, FIRST_YEAR, LAST_YEAR, MONTH_PILLAR_OFFSET, SEXAGENARY_CYCLE,
    SEXAGENARY_YEAR_ANCHOR, STEM_COUNT,
};
use crate::solar::days_in_month;
use crate::tables::{BRANCHES, STEMS};

/// A position in the 60-term stem-branch cycle.
///
/// Stored as the stem index (0 = 甲) and branch index (0 = 子); only pairs
/// of equal parity exist in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    stem:   u8,
    branch: u8,
}

impl StemBranch {
    /// Pair at position `index` of the cycle, counting 甲子 as 0.
    pub const fn from_cycle(index: u32) -> Self {
        Self {
            stem:   (index % STEM_COUNT) as u8,
            branch: (index % BRANCH_COUNT) as u8,
        }
    }

    /// Position in the cycle, 0 (甲子) through 59 (癸亥).
    pub const fn cycle_index(self) -> u8 {
        // unique i < 60 with i = stem (mod 10) and i = branch (mod 12)
        ((36 * self.stem as u32 + 25 * self.branch as u32) % SEXAGENARY_CYCLE) as u8
    }

    pub const fn stem(self) -> &'static str {
        STEMS[self.stem as usize]
    }

    pub const fn branch(self) -> &'static str {
        BRANCHES[self.branch as usize]
    }

    #[inline]
    pub const fn stem_index(self) -> u8 {
        self.stem
    }

    #[inline]
    pub const fn branch_index(self) -> u8 {
        self.branch
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}

impl FromStr for StemBranch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid stem-branch pair: {s}");
        let mut chars = s.trim().chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let position = |table: &[&str], c: char| {
            table
                .iter()
                .position(|name| name.chars().eq(std::iter::once(c)))
                .ok_or_else(invalid)
        };
        let stem = position(&STEMS, stem)?;
        let branch = position(&BRANCHES, branch)?;
        if stem % 2 != branch % 2 {
            return Err(invalid());
        }
        Ok(Self {
            stem:   stem as u8,
            branch: branch as u8,
        })
    }
}

impl serde::Serialize for StemBranch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for StemBranch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Year pillar of a lunar year.
///
/// Stem `(year - 3) mod 10` and branch `(year - 3) mod 12`, counted from 1 so
/// that a zero remainder picks 癸 / 亥. Counting from 0 with an offset of four
/// is the same thing.
pub const fn year_pillar(lunar_year: u16) -> StemBranch {
    let n = (lunar_year as i32 - SEXAGENARY_YEAR_ANCHOR).rem_euclid(SEXAGENARY_CYCLE as i32);
    StemBranch::from_cycle(n as u32)
}

/// Month pillar of a Gregorian date.
///
/// The pillar changes on the month's first solar term (节), not on the 1st:
/// dates before `first_term_day` still belong to the previous pillar.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date does not exist or its year
/// is outside 1900..=3000.
pub fn month_pillar(
    solar_year: u16,
    solar_month: u8,
    solar_day: u8,
    first_term_day: u8,
) -> Result<StemBranch, CalendarError> {
    let exists = (FIRST_YEAR..=LAST_YEAR).contains(&solar_year)
        && days_in_month(solar_year, solar_month).is_some_and(|max| (1..=max).contains(&solar_day));
    if !exists {
        return Err(CalendarError::input_range(solar_year, solar_month, solar_day));
    }

    let mut index = u32::from(solar_year - FIRST_YEAR) * 12 + u32::from(solar_month) + MONTH_PILLAR_OFFSET;
    if solar_day >= first_term_day {
        index += 1;
    }
    Ok(StemBranch::from_cycle(index))
}

/// Day pillar of the day `epoch_day` days after 1900-01-31.
pub const fn day_pillar(epoch_day: u32) -> StemBranch {
    StemBranch::from_cycle(epoch_day % SEXAGENARY_CYCLE + EPOCH_DAY_CYCLE_INDEX)
}
