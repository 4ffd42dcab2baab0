//! Lookups for a single day, keyed by [`chrono::NaiveDate`].

use chrono::NaiveDate;

use crate::CalendarError;
use crate::convert::{ConversionResult, convert_solar};
use crate::solar::SolarDate;
use crate::term::{SolarTerm, term_on};

/// Full conversion of a day.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date lies outside
/// 1900-01-31..=3000-12-31.
pub fn daily_info(date: NaiveDate) -> Result<ConversionResult, CalendarError> {
    convert_solar(SolarDate::try_from(date)?)
}

/// Solar term falling on the day, if any.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date lies outside
/// 1900-01-31..=3000-12-31.
pub fn solar_term(date: NaiveDate) -> Result<Option<SolarTerm>, CalendarError> {
    let date = SolarDate::try_from(date)?;
    term_on(date.year(), date.month(), date.day())
}

/// Festivals on the day, the Gregorian one first.
///
/// # Errors
/// Returns `CalendarError::InputRange` if the date lies outside
/// 1900-01-31..=3000-12-31.
pub fn festivals(date: NaiveDate) -> Result<Vec<String>, CalendarError> {
    let info = daily_info(date)?;
    Ok(info.festival.into_iter().chain(info.lunar_festival).collect())
}
