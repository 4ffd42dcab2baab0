//! Conversion between the Gregorian calendar and the Chinese lunisolar
//! calendar (农历) for 1900-01-31 through 3000-12-31.
//!
//! Besides the lunar date, every conversion reports the stem-branch (干支)
//! pillars of year, month and day, the zodiac animal, the tropical sign, the
//! weekday, the solar term and any festival falling on the day.
//!
//! ```
//! use nongli::{lunar_to_solar, solar_to_lunar};
//!
//! let day = solar_to_lunar(1987, 11, 1).unwrap();
//! assert_eq!(day.lunar.to_string(), "1987年九月初十");
//! assert_eq!(day.animal.to_string(), "兔");
//!
//! // the sixth month of 1987 was doubled
//! let leap = lunar_to_solar(1987, 6, 1, true).unwrap();
//! assert_eq!(leap.solar.to_string(), "1987-07-26");
//! ```

mod attrs;
mod consts;
mod convert;
mod daily;
mod error;
mod lunar;
mod prelude;
mod record;
mod sexagenary;
mod solar;
mod tables;
mod term;

pub use attrs::{Animal, Weekday, ZodiacSign, day_name, lunar_festival, month_name, solar_festival};
pub use consts::*;
pub use convert::{ConversionResult, convert_lunar, convert_solar, lunar_to_solar, solar_to_lunar};
pub use daily::{daily_info, festivals, solar_term};
pub use error::CalendarError;
pub use lunar::LunarDate;
pub use record::YearRecord;
pub use sexagenary::{StemBranch, day_pillar, month_pillar, year_pillar};
pub use solar::{SolarDate, days_in_month, is_leap_year};
pub use term::{SolarTerm, term_day, term_days, term_on, terms_of_month};

impl SolarDate {
    /// Converts this date to the lunar calendar.
    ///
    /// # Errors
    /// See [`convert_solar`].
    pub fn to_lunar(self) -> Result<ConversionResult, CalendarError> {
        convert_solar(self)
    }
}

impl LunarDate {
    /// Converts this date to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InputRange` if the date falls after 3000-12-31.
    pub fn to_solar(self) -> Result<ConversionResult, CalendarError> {
        convert_lunar(self)
    }
}
