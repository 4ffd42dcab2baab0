/// First year covered by the tables (inclusive)
pub const FIRST_YEAR: u16 = 1900;
/// Last year covered by the tables (inclusive)
pub const LAST_YEAR: u16 = 3000;
/// Number of years covered by the tables
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Epoch (day number 0): 1900-01-31, which is also lunar 1900-01-01
pub const EPOCH: (u16, u8, u8) = (1900, 1, 31);

/// Maximum valid month (December, or the twelfth lunar month)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Longest Gregorian month
pub const MAX_SOLAR_DAY: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Length of a short ("small") lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of a long ("big") lunar month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Days in a lunar year made of twelve short months
pub(crate) const BASE_YEAR_DAYS: u16 = 12 * SHORT_MONTH_DAYS as u16;

/// Year record: bits holding the leap month index
pub(crate) const LEAP_MONTH_MASK: u32 = 0xf;
/// Year record: flag for a 30-day leap month
pub(crate) const LONG_LEAP_FLAG: u32 = 0x1_0000;

/// Number of solar terms in a year
pub const TERM_COUNT: usize = 24;
/// Bits per packed solar-term day offset
pub(crate) const TERM_OFFSET_BITS: u32 = 3;

/// Heavenly stems in the sexagenary cycle
pub const STEM_COUNT: u32 = 10;
/// Earthly branches in the sexagenary cycle
pub const BRANCH_COUNT: u32 = 12;
/// Length of the full stem-branch cycle
pub const SEXAGENARY_CYCLE: u32 = 60;

/// Lunar year whose stem and branch are both the first of their cycles (甲子)
pub(crate) const SEXAGENARY_YEAR_ANCHOR: i32 = 4;
/// Cycle index of the epoch day (1900-01-31 is 甲辰)
pub(crate) const EPOCH_DAY_CYCLE_INDEX: u32 = 40;
/// Month pillar offset before the month's first solar term
pub(crate) const MONTH_PILLAR_OFFSET: u32 = 11;
/// ISO weekday of the epoch day (1900-01-31 was a Wednesday)
pub(crate) const EPOCH_WEEKDAY: u8 = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
