//! Decoding of the packed lunar year records.

use std::sync::LazyLock;

use crate::CalendarError;
use crate::consts::{
    BASE_YEAR_DAYS, FIRST_YEAR, LAST_YEAR, LEAP_MONTH_MASK, LONG_LEAP_FLAG, LONG_MONTH_DAYS, MAX_MONTH,
    SHORT_MONTH_DAYS, YEAR_COUNT,
};
use crate::tables::YEAR_RECORDS;

/// One lunar year: which month (if any) is doubled and how long each month is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRecord {
    year: u16,
    bits: u32,
}

impl YearRecord {
    /// Decodes the record of a lunar year.
    ///
    /// # Errors
    /// Returns `CalendarError::InputRange` if the year is outside 1900..=3000.
    pub fn for_year(year: u16) -> Result<Self, CalendarError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(CalendarError::input_range(year, 1, 1));
        }
        Ok(Self::decode(year))
    }

    /// Caller guarantees the year is in range.
    fn decode(year: u16) -> Self {
        Self {
            year,
            bits: YEAR_RECORDS[(year - FIRST_YEAR) as usize],
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Regular month that is followed by a leap month, or `None`.
    pub const fn leap_month(&self) -> Option<u8> {
        match (self.bits & LEAP_MONTH_MASK) as u8 {
            0 => None,
            m => Some(m),
        }
    }

    /// Length of the leap month, 0 when the year has none.
    pub const fn leap_month_length(&self) -> u8 {
        if self.leap_month().is_none() {
            0
        } else if self.bits & LONG_LEAP_FLAG != 0 {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Length of regular month `month`, `None` outside 1..=12.
    pub const fn month_length(&self, month: u8) -> Option<u8> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        Some(self.regular_length(month))
    }

    /// Length of regular month `month`; caller checks 1..=12.
    pub(crate) const fn regular_length(&self, month: u8) -> u8 {
        if self.bits & (LONG_LEAP_FLAG >> month) != 0 {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Length of a month, regular or leap.
    ///
    /// Returns `None` when `month` is outside 1..=12, or when `is_leap` is set
    /// but `month` is not this year's leap month.
    pub const fn length_of(&self, month: u8, is_leap: bool) -> Option<u8> {
        match (is_leap, self.leap_month()) {
            (false, _) => self.month_length(month),
            (true, Some(leap)) if leap == month => Some(self.leap_month_length()),
            (true, _) => None,
        }
    }

    /// Number of long regular months.
    pub const fn long_months(&self) -> u8 {
        // bits 4..16 carry one flag per regular month
        ((self.bits >> 4) & 0xfff).count_ones() as u8
    }

    /// Total days of the lunar year, leap month included.
    pub const fn days_in_year(&self) -> u16 {
        BASE_YEAR_DAYS + self.long_months() as u16 + self.leap_month_length() as u16
    }

    /// Months of the year in order, the leap month right after its regular month.
    ///
    /// Yields `(month, is_leap, length)`.
    pub fn months(&self) -> impl Iterator<Item = (u8, bool, u8)> + '_ {
        (1..=MAX_MONTH).flat_map(move |m| {
            let regular = std::iter::once((m, false, self.regular_length(m)));
            let leap = (self.leap_month() == Some(m)).then(|| (m, true, self.leap_month_length()));
            regular.chain(leap)
        })
    }
}

/// Decoded records with the epoch day on which each lunar year starts.
///
/// Built once on first use and shared by every conversion afterwards.
pub(crate) struct YearIndex {
    records: Vec<YearRecord>,
    starts:  Vec<u32>,
}

static INDEX: LazyLock<YearIndex> = LazyLock::new(YearIndex::build);

impl YearIndex {
    fn build() -> Self {
        let records: Vec<YearRecord> = (FIRST_YEAR..=LAST_YEAR).map(YearRecord::decode).collect();
        let starts = records
            .iter()
            .scan(0u32, |acc, record| {
                let start = *acc;
                *acc += u32::from(record.days_in_year());
                Some(start)
            })
            .collect();
        tracing::debug!(years = YEAR_COUNT, "built lunar year index");
        Self { records, starts }
    }

    pub(crate) fn get() -> &'static Self {
        &INDEX
    }

    /// Record of a lunar year; caller checks the range.
    pub(crate) fn record(&self, year: u16) -> YearRecord {
        self.records[usize::from(year - FIRST_YEAR)]
    }

    /// Epoch day on which lunar new year of `year` falls; caller checks the range.
    pub(crate) fn year_start(&self, year: u16) -> u32 {
        self.starts[usize::from(year - FIRST_YEAR)]
    }

    /// Lunar year containing `epoch_day`, with the day offset inside that year.
    ///
    /// Days past the end of the last lunar year are clamped into it; callers
    /// only pass days inside the supported solar range, which ends within
    /// lunar year 3000.
    pub(crate) fn locate(&self, epoch_day: u32) -> (YearRecord, u32) {
        let idx = self.starts.partition_point(|&start| start <= epoch_day).saturating_sub(1);
        tracing::trace!(epoch_day, year = self.records[idx].year(), "located lunar year");
        (self.records[idx], epoch_day - self.starts[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u16) -> YearRecord {
        YearRecord::for_year(year).unwrap()
    }

    #[test]
    fn test_for_year_bounds() {
        assert!(YearRecord::for_year(1900).is_ok());
        assert!(YearRecord::for_year(3000).is_ok());
        assert!(matches!(
            YearRecord::for_year(1899),
            Err(CalendarError::InputRange { year: 1899, .. })
        ));
        assert!(YearRecord::for_year(3001).is_err());
    }

    #[test]
    fn test_decode_1987() {
        // 0x0af46: leap 6th month, short
        let r = record(1987);
        assert_eq!(r.leap_month(), Some(6));
        assert_eq!(r.leap_month_length(), 29);
        assert_eq!(r.month_length(1), Some(30));
        assert_eq!(r.month_length(2), Some(29));
        assert_eq!(r.month_length(9), Some(29));
        assert_eq!(r.month_length(12), Some(29));
    }

    #[test]
    fn test_decode_1900() {
        let r = record(1900);
        assert_eq!(r.leap_month(), Some(8));
        assert_eq!(r.leap_month_length(), 29);
        assert_eq!(r.days_in_year(), 384);
        assert_eq!(r.month_length(12), Some(30));
    }

    #[test]
    fn test_year_without_leap_month() {
        let r = record(2024);
        assert_eq!(r.leap_month(), None);
        assert_eq!(r.leap_month_length(), 0);
        assert_eq!(r.days_in_year(), 354);
        assert_eq!(r.length_of(6, true), None);
    }

    #[test]
    fn test_long_leap_month() {
        // 0x150d6 for 3000: leap 6th month, long
        let r = record(3000);
        assert_eq!(r.leap_month(), Some(6));
        assert_eq!(r.leap_month_length(), 30);
        assert_eq!(r.days_in_year(), 383);
    }

    #[test]
    fn test_length_of() {
        let r = record(1987);
        assert_eq!(r.length_of(6, true), Some(29));
        assert_eq!(r.length_of(6, false), Some(30));
        assert_eq!(r.length_of(5, true), None);
        assert_eq!(r.length_of(0, false), None);
        assert_eq!(r.length_of(13, false), None);
    }

    #[test]
    fn test_month_length_rejects_invalid_months() {
        // 3000 has a long leap month, so bit 16 is set
        let r = record(3000);
        for month in [0, 13, 32, u8::MAX] {
            assert_eq!(r.month_length(month), None, "month {month}");
        }
    }

    #[test]
    fn test_year_invariants_hold_for_every_year() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let r = record(year);
            let leap = r.leap_month().unwrap_or(0);
            assert!(leap <= 12, "{year}: leap month {leap}");

            let months: Vec<_> = r.months().collect();
            let expected_count = if r.leap_month().is_some() { 13 } else { 12 };
            assert_eq!(months.len(), expected_count, "{year}: month count");

            let mut total = 0u16;
            for (m, _, len) in &months {
                assert!(*len == 29 || *len == 30, "{year}-{m}: length {len}");
                total += u16::from(*len);
            }
            assert_eq!(total, r.days_in_year(), "{year}: month lengths do not sum to year");
            assert_eq!(
                r.days_in_year(),
                348 + u16::from(r.long_months()) + u16::from(r.leap_month_length()),
                "{year}: year length formula"
            );
        }
    }

    #[test]
    fn test_months_order() {
        let months: Vec<_> = record(1987).months().map(|(m, leap, _)| (m, leap)).collect();
        assert_eq!(months[5], (6, false));
        assert_eq!(months[6], (6, true));
        assert_eq!(months[7], (7, false));
        assert_eq!(months.last(), Some(&(12, false)));
    }

    #[test]
    fn test_index_year_starts() {
        let index = YearIndex::get();
        assert_eq!(index.year_start(1900), 0);
        assert_eq!(index.year_start(1901), 384);

        let (r, offset) = index.locate(0);
        assert_eq!((r.year(), offset), (1900, 0));
        let (r, offset) = index.locate(383);
        assert_eq!((r.year(), offset), (1900, 383));
        let (r, offset) = index.locate(384);
        assert_eq!((r.year(), offset), (1901, 0));
    }
}
