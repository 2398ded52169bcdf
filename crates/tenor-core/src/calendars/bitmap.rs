//! Bitmap-backed holiday storage and the rule builder used by the market
//! calendars.
//!
//! Holidays for every supported year are expanded once into a bitmap, one bit
//! per day of year, so that `is_holiday` is a constant-time lookup.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// First year with holiday data.
pub const MIN_YEAR: i32 = 1970;
/// Last year with holiday data.
pub const MAX_YEAR: i32 = 2100;

const DAYS_PER_YEAR_SLOT: usize = 366;
const WORD_COUNT: usize = ((MAX_YEAR - MIN_YEAR + 1) as usize * DAYS_PER_YEAR_SLOT).div_ceil(64);

/// Holiday set stored as a bitmap over `MIN_YEAR..=MAX_YEAR`.
///
/// Dates outside the range are never holidays. Weekends (Saturday and Sunday)
/// are handled separately from the bitmap.
#[derive(Clone)]
pub struct HolidayBitmap {
    name: &'static str,
    bits: Vec<u64>,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("name", &self.name)
            .field("holiday_count", &self.count_holidays())
            .finish()
    }
}

impl HolidayBitmap {
    /// Creates an empty bitmap.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            bits: vec![0; WORD_COUNT],
        }
    }

    /// Name of the calendar the bitmap belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Marks a date as a holiday.
    pub fn insert(&mut self, date: NaiveDate) {
        if let Some((word, bit)) = slot(date) {
            self.bits[word] |= 1u64 << bit;
        }
    }

    /// Returns true if the date is a holiday. Weekends are not considered.
    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        slot(date).is_some_and(|(word, bit)| self.bits[word] & (1u64 << bit) != 0)
    }

    /// Returns true if the date is neither a weekend nor a holiday.
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// Number of holidays stored.
    pub fn count_holidays(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

fn slot(date: NaiveDate) -> Option<(usize, usize)> {
    let year = date.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    let position = (year - MIN_YEAR) as usize * DAYS_PER_YEAR_SLOT + date.ordinal0() as usize;
    Some((position / 64, position % 64))
}

/// Weekend observation rule for fixed-date holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// A holiday on a weekend is lost.
    None,
    /// Saturday moves to Friday, Sunday to Monday.
    NearestWeekday,
    /// Sunday moves to Monday, Saturday is lost.
    SundayToMonday,
}

impl Observance {
    fn apply(self, date: NaiveDate) -> NaiveDate {
        match (self, date.weekday()) {
            (Observance::NearestWeekday, Weekday::Sat) => date - Duration::days(1),
            (Observance::NearestWeekday | Observance::SundayToMonday, Weekday::Sun) => {
                date + Duration::days(1)
            }
            _ => date,
        }
    }
}

/// Builds a [`HolidayBitmap`] from holiday rules applied to every year in range.
pub struct HolidayCalendarBuilder {
    name: &'static str,
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendarBuilder {
    /// Creates a builder with no holidays.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            holidays: BTreeSet::new(),
        }
    }

    /// Adds a holiday on the same month and day every year from `from_year`.
    pub fn fixed(mut self, month: u32, day: u32, from_year: i32, observance: Observance) -> Self {
        for year in from_year.max(MIN_YEAR)..=MAX_YEAR {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.holidays.insert(observance.apply(date));
            }
        }
        self
    }

    /// Adds the `n`th occurrence of a weekday in a month, every year.
    pub fn nth_weekday(mut self, month: u32, weekday: Weekday, n: u32) -> Self {
        for year in MIN_YEAR..=MAX_YEAR {
            if let Some(date) = NaiveDate::from_weekday_of_month_opt(year, month, weekday, n as u8) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Adds the last occurrence of a weekday in a month, every year.
    pub fn last_weekday(mut self, month: u32, weekday: Weekday) -> Self {
        for year in MIN_YEAR..=MAX_YEAR {
            if let Some(date) = last_weekday_of_month(year, month, weekday) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Adds a holiday at a fixed offset from Easter Sunday, every year.
    pub fn easter_offset(mut self, offset_days: i64) -> Self {
        for year in MIN_YEAR..=MAX_YEAR {
            if let Some(easter) = easter_sunday(year) {
                self.holidays.insert(easter + Duration::days(offset_days));
            }
        }
        self
    }

    /// Expands the rules into a bitmap.
    pub fn build(self) -> HolidayBitmap {
        log::debug!(
            "building {} holiday bitmap with {} dates",
            self.name,
            self.holidays.len()
        );
        let mut bitmap = HolidayBitmap::new(self.name);
        for date in self.holidays {
            bitmap.insert(date);
        }
        bitmap
    }
}

/// Last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let back = (last_day.weekday().num_days_from_monday() as i64
        - weekday.num_days_from_monday() as i64)
        .rem_euclid(7);
    Some(last_day - Duration::days(back))
}

/// Easter Sunday in the Gregorian calendar (anonymous algorithm).
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}
