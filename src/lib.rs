#[macro_use]
mod logging;

mod binary;
mod calendar;
mod consts;
mod iso;
mod prelude;
mod serde_impl;
mod types;

pub use binary::DecodeError;
pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use consts::*;
pub use iso::ParseError;
pub use types::{Month, Weekday};

use crate::prelude::*;
use std::ops::{Add, Sub};

/// A day in the proleptic Gregorian calendar.
///
/// Stored as a signed day count where 0 is `0001-01-01`. Year 0 and negative
/// years are ordinary years, and years past 9999 are supported up to the
/// limits of the `i64` ordinal. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Date(i64);

impl Date {
    /// The earliest representable date, `-25252734927766554-06-07`
    pub const MIN: Self = Self(i64::MIN);

    /// The latest representable date, `+25252734927766555-07-28`
    pub const MAX: Self = Self(i64::MAX);

    /// Creates a date from a calendar triple.
    ///
    /// This never fails. Components outside their calendar range roll over
    /// instead of being rejected: month 13 is January of the next year,
    /// month 0 is December of the previous year, and day 0 is the last day
    /// of the previous month. Validate the components first if strict input
    /// checking is needed.
    ///
    /// Dates beyond the ordinal range saturate to [`Date::MIN`] or
    /// [`Date::MAX`].
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        let (ordinal, clamped) = calendar::clamped_to_ordinal(year, month, day);
        if clamped {
            trace!(year, month, day, "date construction saturated at the ordinal limit");
        }
        Self(ordinal)
    }

    /// Creates a date from its day ordinal (0 is `0001-01-01`).
    #[inline]
    pub const fn from_ordinal(ordinal: i64) -> Self {
        Self(ordinal)
    }

    /// Returns the day ordinal (0 is `0001-01-01`).
    #[inline]
    pub const fn ordinal(self) -> i64 {
        self.0
    }

    /// Returns `(year, month, day)`
    pub fn ymd(self) -> (i64, Month, u8) {
        let (year, month, day) = calendar::from_ordinal(self.0);
        (year, month_of(month), day)
    }

    /// Returns the year
    pub fn year(self) -> i64 {
        self.ymd().0
    }

    /// Returns the month
    pub fn month(self) -> Month {
        self.ymd().1
    }

    /// Returns the day of the month (1..=31)
    pub fn day(self) -> u8 {
        self.ymd().2
    }

    /// Returns the day of the year, 1 for January 1st.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year_day(self) -> u16 {
        let jan1 = calendar::to_ordinal(self.year(), 1, 1);
        // At most 366, so the narrowing is lossless.
        (i128::from(self.0) - jan1 + 1) as u16
    }

    /// Returns the day of the week
    pub const fn weekday(self) -> Weekday {
        Weekday::from_ordinal(self.0)
    }

    /// Returns the ISO-8601 week-numbering year and week (1..=53).
    ///
    /// Weeks start on Monday, and week 1 is the week containing the year's
    /// first Thursday, so early January can belong to the previous year's
    /// last week and late December to the next year's first week.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn iso_week(self) -> (i64, u8) {
        let thursday_offset = 4 - i64::from(self.weekday().number_from_monday());
        // Saturates within three days of the ordinal limits.
        let thursday = self.saturating_add_days(thursday_offset);
        let week = (thursday.year_day() - 1) / 7 + 1;
        (thursday.year(), week as u8)
    }

    /// Adds `days`, returning `None` on overflow.
    pub const fn checked_add_days(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(ordinal) => Some(Self(ordinal)),
            None => None,
        }
    }

    /// Adds `days`, saturating at [`Date::MIN`] and [`Date::MAX`].
    pub const fn saturating_add_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// Adds years, months and days to the calendar triple and re-normalizes
    /// it the way [`Date::new`] does.
    ///
    /// Adding one month to January 31st gives March 2nd or 3rd, because
    /// February 31st rolls over.
    pub fn add_date(self, years: i64, months: i64, days: i64) -> Self {
        let (year, month, day) = self.ymd();
        Self::new(
            year.saturating_add(years),
            i64::from(month).saturating_add(months),
            i64::from(day).saturating_add(days),
        )
    }

    /// Returns the number of days from `other` to `self`, saturating at the
    /// `i64` limits.
    pub const fn days_since(self, other: Self) -> i64 {
        self.0.saturating_sub(other.0)
    }
}

fn month_of(number: u8) -> Month {
    // `calendar::from_ordinal` always yields 1..=12.
    Month::from_number(number).unwrap_or(Month::January)
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        self.saturating_add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self(self.0.saturating_sub(days))
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.days_since(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_year_one() {
        let date = Date::new(1, 1, 1);
        assert_eq!(date.ordinal(), 0);
        assert_eq!(date, Date::from_ordinal(0));
        assert_eq!(date.to_string(), "0001-01-01");
    }

    #[test]
    fn test_ymd_accessors() {
        let date = Date::new(2012, 6, 25);
        assert_eq!(date.ymd(), (2012, Month::June, 25));
        assert_eq!(date.year(), 2012);
        assert_eq!(date.month(), Month::June);
        assert_eq!(date.day(), 25);

        let date = Date::new(-11111, 2, 3);
        assert_eq!(date.ymd(), (-11111, Month::February, 3));
    }

    #[test]
    fn test_month_enum_as_argument() {
        assert_eq!(Date::new(2012, Month::June.into(), 25), Date::new(2012, 6, 25));
    }

    #[test]
    fn test_ordinal_conversions() {
        let date: Date = 719_162.into();
        assert_eq!(date, Date::new(1970, 1, 1));
        assert_eq!(i64::from(date), 719_162);
    }

    #[test]
    fn test_construction_rollover() {
        struct TestCase {
            given:       (i64, i64, i64),
            expected:    (i64, Month, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                given:       (2012, 13, 1),
                expected:    (2013, Month::January, 1),
                description: "month 13 is January of the next year",
            },
            TestCase {
                given:       (2012, 0, 15),
                expected:    (2011, Month::December, 15),
                description: "month 0 is December of the previous year",
            },
            TestCase {
                given:       (2012, -1, 15),
                expected:    (2011, Month::November, 15),
                description: "negative months count back",
            },
            TestCase {
                given:       (2012, 3, 0),
                expected:    (2012, Month::February, 29),
                description: "day 0 is the last day of the previous month",
            },
            TestCase {
                given:       (2011, 3, 0),
                expected:    (2011, Month::February, 28),
                description: "day 0 respects non-leap February",
            },
            TestCase {
                given:       (2012, 1, 32),
                expected:    (2012, Month::February, 1),
                description: "day 32 rolls into the next month",
            },
            TestCase {
                given:       (0, 1, 0),
                expected:    (-1, Month::December, 31),
                description: "rollover crosses into negative years",
            },
            TestCase {
                given:       (2011, 2, 29),
                expected:    (2011, Month::March, 1),
                description: "February 29th of a common year",
            },
        ];

        for case in &cases {
            let (year, month, day) = case.given;
            assert_eq!(Date::new(year, month, day).ymd(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_construction_saturates() {
        assert_eq!(Date::new(i64::MAX, 1, 1), Date::MAX);
        assert_eq!(Date::new(i64::MIN, 1, 1), Date::MIN);
        assert_eq!(Date::new(2012, i64::MAX, i64::MAX), Date::MAX);
        assert_eq!(Date::new(2012, i64::MIN, 1), Date::MIN);
        assert_eq!(Date::MAX.ymd(), (25_252_734_927_766_555, Month::July, 28));
        assert_eq!(Date::MIN.ymd(), (-25_252_734_927_766_554, Month::June, 7));
    }

    #[test]
    fn test_construction_at_exact_limits() {
        assert_eq!(Date::new(25_252_734_927_766_555, 7, 28), Date::MAX);
        assert_eq!(Date::new(-25_252_734_927_766_554, 6, 7), Date::MIN);
        assert_eq!(Date::new(25_252_734_927_766_555, 7, 27), Date::from_ordinal(i64::MAX - 1));
        assert_eq!(Date::new(25_252_734_927_766_555, 7, 29), Date::MAX);
        assert_eq!(Date::new(-25_252_734_927_766_554, 6, 6), Date::MIN);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dates = [
            Date::new(-11111, 2, 3),
            Date::new(-1, 12, 31),
            Date::new(0, 1, 1),
            Date::new(0, 2, 29),
            Date::new(1, 1, 1),
            Date::new(1970, 1, 1),
            Date::new(2012, 6, 25),
            Date::new(2012, 6, 26),
            Date::new(12345, 6, 7),
        ];
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
            assert!(pair[0].ymd() < pair[1].ymd());
        }
        assert!(Date::MIN < dates[0]);
        assert!(Date::MAX > dates[dates.len() - 1]);
    }

    #[test]
    fn test_equality_follows_ordinal() {
        assert_eq!(Date::new(2012, 13, 1), Date::new(2013, 1, 1));
        assert_ne!(Date::new(2012, 12, 31), Date::new(2013, 1, 1));
    }

    #[test]
    fn test_year_day() {
        assert_eq!(Date::new(2012, 1, 1).year_day(), 1);
        assert_eq!(Date::new(2012, 6, 25).year_day(), 177);
        assert_eq!(Date::new(2012, 12, 31).year_day(), 366);
        assert_eq!(Date::new(2011, 12, 31).year_day(), 365);
        assert_eq!(Date::new(0, 12, 31).year_day(), 366);
        assert_eq!(Date::new(-1, 12, 31).year_day(), 365);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::new(1, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(Date::new(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(Date::new(2012, 6, 25).weekday(), Weekday::Monday);
        assert_eq!(Date::new(2021, 1, 3).weekday(), Weekday::Sunday);
        assert_eq!(Date::new(0, 12, 31).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(Date::new(2012, 6, 25).iso_week(), (2012, 26));
        assert_eq!(Date::new(2021, 1, 3).iso_week(), (2020, 53));
        assert_eq!(Date::new(2020, 12, 31).iso_week(), (2020, 53));
        assert_eq!(Date::new(2008, 12, 29).iso_week(), (2009, 1));
        assert_eq!(Date::new(2010, 1, 3).iso_week(), (2009, 53));
    }

    #[test]
    fn test_day_arithmetic() {
        let date = Date::new(2012, 2, 28);
        assert_eq!(date + 1, Date::new(2012, 2, 29));
        assert_eq!(date + 2, Date::new(2012, 3, 1));
        assert_eq!(date - 59, Date::new(2011, 12, 31));
        assert_eq!(Date::new(2013, 1, 1) - Date::new(2012, 1, 1), 366);
        assert_eq!(Date::new(2012, 1, 1).days_since(Date::new(2013, 1, 1)), -366);
    }

    #[test]
    fn test_day_arithmetic_at_limits() {
        assert_eq!(Date::MAX.checked_add_days(1), None);
        assert_eq!(Date::MIN.checked_add_days(-1), None);
        assert_eq!(Date::MAX.checked_add_days(-1), Some(Date::from_ordinal(i64::MAX - 1)));
        assert_eq!(Date::MAX + 1, Date::MAX);
        assert_eq!(Date::MIN - 1, Date::MIN);
        assert_eq!(Date::MAX - Date::MIN, i64::MAX);
        assert_eq!(Date::MIN - Date::MAX, i64::MIN);
    }

    #[test]
    fn test_add_date() {
        let date = Date::new(2012, 1, 31);
        assert_eq!(date.add_date(0, 1, 0), Date::new(2012, 3, 2));
        assert_eq!(date.add_date(1, 1, 0), Date::new(2013, 3, 3));
        assert_eq!(date.add_date(-2013, 0, 0), Date::new(-1, 1, 31));
        assert_eq!(date.add_date(0, 0, 1), Date::new(2012, 2, 1));
        assert_eq!(date.add_date(0, -12, 0), Date::new(2011, 1, 31));
    }

    #[test]
    fn test_constants() {
        assert_eq!(BINARY_VERSION, 1);
        assert_eq!(BINARY_LEN, 9);
        assert_eq!(MAX_UNSIGNED_YEAR, 9999);
    }
}
