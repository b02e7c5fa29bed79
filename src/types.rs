use crate::calendar::days_in_month;
use crate::prelude::*;

/// A month of the Gregorian year.
/// Discriminants are the 1-based month numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Returns the month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month for a number in 1..=12
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=12 => Some(MONTHS[number as usize - 1]),
            _ => None,
        }
    }

    /// Number of days this month has in `year`
    pub const fn days(self, year: i64) -> u8 {
        days_in_month(year, self)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        Self::from(month.number())
    }
}

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// ISO-8601 day number: Monday is 1, Sunday is 7
    #[inline]
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// Weekday of a day ordinal. Ordinal 0 (0001-01-01) was a Monday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn from_ordinal(ordinal: i64) -> Self {
        WEEKDAYS[ordinal.rem_euclid(7) as usize]
    }
}
