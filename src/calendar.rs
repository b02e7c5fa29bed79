//! Conversion between calendar triples and day ordinals.
//!
//! Ordinal 0 is `0001-01-01`. The conversion works on a March-based year
//! grouped into 400-year cycles, which keeps every quantity non-negative
//! inside a cycle and makes both directions exact for any `i64` ordinal.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_CYCLE, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MARCH_BASED_OFFSET, MONTHS_PER_YEAR,
};
use crate::types::Month;

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Year 0 and negative years follow the same rule, so `0`, `-4` and `-400`
/// are leap years while `-100` is not.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: i64, month: Month) -> u8 {
    if matches!(month, Month::February) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.number() as usize]
    }
}

/// Number of days in `year`.
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Maps a calendar triple onto its ordinal.
///
/// Months outside 1..=12 roll over into neighbouring years and days outside
/// the month roll over into neighbouring months, so `(2012, 13, 1)` and
/// `(2013, 1, 1)` land on the same ordinal, as do `(2012, 3, 0)` and
/// `(2012, 2, 29)`. The result is computed in `i128` and is not clamped;
/// callers decide what to do when it leaves the `i64` range.
pub(crate) fn to_ordinal(year: i64, month: i64, day: i64) -> i128 {
    let months = i128::from(year) * i128::from(MONTHS_PER_YEAR) + i128::from(month) - 1;
    let month = months.rem_euclid(12) + 1;
    // March-based year: January and February belong to the previous year.
    let year = months.div_euclid(12) - i128::from(month <= 2);

    let cycle = year.div_euclid(400);
    let year_of_cycle = year - cycle * 400;
    let march_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * march_month + 2) / 5;
    let day_of_cycle =
        year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;

    cycle * DAYS_PER_CYCLE + day_of_cycle - MARCH_BASED_OFFSET + i128::from(day) - 1
}

/// Like [`to_ordinal`], but `None` when the date does not fit an `i64` ordinal.
pub(crate) fn checked_to_ordinal(year: i64, month: i64, day: i64) -> Option<i64> {
    i64::try_from(to_ordinal(year, month, day)).ok()
}

/// Like [`to_ordinal`], but clamps to the `i64` range.
/// The flag is true when the date had to be clamped.
pub(crate) fn clamped_to_ordinal(year: i64, month: i64, day: i64) -> (i64, bool) {
    let ordinal = to_ordinal(year, month, day);
    match i64::try_from(ordinal) {
        Ok(ordinal) => (ordinal, false),
        Err(_) if ordinal < 0 => (i64::MIN, true),
        Err(_) => (i64::MAX, true),
    }
}

/// Splits an ordinal into `(year, month, day)`.
///
/// Total over `i64`: the extreme ordinals map to years of about ±2.5e16,
/// well inside `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn from_ordinal(ordinal: i64) -> (i64, u8, u8) {
    let days = i128::from(ordinal) + MARCH_BASED_OFFSET;
    let cycle = days.div_euclid(DAYS_PER_CYCLE);
    let day_of_cycle = days - cycle * DAYS_PER_CYCLE;

    let year_of_cycle = (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36524
        - day_of_cycle / 146_096)
        / 365;
    let day_of_year =
        day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = cycle * 400 + year_of_cycle + i128::from(month <= 2);

    (year as i64, month as u8, day as u8)
}
