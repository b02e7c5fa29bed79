//! ISO-8601 extended text form: `[sign]YYYY[...]-MM-DD`.
//!
//! Month and day are always two digits, so the parser anchors on the last
//! six bytes (`-MM-DD`) and treats everything before them as the year. The
//! year has at least four digits. Years above 9999 carry a `+` and years
//! below 0 a `-`.

use std::fmt;
use std::str::FromStr;

use crate::Date;
use crate::calendar::checked_to_ordinal;
use crate::consts::{
    DATE_SEPARATOR, ISO_YEAR_DIGITS, MAX_UNSIGNED_YEAR, NEGATIVE_SIGN, POSITIVE_SIGN,
};

/// Length of the `-MM-DD` suffix
const MONTH_DAY_SUFFIX_LEN: usize = 6;

/// Error type for parsing ISO-8601 date text.
///
/// Both variants carry the rejected input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not have the `[+-]YYYY-MM-DD` shape.
    #[error("Date::parse_iso: cannot parse {0}: incorrect syntax")]
    Syntax(String),

    /// The year field is too short, or the year is out of range.
    #[error("Date::parse_iso: cannot parse {0}: invalid year")]
    Year(String),
}

impl Date {
    /// Formats the date with at least `min_year_digits` year digits.
    ///
    /// Widths below four are raised to four. A non-negative year gets a `+`
    /// when it exceeds 9999 or when the requested width exceeds four
    /// digits, so `format_iso(6)` of 2012-06-25 is `+002012-06-25`.
    /// `format_iso(4)` is the same as `to_string()`.
    pub fn format_iso(self, min_year_digits: usize) -> String {
        IsoDisplay { date: self, min_year_digits }.to_string()
    }

    /// Parses ISO-8601 extended date text.
    ///
    /// Out-of-range month and day fields roll over the same way
    /// [`Date::new`] does.
    ///
    /// # Errors
    /// Returns `ParseError::Syntax` if the text is not `[+-]digits-MM-DD`,
    /// and `ParseError::Year` if the year has fewer than four digits or
    /// the date is outside the representable range.
    pub fn parse_iso(input: &str) -> Result<Self, ParseError> {
        let result = parse(input);
        log!(if let Err(err) = &result {
            tracing::debug!(%input, error = %err, "rejected ISO-8601 date");
        });
        result
    }
}

struct IsoDisplay {
    date:            Date,
    min_year_digits: usize,
}

impl fmt::Display for IsoDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date.ymd();
        let width = self.min_year_digits.max(ISO_YEAR_DIGITS);
        if year < 0 {
            write!(f, "-{:0width$}", year.unsigned_abs())?;
        } else if year > MAX_UNSIGNED_YEAR || width > ISO_YEAR_DIGITS {
            write!(f, "+{year:0width$}")?;
        } else {
            write!(f, "{year:0width$}")?;
        }
        write!(f, "-{:02}-{day:02}", month.number())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&IsoDisplay { date: *self, min_year_digits: ISO_YEAR_DIGITS }, f)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

fn parse(input: &str) -> Result<Date, ParseError> {
    let syntax = || ParseError::Syntax(input.to_owned());
    let invalid_year = || ParseError::Year(input.to_owned());

    let bytes = input.as_bytes();
    let Some(split) = bytes.len().checked_sub(MONTH_DAY_SUFFIX_LEN) else {
        return Err(syntax());
    };
    let (year_field, suffix) = bytes.split_at(split);

    let &[sep1, m1, m2, sep2, d1, d2] = suffix else {
        return Err(syntax());
    };
    if sep1 != DATE_SEPARATOR || sep2 != DATE_SEPARATOR {
        return Err(syntax());
    }
    let month = two_digits(m1, m2).ok_or_else(syntax)?;
    let day = two_digits(d1, d2).ok_or_else(syntax)?;

    let (negative, digits) = match year_field.split_first() {
        Some((&NEGATIVE_SIGN, rest)) => (true, rest),
        Some((&POSITIVE_SIGN, rest)) => (false, rest),
        _ => (false, year_field),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(syntax());
    }
    if digits.len() < ISO_YEAR_DIGITS {
        return Err(invalid_year());
    }

    let magnitude = digits.iter().try_fold(0i64, |acc, &b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });
    let year = magnitude
        .map(|m| if negative { -m } else { m })
        .ok_or_else(invalid_year)?;

    checked_to_ordinal(year, i64::from(month), i64::from(day))
        .map(Date::from_ordinal)
        .ok_or_else(invalid_year)
}

fn two_digits(tens: u8, ones: u8) -> Option<u8> {
    (tens.is_ascii_digit() && ones.is_ascii_digit()).then(|| (tens - b'0') * 10 + (ones - b'0'))
}
