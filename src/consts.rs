/// Number of months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

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
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_CYCLE: i128 = 146_097;

/// Days from 0000-03-01 to 0001-01-01.
/// Calendar math counts from March so the leap day falls at the end of the year.
pub(crate) const MARCH_BASED_OFFSET: i128 = 306;

/// Largest year written without a sign in ISO-8601 text
pub const MAX_UNSIGNED_YEAR: i64 = 9999;

/// Minimum number of digits in the ISO-8601 year field
pub const ISO_YEAR_DIGITS: usize = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: u8 = b'-';
/// Sign prefix for years above `MAX_UNSIGNED_YEAR`
pub const POSITIVE_SIGN: u8 = b'+';
/// Sign prefix for years before year 0
pub const NEGATIVE_SIGN: u8 = b'-';

/// Version tag of the current binary layout
pub const BINARY_VERSION: u8 = 1;

/// Total length of a version 1 binary record (tag + big-endian `i64`)
pub const BINARY_LEN: usize = 9;
