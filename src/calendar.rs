//! Proleptic Gregorian calendar arithmetic.
//!
//! Everything here is plain integer math: no clock, no timezone, no locale.
//! Years are signed so the leap rule and the weekday computation extend
//! uniformly to year 0 and before.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, UNIX_EPOCH_OFFSET, UNIX_EPOCH_WEEKDAY,
};
use crate::weekday::Weekday;

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// `month` must be in `1..=12`; callers validate it first.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date (negative before it).
///
/// Counts from a year that starts in March so the leap day is the last day
/// of the counting year, then shifts the result onto the Unix epoch.
pub fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(i64::from(GREGORIAN_CYCLE));
    let year_of_era = y - era * i64::from(GREGORIAN_CYCLE);
    let march_month = (month + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_OFFSET
}

/// Day of the week of a proleptic Gregorian date.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    let days = days_from_civil(year, month, day);
    // rem_euclid keeps this in 0..7 even for dates before the epoch
    let index = (days + UNIX_EPOCH_WEEKDAY).rem_euclid(i64::from(DAYS_PER_WEEK)) as usize;
    Weekday::ALL[index]
}
