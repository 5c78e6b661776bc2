//! Arithmetic rules of the tabular (non-observational) Hijri calendar.

use crate::consts::{
    HIJRI_LEAP_OFFSETS, HIJRI_LONG_MONTH_DAYS, HIJRI_SHORT_MONTH_DAYS, LEAP_CYCLE_YEARS, ZULHIJJAH,
};

/// Returns `true` if `year` is a leap year in the tabular Hijri calendar,
/// i.e. its offset within the 30-year cycle is one of the 11 leap offsets.
///
/// Total over all integers; negative years wrap into the same cycle.
pub fn is_hijri_leap(year: i64) -> bool {
    HIJRI_LEAP_OFFSETS.contains(&year.rem_euclid(LEAP_CYCLE_YEARS))
}

/// Returns the number of days in a tabular Hijri month.
///
/// Odd-numbered months have 30 days and even-numbered months 29, except
/// Zulhijjah (month 12), which has 30 days in leap years. Callers are
/// expected to pass `month` in `1..=12`; out-of-range months still get a
/// defined answer from the odd/even rule.
pub fn hijri_month_length(year: i64, month: i64) -> i64 {
    if month.rem_euclid(2) == 1 || (month == ZULHIJJAH && is_hijri_leap(year)) {
        HIJRI_LONG_MONTH_DAYS
    } else {
        HIJRI_SHORT_MONTH_DAYS
    }
}
