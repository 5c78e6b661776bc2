//! Conversions between calendar dates and Julian day numbers.
//!
//! The Julian day number is the shared currency between the two calendars:
//! Gregorian and tabular Hijri dates are never converted into each other
//! directly, only via a `JulianDay`. All values produced here sit on
//! half-day (midnight) boundaries, since the day count increments at noon.

use crate::consts::{
    GREGORIAN_REFORM_JD, HIJRI_COMMON_YEAR_DAYS, HIJRI_EPOCH_JD, HIJRI_LONG_MONTH_DAYS,
    LEAP_CYCLE_YEARS, MAX_MONTH, MEAN_HIJRI_MONTH_DAYS,
};
use crate::prelude::*;
use crate::rules::hijri_month_length;

/// A Julian day number.
///
/// Integer part counts days since the epoch, fractional part is the
/// sub-day offset (noon-referenced, so calendar midnights end in `.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
#[display(fmt = "JD {_0}")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw day count.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count.
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Converts a proleptic Gregorian date to its Julian day number.
///
/// January and February are treated as months 13 and 14 of the previous
/// year, as the century-correction term assumes March as the first month.
/// `day` is not checked against the month's length: out-of-range fields
/// yield a numerically defined (if calendrically meaningless) result.
pub fn gregorian_to_jd(year: i64, month: i64, day: i64) -> JulianDay {
    let (mut y, mut m) = (year, month);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    let jd = (365.25 * (y + 4716) as f64).trunc()
        + (30.6001 * (m + 1) as f64).trunc()
        + (day + b) as f64
        - 1524.5;
    JulianDay::new(jd)
}

/// Converts a Julian day number to a proleptic Gregorian `(year, month, day)`.
///
/// Day counts before the Gregorian reform (JD 2299161) take the
/// Julian-calendar branch. Any fractional day component is truncated.
pub fn jd_to_gregorian(jd: JulianDay) -> (i64, i64, i64) {
    let jd = jd.value() + 0.5;
    let z = jd.trunc();
    let f = jd - z;

    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
        z + 1.0 + alpha - (alpha / 4.0).trunc()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i64, month as i64, day as i64)
}

/// Converts a tabular Hijri date to its Julian day number.
///
/// Elapsed months contribute an averaged 29.5 days each; the exact
/// alternating 30/29 table is deliberately not consulted here, matching
/// the reference behavior. See [`jd_to_hijri`] for the consequence.
pub fn hijri_to_jd(year: i64, month: i64, day: i64) -> JulianDay {
    let mut days = ((year - 1) * HIJRI_COMMON_YEAR_DAYS) as f64;
    // Leap days accumulated over the elapsed 30-year cycles.
    days += (3 + 11 * year).div_euclid(LEAP_CYCLE_YEARS) as f64;
    days += (month - 1) as f64 * MEAN_HIJRI_MONTH_DAYS;
    let days = days.floor() + day as f64;
    JulianDay::new(days + HIJRI_EPOCH_JD)
}

/// Converts a Julian day number to a tabular Hijri `(year, month, day)`.
///
/// The year comes from a closed-form estimate, the month from a linear
/// search over that year's 12 month-start day numbers, and the day is
/// clamped to the exact table length of the found month. Because
/// [`hijri_to_jd`] uses averaged month lengths while the clamp uses the
/// exact table, a day that lands past a short month's end truncates to
/// the month's last day rather than carrying into the next month.
pub fn jd_to_hijri(jd: JulianDay) -> (i64, i64, i64) {
    // Re-anchor to the preceding midnight boundary.
    let jd = jd.value().floor() + 0.5;
    let year = ((30.0 * (jd - HIJRI_EPOCH_JD) + 10_646.0) / 10_631.0).floor() as i64;

    // The estimate is trusted: the search never retries with year +/- 1.
    let mut month = 1;
    let mut month_start = hijri_to_jd(year, month, 1).value();
    loop {
        let next_month_start = if month < MAX_MONTH {
            hijri_to_jd(year, month + 1, 1).value()
        } else {
            month_start + HIJRI_LONG_MONTH_DAYS as f64
        };
        if jd < next_month_start || month >= MAX_MONTH {
            break;
        }
        month += 1;
        month_start = hijri_to_jd(year, month, 1).value();
    }

    let mut day = (jd - month_start + 1.0) as i64;

    // Excess days truncate to the last day of the month, never carry over.
    let max_day = hijri_month_length(year, month);
    if day > max_day {
        day = max_day;
    }

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_to_jd_anchors() {
        struct TestCase {
            year: i64,
            month: i64,
            day: i64,
            jd: f64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2000,
                month: 1,
                day: 1,
                jd: 2_451_544.5,
                description: "J2000 calendar midnight",
            },
            TestCase {
                year: 1970,
                month: 1,
                day: 1,
                jd: 2_440_587.5,
                description: "Unix epoch",
            },
            TestCase {
                year: 2024,
                month: 3,
                day: 1,
                jd: 2_460_370.5,
                description: "post-leap-day 2024",
            },
            TestCase {
                year: 1582,
                month: 10,
                day: 15,
                jd: 2_299_160.5,
                description: "first Gregorian day",
            },
        ];

        for case in &cases {
            assert_eq!(
                gregorian_to_jd(case.year, case.month, case.day).value(),
                case.jd,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_jd_to_gregorian_anchors() {
        assert_eq!(jd_to_gregorian(JulianDay::new(2_451_544.5)), (2000, 1, 1));
        assert_eq!(jd_to_gregorian(JulianDay::new(2_440_587.5)), (1970, 1, 1));
        assert_eq!(jd_to_gregorian(JulianDay::new(2_460_370.5)), (2024, 3, 1));
    }

    #[test]
    fn test_jd_to_gregorian_reform_branches() {
        // Last day before the threshold uses the Julian branch.
        assert_eq!(jd_to_gregorian(JulianDay::new(2_299_159.5)), (1582, 10, 4));
        // First day at the threshold uses the Gregorian branch.
        assert_eq!(jd_to_gregorian(JulianDay::new(2_299_160.5)), (1582, 10, 15));
    }

    #[test]
    fn test_gregorian_round_trip() {
        // Round trips hold from the reform onward; older day counts come
        // back through the Julian branch as their Julian-calendar form.
        let dates = [
            (1582, 10, 15),
            (1900, 2, 28),
            (2000, 2, 29),
            (2024, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            assert_eq!(
                jd_to_gregorian(gregorian_to_jd(y, m, d)),
                (y, m, d),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn test_gregorian_jd_monotonicity() {
        let ordered = [
            (1999, 12, 31),
            (2000, 1, 1),
            (2000, 1, 2),
            (2000, 2, 29),
            (2000, 3, 1),
            (2024, 3, 1),
        ];
        for pair in ordered.windows(2) {
            let (ay, am, ad) = pair[0];
            let (by, bm, bd) = pair[1];
            assert!(
                gregorian_to_jd(ay, am, ad) < gregorian_to_jd(by, bm, bd),
                "{ay}-{am}-{ad} should map below {by}-{bm}-{bd}"
            );
        }
    }

    #[test]
    fn test_hijri_epoch() {
        assert_eq!(hijri_to_jd(1, 1, 1).value(), 1_948_440.5);
        assert_eq!(jd_to_hijri(JulianDay::new(1_948_440.5)), (1, 1, 1));
    }

    #[test]
    fn test_hijri_to_jd_uses_averaged_months() {
        // Month starts advance by floor(29.5 * elapsed), so months 1 and 2
        // both appear 29 days apart even though month 1 has 30 exact days.
        let m1 = hijri_to_jd(1445, 1, 1).value();
        let m2 = hijri_to_jd(1445, 2, 1).value();
        let m3 = hijri_to_jd(1445, 3, 1).value();
        assert_eq!(m2 - m1, 29.0);
        assert_eq!(m3 - m2, 30.0);
    }

    #[test]
    fn test_hijri_round_trip() {
        // Days 1..=28 always round-trip exactly; only the averaged-month
        // clamp near the 29th/30th can shift.
        let dates = [(1, 1, 1), (1445, 9, 1), (1445, 8, 20), (1446, 2, 28), (1442, 11, 4)];
        for (y, m, d) in dates {
            assert_eq!(jd_to_hijri(hijri_to_jd(y, m, d)), (y, m, d), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_hijri_day_clamped_to_month_length() {
        // Month 2 of 1446 has 29 exact days, but the averaged month starts
        // put month 3 thirty days after month 2; the 30th apparent day
        // clamps to day 29 instead of carrying into month 3.
        let month2_start = hijri_to_jd(1446, 2, 1).value();
        let jd = JulianDay::new(month2_start + 29.0);
        assert_eq!(jd_to_hijri(jd), (1446, 2, 29));
    }

    #[test]
    fn test_jd_to_hijri_known_dates() {
        // 1 March 2024 = 20 Syaban 1445 in the tabular calendar.
        assert_eq!(jd_to_hijri(JulianDay::new(2_460_370.5)), (1445, 8, 20));
        // 1 Ramadhan 1445 starts at JD 2460381.5.
        assert_eq!(hijri_to_jd(1445, 9, 1).value(), 2_460_381.5);
    }

    #[test]
    fn test_fractional_input_floors_to_same_day() {
        // Anything within the same civil day resolves identically.
        let midnight = JulianDay::new(2_460_370.5);
        let midday = JulianDay::new(2_460_370.9);
        assert_eq!(jd_to_hijri(midnight), jd_to_hijri(midday));
    }

    #[test]
    fn test_astronomical_year_numbering() {
        // Year 0 (1 BC) is accepted and the forward formula stays defined.
        assert_eq!(gregorian_to_jd(0, 3, 1).value(), 1_721_119.5);
        // Reading it back takes the Julian branch, so the proleptic
        // Gregorian input returns as its Julian-calendar equivalent.
        assert_eq!(jd_to_gregorian(JulianDay::new(1_721_119.5)), (0, 3, 3));
    }

    #[test]
    fn test_julian_day_display_and_conversions() {
        let jd = JulianDay::new(2_451_544.5);
        assert_eq!(jd.to_string(), "JD 2451544.5");
        let raw: f64 = jd.into();
        assert_eq!(raw, 2_451_544.5);
        assert_eq!(JulianDay::from(raw), jd);
    }
}
