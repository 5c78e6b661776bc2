/// Minimum valid year for the textual (parsed) forms
pub const MIN_YEAR: i64 = 1;

/// Maximum valid month (Zulhijjah / December)
pub const MAX_MONTH: i64 = 12;

/// First day of month
pub const MIN_DAY: i64 = 1;

/// Month number for Zulhijjah, the only month whose length depends on the year
pub const ZULHIJJAH: i64 = 12;

/// Days in a long (odd-numbered) Hijri month
pub const HIJRI_LONG_MONTH_DAYS: i64 = 30;

/// Days in a short (even-numbered) Hijri month
pub const HIJRI_SHORT_MONTH_DAYS: i64 = 29;

/// Hijri month names, index = month - 1 (Indonesian transliteration)
pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Syaban",
    "Ramadhan",
    "Syawal",
    "Zulqaidah",
    "Zulhijjah",
];

/// The 11 leap-year offsets within the 30-year tabular Hijri cycle
pub const HIJRI_LEAP_OFFSETS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Length of the tabular Hijri leap cycle in years
pub const LEAP_CYCLE_YEARS: i64 = 30;

/// Days in a common (non-leap) Hijri year
pub const HIJRI_COMMON_YEAR_DAYS: i64 = 354;

/// Mean Hijri month length used by the forward (date-to-JD) approximation
pub const MEAN_HIJRI_MONTH_DAYS: f64 = 29.5;

/// Julian day of the tabular Hijri epoch (midnight before 1 Muharram, year 1)
pub const HIJRI_EPOCH_JD: f64 = 1_948_439.5;

/// First whole Julian day of the Gregorian reform (1582-10-15); day counts
/// below this use the Julian-calendar branch when converting back
pub const GREGORIAN_REFORM_JD: f64 = 2_299_161.0;

/// Date component separator for the textual `Y-M-D` form
pub const DATE_SEPARATOR: char = '-';
