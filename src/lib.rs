//! Deterministic, offline conversion between the proleptic Gregorian
//! calendar and the tabular (arithmetic) Hijri calendar, using the Julian
//! day number as the shared intermediate representation.

mod consts;
mod jdn;
mod prelude;
mod rules;

pub use consts::*;
pub use jdn::{JulianDay, gregorian_to_jd, hijri_to_jd, jd_to_gregorian, jd_to_hijri};
pub use rules::{hijri_month_length, is_hijri_leap};

use crate::prelude::*;
use std::str::FromStr;

/// Error type for textual date parsing.
///
/// The numeric conversion API never fails; these errors exist only at the
/// text boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Wrong field count or a non-numeric field.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year below the minimum for the textual form.
    #[error("Invalid year: {0} (must be >= {MIN_YEAR})")]
    InvalidYear(i64),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(i64),

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

/// A proleptic Gregorian calendar date.
///
/// This is an unchecked container: `day` is never validated against the
/// month's actual length, and conversions produce numerically defined
/// output even for calendrically meaningless fields. Validation happens
/// only when parsing from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: i64,
    month: i64,
    day: i64,
}

impl GregorianDate {
    /// Creates a date from raw fields, trusting the caller.
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering: 1 BC is 0)
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month (1-12 for well-formed dates)
    pub const fn month(&self) -> i64 {
        self.month
    }

    /// Returns the day of month
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Returns the Julian day number of this date's midnight.
    pub fn to_jd(self) -> JulianDay {
        gregorian_to_jd(self.year, self.month, self.day)
    }

    /// Builds the date containing the given Julian day number.
    pub fn from_jd(jd: JulianDay) -> Self {
        let (year, month, day) = jd_to_gregorian(jd);
        Self::new(year, month, day)
    }

    /// Converts this date to its tabular Hijri equivalent.
    pub fn to_hijri(self) -> HijriDate {
        HijriDate::from_jd(self.to_jd())
    }
}

/// A tabular Hijri calendar date.
///
/// Construction clamps `day` into `[1, hijri_month_length(year, month)]`:
/// a day past the end of a short month truncates to the month's last day
/// rather than carrying into the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    year: i64,
    month: i64,
    day: i64,
}

impl HijriDate {
    /// Creates a date, clamping the day to the month's tabular length.
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        let day = day.clamp(MIN_DAY, hijri_month_length(year, month));
        Self { year, month, day }
    }

    /// Returns the Hijri year
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month (1-12 for well-formed dates)
    pub const fn month(&self) -> i64 {
        self.month
    }

    /// Returns the day of month
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Returns the fixed table name for this month, or `None` if the
    /// month is outside `1..=12`.
    pub fn month_name(&self) -> Option<&'static str> {
        usize::try_from(self.month - 1)
            .ok()
            .and_then(|index| HIJRI_MONTHS.get(index))
            .copied()
    }

    /// Returns the Julian day number of this date's midnight.
    pub fn to_jd(self) -> JulianDay {
        hijri_to_jd(self.year, self.month, self.day)
    }

    /// Builds the date containing the given Julian day number.
    pub fn from_jd(jd: JulianDay) -> Self {
        let (year, month, day) = jd_to_hijri(jd);
        Self::new(year, month, day)
    }

    /// Converts this date to its Gregorian equivalent.
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_jd(self.to_jd())
    }
}

/// Converts a Gregorian date to its tabular Hijri `(year, month, day)`.
///
/// Argument order follows the original caller contract: day, month, year
/// in, year, month, day out. Inputs are not validated; out-of-range
/// fields yield defined but calendrically meaningless output.
pub fn gregorian_to_hijri(day: i64, month: i64, year: i64) -> (i64, i64, i64) {
    jd_to_hijri(gregorian_to_jd(year, month, day))
}

/// Converts a tabular Hijri date to its Gregorian `(year, month, day)`.
///
/// Same unchecked contract as [`gregorian_to_hijri`].
pub fn hijri_to_gregorian(day: i64, month: i64, year: i64) -> (i64, i64, i64) {
    jd_to_gregorian(hijri_to_jd(year, month, day))
}

// --- text boundary ---

fn parse_field(s: &str) -> Result<i64, ParseError> {
    s.parse::<i64>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Parses `Y-M-D` into validated year and month plus a raw day.
fn parse_ymd(s: &str) -> Result<(i64, i64, i64), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }

    let year = parse_field(parts[0])?;
    let month = parse_field(parts[1])?;
    let day = parse_field(parts[2])?;

    if year < MIN_YEAR {
        return Err(ParseError::InvalidYear(year));
    }
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }

    Ok((year, month, day))
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. The day is accepted as-is per the unchecked
    /// input contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day))
    }
}

impl FromStr for HijriDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. The day is clamped to the month's tabular
    /// length, matching construction through [`HijriDate::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day))
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
