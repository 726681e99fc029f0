//! Calendar and Julian Date conversions.
//!
//! Everything downstream of the TLE parser runs on one of two
//! representations of the same instant: milliseconds since the Unix epoch
//! for timestamp arithmetic, and a split Julian Date for sidereal-time and
//! propagation-offset math. Conversions between the two are exact rational
//! operations on the 86 400 000 ms/day factor, never a reparse.

use chrono::prelude::*;

/// UTC wall-clock timestamp, the only time zone this crate knows about.
pub type UtcTimestamp = DateTime<Utc>;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Julian Date kept as a split (whole, fractional) pair.
///
/// The whole part lands on a `.5` day boundary (midnight), the fraction is
/// the elapsed portion of the current day in `[0, 1)`. Summing the parts
/// only when a single value is needed preserves sub-millisecond precision
/// over the century the TLE format spans.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct JulianDate {
    pub whole: f64,
    pub frac: f64,
}

impl JulianDate {
    /// Standard Gregorian calendar to Julian Date conversion.
    ///
    /// Valid for years 1900..2100, which covers every epoch the two-digit
    /// TLE year can express.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let whole = 367.0 * f64::from(year)
            - (7.0 * (f64::from(year) + ((f64::from(month) + 9.0) / 12.0).floor()) * 0.25).floor()
            + (275.0 * f64::from(month) / 9.0).floor()
            + f64::from(day)
            + 1_721_013.5;
        let frac = (second + f64::from(minute) * 60.0 + f64::from(hour) * 3600.0) / 86_400.0;
        Self { whole, frac }
    }

    pub fn from_datetime(t: &UtcTimestamp) -> Self {
        Self::from_unix_millis(t.timestamp_millis())
    }

    /// Exact rational split of a Unix-epoch millisecond count.
    pub fn from_unix_millis(millis: i64) -> Self {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let rem = millis.rem_euclid(MILLIS_PER_DAY);
        Self {
            whole: days as f64 + UNIX_EPOCH_JD,
            frac: rem as f64 / MILLIS_PER_DAY as f64,
        }
    }

    /// Milliseconds since the Unix epoch.
    ///
    /// Each term is truncated toward zero before summation; TLE epoch
    /// fields carry an eight-digit day fraction, so the sub-millisecond
    /// remainder being dropped here is what keeps parsed epochs identical
    /// to the catalog source at millisecond precision.
    pub fn to_unix_millis(&self) -> i64 {
        let day_term = (self.whole - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64;
        let frac_term = self.frac * MILLIS_PER_DAY as f64;
        day_term as i64 + frac_term as i64
    }

    /// Combined Julian Date value.
    pub fn value(&self) -> f64 {
        self.whole + self.frac
    }

    /// Julian years elapsed since the J2000 epoch (2000-01-01T12:00 UTC).
    pub fn years_since_j2000(&self) -> f64 {
        ((self.whole - 2_451_545.0) + self.frac) / 365.25
    }
}
