use crate::time::JulianDate;
use serde::Serialize;

/// A parsed two-line element set, ready for SGP4 initialization.
///
/// Angles and rates are stored in the propagator's native units (radians,
/// radians/minute), not the degrees and revolutions/day of the TLE text.
/// The record is immutable once parsed; propagation status travels in the
/// per-call result, never here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrbitalElements {
    /// Five-character catalog number, as printed.
    pub object_id: String,
    /// Eight-character international designator (launch year/number/piece).
    pub international_designator: String,
    /// `U` (unclassified), `C`, or `S`.
    pub classification: char,

    /// Four-digit epoch year after the two-digit century pivot.
    pub epoch_year: i32,
    /// Day of year plus fractional day, as printed in line 1.
    pub epoch_days: f64,
    /// Epoch as a split Julian Date.
    #[serde(skip)]
    pub epoch_jd: JulianDate,
    /// Epoch as milliseconds since the Unix epoch.
    pub epoch_millis: i64,

    /// Inclination [rad].
    pub inclination: f64,
    /// Right ascension of the ascending node [rad].
    pub right_ascension: f64,
    /// Eccentricity, dimensionless.
    pub eccentricity: f64,
    /// Argument of perigee [rad].
    pub argument_of_perigee: f64,
    /// Mean anomaly [rad].
    pub mean_anomaly: f64,
    /// Kozai mean motion [rad/min].
    pub mean_motion: f64,

    /// First derivative of mean motion over two [rad/min²].
    pub mean_motion_dot: f64,
    /// Second derivative of mean motion over six [rad/min³].
    pub mean_motion_ddot: f64,
    /// B* drag term [1/earth radii].
    pub drag_term: f64,
    pub element_set_number: u32,
    pub revolution_number: u32,
}

impl OrbitalElements {
    /// Minutes from the element epoch to `target_millis`, the propagation
    /// time offset SGP4 consumes.
    pub fn minutes_since_epoch(&self, target_millis: i64) -> f64 {
        (target_millis - self.epoch_millis) as f64 / 60_000.0
    }
}
