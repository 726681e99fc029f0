use derive_more::Display;
use serde::Serialize;

/// WGS84 semi-major axis [km].
pub const WGS84_A: f64 = 6378.137;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257223563;
/// WGS84 first eccentricity squared, `2f - f²`.
pub const WGS84_E2: f64 = 2.0 * WGS84_F - WGS84_F * WGS84_F;

/// Geodetic position on the WGS84 ellipsoid.
///
/// The `Display` rendering is the WKT form consumed downstream,
/// longitude first: `POINT Z(lon lat alt)`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display, Serialize)]
#[display(fmt = "POINT Z({:.10} {:.10} {:.6})", "longitude", "latitude", "altitude")]
pub struct GeodeticPosition {
    /// Geodetic latitude [deg], north positive.
    pub latitude: f64,
    /// Longitude [deg], east positive.
    pub longitude: f64,
    /// Height above the ellipsoid [km].
    pub altitude: f64,
}
