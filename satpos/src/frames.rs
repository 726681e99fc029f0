//! TEME → ECEF → WGS84 geodetic conversion.
//!
//! The propagator reports position in the inertial True Equator, Mean
//! Equinox frame. Rotating by Greenwich Mean Sidereal Time pins that to
//! the rotating Earth (ECEF), from which geodetic latitude and ellipsoidal
//! height fall out of a short fixed-point iteration.

use std::f64::consts::PI;

use na::Vector3;
use sattypes::geodetic::{WGS84_A, WGS84_E2};
use sattypes::prelude::*;

/// Hard cap on the geodetic latitude iteration. The solve converges in a
/// handful of passes for anything in orbit; the cap turns a pathological
/// input into an error instead of a hang.
pub const MAX_GEODETIC_ITERATIONS: usize = 50;

/// Convergence threshold on successive latitude estimates [rad].
const GEODETIC_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("geodetic solve did not converge within {MAX_GEODETIC_ITERATIONS} iterations")]
pub struct NonConvergence;

/// Greenwich Mean Sidereal Time [rad] in `[0, 2π)`.
///
/// Vallado's GMST polynomial in Julian centuries from J2000; UT1 is
/// approximated by UTC, which is well inside the accuracy of mean
/// elements.
pub fn gmst(jd: &JulianDate) -> f64 {
    let tut1 = ((jd.whole - 2_451_545.0) + jd.frac) / 36_525.0;
    let seconds = 67_310.54841
        + tut1 * (876_600.0 * 3600.0 + 8_640_184.812866 + tut1 * (0.093104 - tut1 * 6.2e-6));

    // 240 seconds of time per degree of rotation.
    let theta = (seconds / 240.0).to_radians() % (2.0 * PI);
    if theta < 0.0 {
        theta + 2.0 * PI
    } else {
        theta
    }
}

/// Rotate a TEME position into ECEF about the given sidereal angle [rad].
pub fn teme_to_ecef(teme: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vector3::new(
        teme.x * cos_theta + teme.y * sin_theta,
        -teme.x * sin_theta + teme.y * cos_theta,
        teme.z,
    )
}

/// ECEF [km] to geodetic (latitude [rad], longitude [rad], altitude [km])
/// on the WGS84 ellipsoid.
pub fn ecef_to_geodetic(ecef: &Vector3<f64>) -> Result<(f64, f64, f64), NonConvergence> {
    let longitude = ecef.y.atan2(ecef.x);
    let rho = ecef.x.hypot(ecef.y);
    let (latitude, altitude, _) = solve_latitude(rho, ecef.z)?;
    Ok((latitude, longitude, altitude))
}

/// Bowring-style fixed-point solve for geodetic latitude and height.
fn solve_latitude(rho: f64, z: f64) -> Result<(f64, f64, usize), NonConvergence> {
    let mut phi = z.atan2(rho);
    for pass in 1..=MAX_GEODETIC_ITERATIONS {
        let n = WGS84_A / (1.0 - WGS84_E2 * phi.sin().powi(2)).sqrt();
        let h = rho / phi.cos() - n;
        let next = z.atan2(rho * (1.0 - WGS84_E2 * n / (n + h)));
        let delta = (next - phi).abs();
        phi = next;
        if delta <= GEODETIC_TOLERANCE {
            return Ok((phi, h, pass));
        }
    }
    Err(NonConvergence)
}

/// Full conversion: TEME position [km] at a Unix-epoch instant [ms] to
/// geodetic (latitude [rad], longitude [rad], altitude [km]).
pub fn teme_to_geodetic(
    teme: &Vector3<f64>,
    at_millis: i64,
) -> Result<(f64, f64, f64), NonConvergence> {
    let jd = JulianDate::from_unix_millis(at_millis);
    let ecef = teme_to_ecef(teme, gmst(&jd));
    ecef_to_geodetic(&ecef)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn gmst_at_j2000() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_abs_diff_eq!(gmst(&jd), 4.894961212823059, epsilon = 1e-8);
    }

    #[test]
    fn gmst_stays_in_range() {
        for days in 0..400 {
            let jd = JulianDate {
                whole: 2_451_544.5 + f64::from(days),
                frac: 0.251,
            };
            let theta = gmst(&jd);
            assert!((0.0..2.0 * PI).contains(&theta), "day {days}: {theta}");
        }
    }

    #[test]
    fn quarter_turn_rotation() {
        let teme = Vector3::new(7000.0, 100.0, -3.0);
        let ecef = teme_to_ecef(&teme, PI / 2.0);
        assert_relative_eq!(ecef.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(ecef.y, -7000.0, epsilon = 1e-9);
        assert_relative_eq!(ecef.z, -3.0);
    }

    #[test]
    fn equatorial_point_converges_fast() {
        let (lat, alt, passes) = solve_latitude(WGS84_A + 500.0, 0.0).unwrap();
        assert_abs_diff_eq!(lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(alt, 500.0, epsilon = 1e-9);
        assert!(passes < 10, "took {passes} passes");
    }

    #[test]
    fn mid_latitude_round_trip() {
        // Forward ellipsoid equations for 45°N at 420 km.
        let phi = 45.0_f64.to_radians();
        let h = 420.0;
        let n = WGS84_A / (1.0 - WGS84_E2 * phi.sin().powi(2)).sqrt();
        let ecef = Vector3::new(
            (n + h) * phi.cos() * 0.3_f64.cos(),
            (n + h) * phi.cos() * 0.3_f64.sin(),
            (n * (1.0 - WGS84_E2) + h) * phi.sin(),
        );

        let (lat, lon, alt) = ecef_to_geodetic(&ecef).unwrap();
        assert_abs_diff_eq!(lat, phi, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(alt, h, epsilon = 1e-6);
    }

    #[test]
    fn geocenter_is_rejected() {
        // The degenerate input NaN-poisons the latitude iteration; the
        // pass cap turns that into an error instead of a spin.
        assert_eq!(ecef_to_geodetic(&Vector3::zeros()), Err(NonConvergence));
    }
}
