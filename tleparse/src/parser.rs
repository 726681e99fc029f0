//! Parser for the NORAD two-line element set format.

use crate::columns;
use crate::LINE_LEN;
use sattypes::prelude::*;
use sattypes::time::is_leap_year;

/// Revolutions/day to radians/minute divisor, `1440 / 2π`.
const XPDOTP: f64 = 1440.0 / (2.0 * std::f64::consts::PI);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TleError {
    #[error("TLE line {line} is {len} columns, expected at least {LINE_LEN}")]
    LineLength { line: u8, len: usize },
    #[error("TLE line {line} contains non-ASCII text")]
    NonAscii { line: u8 },
}

/// Parse a two-line element set into a propagator-ready record.
///
/// Individual numeric fields never fail (see [`columns::Field::decode`]);
/// the only rejections here are lines too short or too wide-charactered to
/// slice by column at all. Whether the decoded elements are physically
/// meaningful is the propagator initializer's call, not ours.
pub fn parse_elements(line1: &str, line2: &str) -> Result<OrbitalElements, TleError> {
    check_line(1, line1)?;
    check_line(2, line2)?;

    let (epoch_year, epoch_days, epoch_jd) = parse_epoch(line1);
    let epoch_millis = epoch_jd.to_unix_millis();

    Ok(OrbitalElements {
        object_id: line1[2..7].to_string(),
        international_designator: line1[9..17].to_string(),
        classification: line1.as_bytes()[7] as char,

        epoch_year,
        epoch_days,
        epoch_jd,
        epoch_millis,

        inclination: columns::INCLINATION.decode(line2).to_radians(),
        right_ascension: columns::RIGHT_ASCENSION.decode(line2).to_radians(),
        eccentricity: columns::ECCENTRICITY.decode(line2),
        argument_of_perigee: columns::ARGUMENT_OF_PERIGEE.decode(line2).to_radians(),
        mean_anomaly: columns::MEAN_ANOMALY.decode(line2).to_radians(),
        mean_motion: columns::MEAN_MOTION.decode(line2) / XPDOTP,

        mean_motion_dot: columns::MEAN_MOTION_DOT.decode(line1) / (XPDOTP * 1440.0),
        mean_motion_ddot: columns::MEAN_MOTION_DDOT.decode(line1) / (XPDOTP * 1440.0 * 1440.0),
        drag_term: columns::DRAG_TERM.decode(line1),
        element_set_number: columns::ELEMENT_SET_NUMBER.decode_int(line1),
        revolution_number: columns::REVOLUTION_NUMBER.decode_int(line2),
    })
}

fn check_line(number: u8, line: &str) -> Result<(), TleError> {
    if !line.is_ascii() {
        return Err(TleError::NonAscii { line: number });
    }
    if line.len() < LINE_LEN {
        return Err(TleError::LineLength {
            line: number,
            len: line.len(),
        });
    }
    Ok(())
}

/// Two-digit years above 56 belong to the 1900s; the TLE format predates
/// four-digit years and pivots at Sputnik's launch year.
pub fn century_pivot(two_digit_year: i32) -> i32 {
    if two_digit_year > 56 {
        1900 + two_digit_year
    } else {
        2000 + two_digit_year
    }
}

/// Decode the `YYDDD.DDDDDDDD` epoch field of line 1.
///
/// The fractional day is peeled into hour/minute/second by successive
/// multiplication, truncating the integer part at each step. The ordering
/// matters: rounding each unit independently would disagree with the
/// catalog source by up to a millisecond.
fn parse_epoch(line1: &str) -> (i32, f64, JulianDate) {
    let yy: i32 = line1[18..20].trim().parse().unwrap_or(0);
    let year = century_pivot(yy);

    let doy: u32 = line1[20..23].trim().parse().unwrap_or(0);
    let day_frac: f64 = format!("0{}", line1[23..32].trim_end()).parse().unwrap_or(0.0);

    let mut f = day_frac * 24.0;
    let hour = f as u32;
    f = 60.0 * (f - f64::from(hour));
    let minute = f as u32;
    let second = 60.0 * (f - f64::from(minute));

    let (month, day) = month_day(year, doy);
    let jd = JulianDate::from_calendar(year, month, day, hour, minute, second);

    (year, f64::from(doy) + day_frac, jd)
}

/// Convert a day-of-year to (month, day-of-month).
fn month_day(year: i32, day_of_year: u32) -> (u32, u32) {
    let mut days: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap_year(year) {
        days[1] = 29;
    }

    let mut doy = day_of_year;
    let mut month = 0;
    while month < 12 && doy > days[month] {
        doy -= days[month];
        month += 1;
    }
    (month as u32 + 1, doy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    // Catalog object 5 (Vanguard 1), the propagator's canonical test case.
    const TLE: &str = indoc! {"
        1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753
        2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667
    "};

    fn lines() -> (&'static str, &'static str) {
        let mut it = TLE.lines();
        (it.next().unwrap(), it.next().unwrap())
    }

    #[test]
    fn pivot_years() {
        assert_eq!(century_pivot(56), 2056);
        assert_eq!(century_pivot(57), 1957);
        assert_eq!(century_pivot(0), 2000);
        assert_eq!(century_pivot(99), 1999);
    }

    #[test]
    fn month_day_walk() {
        assert_eq!(month_day(2000, 1), (1, 1));
        assert_eq!(month_day(2000, 60), (2, 29));
        assert_eq!(month_day(2001, 60), (3, 1));
        assert_eq!(month_day(2000, 179), (6, 27));
        assert_eq!(month_day(2000, 366), (12, 31));
    }

    #[test]
    fn identity_fields() {
        let (l1, l2) = lines();
        let el = parse_elements(l1, l2).unwrap();
        assert_eq!(el.object_id, "00005");
        assert_eq!(el.international_designator, "58002B  ");
        assert_eq!(el.classification, 'U');
        assert_eq!(el.element_set_number, 475);
        assert_eq!(el.revolution_number, 41366);
    }

    #[test]
    fn epoch_decode() {
        let (l1, l2) = lines();
        let el = parse_elements(l1, l2).unwrap();
        assert_eq!(el.epoch_year, 2000);
        assert!((el.epoch_days - 179.78495062).abs() < 1e-9);

        // 179.78495062 of 2000 is June 27, 18:50:19.733568.
        let t: UtcTimestamp = "2000-06-27T18:50:19.733568Z".parse().unwrap();
        assert_eq!(el.epoch_millis, t.timestamp_millis());
        assert_eq!(el.minutes_since_epoch(el.epoch_millis), 0.0);
    }

    #[test]
    fn mean_elements_in_propagator_units() {
        let (l1, l2) = lines();
        let el = parse_elements(l1, l2).unwrap();
        assert_eq!(el.inclination, 34.2682_f64.to_radians());
        assert_eq!(el.right_ascension, 348.7242_f64.to_radians());
        assert_eq!(el.eccentricity, 0.1859667);
        assert_eq!(el.argument_of_perigee, 331.7664_f64.to_radians());
        assert_eq!(el.mean_anomaly, 19.3264_f64.to_radians());
        assert!((el.drag_term - 0.28098e-4).abs() < 1e-16);

        // Revolutions/day map through 1440/2π and back.
        let rev_per_day = el.mean_motion * XPDOTP;
        assert!((rev_per_day - 10.82419157).abs() / 10.82419157 < 1e-9);
    }

    #[test]
    fn rejects_short_lines() {
        let (l1, l2) = lines();
        assert_eq!(
            parse_elements(&l1[..40], l2),
            Err(TleError::LineLength { line: 1, len: 40 })
        );
        assert_eq!(
            parse_elements(l1, ""),
            Err(TleError::LineLength { line: 2, len: 0 })
        );
    }

    #[test]
    fn rejects_non_ascii() {
        let (l1, _) = lines();
        let bad = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157é13667";
        assert_eq!(parse_elements(l1, bad), Err(TleError::NonAscii { line: 2 }));
    }
}
