//! Query facade: a TLE plus a UTC instant in, a WGS84 geodetic position
//! out.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::frames;
use crate::propagator::{PropagationError, Propagator};
use crate::TIMESTAMP_UTC_FORMAT;
use sattypes::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    Tle(#[from] tleparse::TleError),
    #[error("malformed UTC timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error(transparent)]
    Geodetic(#[from] frames::NonConvergence),
}

/// Geodetic position of the object described by a TLE at a textual UTC
/// instant (see [`TIMESTAMP_UTC_FORMAT`]).
pub fn satellite_geographic_position(
    line1: &str,
    line2: &str,
    at: &str,
) -> Result<GeodeticPosition, PositionError> {
    let at = NaiveDateTime::parse_from_str(at, TIMESTAMP_UTC_FORMAT)?.and_utc();
    satellite_geographic_position_at(line1, line2, &at)
}

/// Geodetic position of the object described by a TLE at a UTC instant.
pub fn satellite_geographic_position_at(
    line1: &str,
    line2: &str,
    at: &UtcTimestamp,
) -> Result<GeodeticPosition, PositionError> {
    let elements = tleparse::parse_elements(line1, line2)?;
    let propagator = Propagator::new(&elements)?;

    let at_millis = at.timestamp_millis();
    let minutes = elements.minutes_since_epoch(at_millis);
    debug!(
        object_id = %elements.object_id,
        minutes_since_epoch = minutes,
        "propagating"
    );

    let state = propagator.propagate(minutes)?;
    let (latitude, longitude, altitude) = frames::teme_to_geodetic(&state.position, at_millis)?;

    Ok(GeodeticPosition {
        latitude: latitude.to_degrees(),
        longitude: longitude.to_degrees(),
        altitude,
    })
}
