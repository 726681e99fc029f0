pub extern crate nalgebra as na;

pub use crate::query::{
    satellite_geographic_position, satellite_geographic_position_at, PositionError,
};

pub mod frames;
pub mod propagator;
pub mod query;

/// Textual instant form accepted by the query facade. No offset suffix;
/// input is taken as UTC.
pub const TIMESTAMP_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
