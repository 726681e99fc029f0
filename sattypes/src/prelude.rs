pub use crate::elements::OrbitalElements;
pub use crate::geodetic::GeodeticPosition;
pub use crate::teme::TemeState;
pub use crate::time::{JulianDate, UtcTimestamp};
