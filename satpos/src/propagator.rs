//! SGP4 adapter: one-time initialization of a parsed element set, then
//! time-offset propagation to a TEME state.
//!
//! The heavy lifting lives in the `sgp4` crate; this module only maps our
//! propagator-native record onto its inputs. WGS72 constants and the
//! AFSPC sidereal-time mode keep the output aligned with the reference
//! distribution the catalog elements are fitted against.

use sattypes::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum PropagationError {
    /// The element set was rejected at initialization (non-physical
    /// eccentricity, mean motion, ...).
    #[error("SGP4 rejected the element set: {0}")]
    Initialization(sgp4::ElementsError),
    /// Propagation broke down at the requested offset (orbital decay,
    /// numerical failure). No state is produced.
    #[error("SGP4 propagation failed: {0}")]
    Propagation(sgp4::Error),
}

pub struct Propagator {
    constants: sgp4::Constants,
}

impl Propagator {
    /// Run SGP4's per-record initialization. Call once per element set.
    pub fn new(elements: &OrbitalElements) -> Result<Self, PropagationError> {
        let orbit = sgp4::Orbit::from_kozai_elements(
            &sgp4::WGS72,
            elements.inclination,
            elements.right_ascension,
            elements.eccentricity,
            elements.argument_of_perigee,
            elements.mean_anomaly,
            elements.mean_motion,
        )
        .map_err(|error| PropagationError::Initialization(error.into()))?;

        let constants = sgp4::Constants::new(
            sgp4::WGS72,
            sgp4::afspc_epoch_to_sidereal_time,
            elements.epoch_jd.years_since_j2000(),
            elements.drag_term,
            orbit,
        )
        .map_err(|error| PropagationError::Initialization(error.into()))?;

        Ok(Self { constants })
    }

    /// TEME position/velocity `minutes` after the element epoch.
    ///
    /// A failure here means no usable state at all; a decayed or diverged
    /// orbit surfaces as [`PropagationError::Propagation`] rather than a
    /// mathematically-defined but meaningless position.
    pub fn propagate(&self, minutes: f64) -> Result<TemeState, PropagationError> {
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(PropagationError::Propagation)?;

        Ok(TemeState {
            position: na::Vector3::from(prediction.position),
            velocity: na::Vector3::from(prediction.velocity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tleparse::parse_elements;

    const LINE1: &str = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
    const LINE2: &str = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

    #[test]
    fn propagates_at_epoch() {
        let elements = parse_elements(LINE1, LINE2).unwrap();
        let propagator = Propagator::new(&elements).unwrap();
        let state = propagator.propagate(0.0).unwrap();

        // Reference TEME state for object 5 at its epoch.
        assert!((state.position.x - 7022.46529266).abs() < 1e-3);
        assert!((state.position.y - -1400.08296755).abs() < 1e-3);
        assert!((state.position.z - 0.03995155).abs() < 1e-3);
        assert!((state.velocity.norm() - 7.38).abs() < 0.05);
    }

    #[test]
    fn rejects_non_physical_elements() {
        let mut elements = parse_elements(LINE1, LINE2).unwrap();
        elements.eccentricity = 1.5;
        assert!(matches!(
            Propagator::new(&elements),
            Err(PropagationError::Initialization(_))
        ));
    }
}
