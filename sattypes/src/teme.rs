use derive_more::Display;

/// Propagated state in the True Equator, Mean Equinox frame.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(fmt = "{{pos: {}, vel: {}}}", "position", "velocity")]
pub struct TemeState {
    /// Position, [km], expressed in TEME
    pub position: na::Vector3<f64>,

    /// Velocity, [km/s], expressed in TEME
    pub velocity: na::Vector3<f64>,
}
