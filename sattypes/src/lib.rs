extern crate nalgebra as na;

pub mod elements;
pub mod geodetic;
pub mod prelude;
pub mod teme;
pub mod time;
