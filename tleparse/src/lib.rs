pub use crate::parser::{parse_elements, TleError};

pub mod columns;
pub mod parser;

/// Column count of a conforming TLE line.
pub const LINE_LEN: usize = 69;
