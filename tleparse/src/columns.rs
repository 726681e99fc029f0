//! Declarative column layout of the NORAD two-line element format.
//!
//! Each numeric field is one table entry giving its half-open column range
//! and encoding; a single generic [`Field::decode`] routine consumes them.
//! The table doubles as the authoritative description of the format:
//!
//! ```text
//! //          1         2         3         4         5         6
//! // 0123456789012345678901234567890123456789012345678901234567890123456789
//! // 1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753
//! // 2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667
//! ```

use tracing::debug;

/// How a field's digits map to a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Digits as printed; sign, decimal point, and exponent appear in the
    /// text when present.
    Decimal,
    /// Digits with the leading `0.` omitted by the format. A detached sign
    /// column precedes the digits when `sign` is set; the format only ever
    /// marks negative values there.
    ImpliedPoint { sign: Option<usize> },
}

/// One numeric field of a TLE line.
#[derive(Copy, Clone, Debug)]
pub struct Field {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub encoding: Encoding,
    /// Columns of a base-ten exponent applied after decoding (the
    /// implied-exponent encoding of the drag-like terms).
    pub exponent: Option<(usize, usize)>,
}

// Line 1 numeric fields.
pub const MEAN_MOTION_DOT: Field = Field {
    name: "mean_motion_dot",
    start: 35,
    end: 44,
    encoding: Encoding::ImpliedPoint { sign: Some(33) },
    exponent: None,
};
pub const MEAN_MOTION_DDOT: Field = Field {
    name: "mean_motion_ddot",
    start: 45,
    end: 50,
    encoding: Encoding::ImpliedPoint { sign: Some(44) },
    exponent: Some((50, 52)),
};
pub const DRAG_TERM: Field = Field {
    name: "drag_term",
    start: 54,
    end: 59,
    encoding: Encoding::ImpliedPoint { sign: Some(53) },
    exponent: Some((59, 61)),
};
pub const ELEMENT_SET_NUMBER: Field = Field {
    name: "element_set_number",
    start: 64,
    end: 68,
    encoding: Encoding::Decimal,
    exponent: None,
};

// Line 2 numeric fields.
pub const INCLINATION: Field = Field {
    name: "inclination",
    start: 8,
    end: 16,
    encoding: Encoding::Decimal,
    exponent: None,
};
pub const RIGHT_ASCENSION: Field = Field {
    name: "right_ascension",
    start: 17,
    end: 25,
    encoding: Encoding::Decimal,
    exponent: None,
};
pub const ECCENTRICITY: Field = Field {
    name: "eccentricity",
    start: 26,
    end: 33,
    encoding: Encoding::ImpliedPoint { sign: None },
    exponent: None,
};
pub const ARGUMENT_OF_PERIGEE: Field = Field {
    name: "argument_of_perigee",
    start: 34,
    end: 42,
    encoding: Encoding::Decimal,
    exponent: None,
};
pub const MEAN_ANOMALY: Field = Field {
    name: "mean_anomaly",
    start: 43,
    end: 51,
    encoding: Encoding::Decimal,
    exponent: None,
};
pub const MEAN_MOTION: Field = Field {
    name: "mean_motion",
    start: 52,
    end: 63,
    encoding: Encoding::Decimal,
    exponent: None,
};
pub const REVOLUTION_NUMBER: Field = Field {
    name: "revolution_number",
    start: 63,
    end: 68,
    encoding: Encoding::Decimal,
    exponent: None,
};

impl Field {
    /// Decode this field out of a TLE line.
    ///
    /// Lenient by design: malformed digits decode to zero rather than
    /// failing the whole line, matching how catalog feeds with stray
    /// whitespace have always been ingested. The caller has already
    /// verified the line is ASCII and at least 69 columns.
    pub fn decode(&self, line: &str) -> f64 {
        let raw = &line[self.start..self.end];
        let mut value = match self.encoding {
            Encoding::Decimal => lenient(self.name, raw.trim()),
            Encoding::ImpliedPoint { sign } => {
                // Right-padded fields (the first derivative occupies one
                // column fewer than its slot) keep their trailing blanks;
                // anything malformed beyond that still decodes to zero.
                let v = lenient(self.name, &format!("0.{}", raw.trim_end()));
                match sign {
                    Some(col) if line.as_bytes()[col] == b'-' => -v,
                    _ => v,
                }
            }
        };
        if let Some((start, end)) = self.exponent {
            value *= 10f64.powf(lenient(self.name, line[start..end].trim()));
        }
        value
    }

    /// Decode as a whole number; fractional digits would be malformed
    /// anyway and decode to zero.
    pub fn decode_int(&self, line: &str) -> u32 {
        self.decode(line) as u32
    }
}

fn lenient(name: &str, digits: &str) -> f64 {
    match digits.parse() {
        Ok(v) => v,
        Err(_) => {
            debug!(field = name, digits, "numeric field defaulted to zero");
            0.0
        }
    }
}
