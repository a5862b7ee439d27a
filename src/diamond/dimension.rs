//! Dimension Parser
//!
//! Parses linear measurement strings such as `"6.5"` or `"7.7x5.7"`.

use serde::Serialize;

/// Separator between length and width in a linear measurement.
const SEPARATOR: char = 'x';

// == Dimension ==
/// Length and width of a stone in millimeters.
///
/// Round measurements carry a single value, in which case `width == length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub length: f64,
    pub width: f64,
}

impl Dimension {
    /// Returns the larger of the two axes.
    pub fn longest_side(&self) -> f64 {
        self.length.max(self.width)
    }
}

// == Parse ==
/// Parses a linear measurement string.
///
/// All whitespace is stripped first. A string containing `x` must split into
/// exactly two finite numbers (`length x width`); otherwise the whole string
/// must be a single finite number used for both axes. Returns `None` on any
/// failure, never panics.
pub fn parse_dimension(raw: &str) -> Option<Dimension> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if stripped.contains(SEPARATOR) {
        let mut parts = stripped.split(SEPARATOR);
        let length = parse_finite(parts.next()?)?;
        let width = parse_finite(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Dimension { length, width })
    } else {
        let value = parse_finite(&stripped)?;
        Some(Dimension {
            length: value,
            width: value,
        })
    }
}

/// Parses a finite real number; empty, NaN and infinite inputs are rejected.
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
