//! Geometry Utilities
//!
//! Presentation helpers derived from carat weight and face-up measurements.

use crate::diamond::dimension::parse_dimension;

const VISUAL_BASE: f64 = 60.0;
const VISUAL_PER_CARAT: f64 = 30.0;
const VISUAL_MAX: f64 = 200.0;

const OVERLAY_DEFAULT: f64 = 80.0;
const OVERLAY_PER_MM: f64 = 10.0;

/// Ratio of an ellipse's area to its bounding rectangle, rounded.
const ELLIPSE_FACTOR: f64 = 0.785;

/// Returned by [`face_up_area`] when the measurement cannot be parsed.
pub const AREA_UNAVAILABLE: &str = "N/A";

/// Display size for a stone of the given carat weight, clamped to 200.
pub fn visual_scale(carat: f64) -> f64 {
    (VISUAL_BASE + carat * VISUAL_PER_CARAT).min(VISUAL_MAX)
}

/// Overlay size for a measurement: ten units per millimeter of the longest
/// side, or 80 when the measurement is unparseable.
pub fn overlay_scale(mm: &str) -> f64 {
    match parse_dimension(mm) {
        Some(dim) => dim.longest_side() * OVERLAY_PER_MM,
        None => OVERLAY_DEFAULT,
    }
}

/// Approximate face-up area in square millimeters, to one decimal place.
pub fn face_up_area(mm: &str) -> String {
    match parse_dimension(mm) {
        Some(dim) => format!("{:.1}", dim.length * dim.width * ELLIPSE_FACTOR),
        None => AREA_UNAVAILABLE.to_string(),
    }
}
