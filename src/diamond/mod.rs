//! Diamond Module
//!
//! Reference sizes per shape, measurement parsing, size matching and
//! presentation geometry. Everything here is pure and synchronous.

mod dimension;
mod geometry;
mod matcher;
mod reference;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use dimension::{parse_dimension, Dimension};
pub use geometry::{face_up_area, overlay_scale, visual_scale, AREA_UNAVAILABLE};
pub use matcher::{
    find_matches, find_matches_in, MatchResult, SearchTarget, MATCH_THRESHOLD_MM, MAX_MATCHES,
};
pub use reference::{
    closest_carat, shapes, sizes_for, ShapeId, ShapeSizes, SizeEntry, REFERENCE_TABLE,
};
