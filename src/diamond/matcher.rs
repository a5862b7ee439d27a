//! Diamond Matching Engine
//!
//! Ranks reference sizes by how close their face-up measurements are to a
//! queried length and width.

use serde::Serialize;
use tracing::debug;

use crate::diamond::dimension::{parse_dimension, parse_finite};
use crate::diamond::reference::{ShapeId, ShapeSizes, REFERENCE_TABLE};

/// Maximum total deviation (mm, both axes) for an entry to count as a match.
pub const MATCH_THRESHOLD_MM: f64 = 4.0;

/// Maximum number of results returned per query.
pub const MAX_MATCHES: usize = 10;

// == Match Result ==
/// One reference entry that is close to the queried size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub shape: ShapeId,
    pub shape_name: &'static str,
    pub carat: f64,
    /// Measurement string as stored in the reference table
    pub mm: &'static str,
    /// L1 distance in millimeters, lower is better
    pub match_score: f64,
}

// == Search Target ==
/// Resolved query dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTarget {
    pub length: f64,
    pub width: f64,
}

impl SearchTarget {
    /// Resolves raw query strings into search dimensions.
    ///
    /// `target_length` must be a bare positive number. `target_width` is used
    /// whenever it parses, otherwise the length doubles as width.
    pub fn resolve(target_length: &str, target_width: Option<&str>) -> Option<Self> {
        let length = parse_finite(target_length.trim()).filter(|v| *v > 0.0)?;
        let width = target_width
            .and_then(|w| parse_finite(w.trim()))
            .unwrap_or(length);
        Some(Self { length, width })
    }
}

// == Find Matches ==
/// Finds the closest reference sizes across every shape.
///
/// Returns an empty list when `target_length` is not a positive number.
pub fn find_matches(target_length: &str, target_width: Option<&str>) -> Vec<MatchResult> {
    find_matches_in(REFERENCE_TABLE, target_length, target_width)
}

/// Runs the matching algorithm against an arbitrary reference table.
pub fn find_matches_in(
    table: &'static [ShapeSizes],
    target_length: &str,
    target_width: Option<&str>,
) -> Vec<MatchResult> {
    let Some(target) = SearchTarget::resolve(target_length, target_width) else {
        debug!(target_length, "Rejected match query with invalid length");
        return Vec::new();
    };

    let mut matches: Vec<MatchResult> = table
        .iter()
        .flat_map(|sizes| sizes.entries.iter().map(move |entry| (sizes.shape, entry)))
        .filter_map(|(shape, entry)| {
            let dim = parse_dimension(entry.linear_mm)?;
            let match_score =
                (dim.length - target.length).abs() + (dim.width - target.width).abs();
            (match_score <= MATCH_THRESHOLD_MM).then_some(MatchResult {
                shape,
                shape_name: shape.display_name(),
                carat: entry.carat,
                mm: entry.linear_mm,
                match_score,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep scan order
    matches.sort_by(|a, b| a.match_score.total_cmp(&b.match_score));
    matches.truncate(MAX_MATCHES);
    matches
}
