//! Property-Based Tests for Diamond Module
//!
//! Uses proptest to check the parser, matcher and geometry helpers over
//! arbitrary inputs.

use proptest::prelude::*;

use crate::diamond::{
    face_up_area, find_matches, overlay_scale, parse_dimension, visual_scale,
    MATCH_THRESHOLD_MM, MAX_MATCHES,
};

// == Strategies ==
/// Plausible stone measurements in millimeters
fn measurement_strategy() -> impl Strategy<Value = f64> {
    (1u32..2000).prop_map(|hundredths| hundredths as f64 / 100.0)
}

/// Arbitrary query strings, numeric or not
fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        measurement_strategy().prop_map(|v| v.to_string()),
        (-50.0f64..50.0).prop_map(|v| v.to_string()),
        "[a-z0-9.x -]{0,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Matches never exceed the cap or the threshold, and come back ranked.
    #[test]
    fn prop_matches_bounded_and_sorted(
        length in query_strategy(),
        width in prop::option::of(query_strategy())
    ) {
        let matches = find_matches(&length, width.as_deref());

        prop_assert!(matches.len() <= MAX_MATCHES);
        for m in &matches {
            prop_assert!(m.match_score >= 0.0);
            prop_assert!(m.match_score <= MATCH_THRESHOLD_MM);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].match_score <= pair[1].match_score);
        }
    }

    // Non-positive lengths never produce matches.
    #[test]
    fn prop_non_positive_length_is_empty(length in -100.0f64..=0.0) {
        prop_assert!(find_matches(&length.to_string(), None).is_empty());
    }

    // Matching is deterministic.
    #[test]
    fn prop_matches_are_repeatable(length in measurement_strategy()) {
        let query = length.to_string();
        prop_assert_eq!(find_matches(&query, None), find_matches(&query, None));
    }

    // A single number parses to a square dimension of that number.
    #[test]
    fn prop_single_value_is_square(value in measurement_strategy()) {
        let dim = parse_dimension(&value.to_string()).unwrap();
        prop_assert_eq!(dim.length, value);
        prop_assert_eq!(dim.width, value);
    }

    // "LxW" parses to its two parts, whitespace notwithstanding.
    #[test]
    fn prop_pair_parses(length in measurement_strategy(), width in measurement_strategy()) {
        let dim = parse_dimension(&format!(" {} x {} ", length, width)).unwrap();
        prop_assert_eq!(dim.length, length);
        prop_assert_eq!(dim.width, width);
    }

    // The parser never panics.
    #[test]
    fn prop_parse_total(raw in "\\PC{0,20}") {
        let _ = parse_dimension(&raw);
    }

    // Visual scale is clamped and monotonic.
    #[test]
    fn prop_visual_scale_monotonic(a in 0.0f64..10.0, b in 0.0f64..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(visual_scale(lo) <= visual_scale(hi));
        prop_assert!(visual_scale(hi) <= 200.0);
        prop_assert!(visual_scale(lo) >= 60.0);
    }

    // Carats at or past the clamp point always scale to the maximum.
    #[test]
    fn prop_visual_scale_saturates(carat in 4.6667f64..1000.0) {
        prop_assert_eq!(visual_scale(carat), 200.0);
    }

    // Geometry helpers agree with the parser on what is valid.
    #[test]
    fn prop_geometry_sentinels(raw in "[a-z0-9.x]{0,10}") {
        match parse_dimension(&raw) {
            Some(dim) => {
                prop_assert_eq!(overlay_scale(&raw), dim.length.max(dim.width) * 10.0);
                prop_assert_ne!(face_up_area(&raw), "N/A");
            }
            None => {
                prop_assert_eq!(overlay_scale(&raw), 80.0);
                prop_assert_eq!(face_up_area(&raw), "N/A");
            }
        }
    }
}
