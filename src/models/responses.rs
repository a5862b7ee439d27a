//! Response DTOs for the gemdesk API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::diamond::{MatchResult, SearchTarget, ShapeId, SizeEntry};

/// Response body for GET /diamonds/match
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    /// Effective search length, null when the query was invalid
    pub length: Option<f64>,
    /// Effective search width, null when the query was invalid
    pub width: Option<f64>,
    pub count: usize,
    pub matches: Vec<MatchResult>,
}

impl MatchResponse {
    pub fn new(target: Option<SearchTarget>, matches: Vec<MatchResult>) -> Self {
        Self {
            length: target.map(|t| t.length),
            width: target.map(|t| t.width),
            count: matches.len(),
            matches,
        }
    }
}

/// One entry of GET /diamonds/shapes
#[derive(Debug, Clone, Serialize)]
pub struct ShapeSummary {
    pub shape: ShapeId,
    pub name: &'static str,
    pub sizes: usize,
}

/// Response body for GET /diamonds/shapes
#[derive(Debug, Clone, Serialize)]
pub struct ShapesResponse {
    pub shapes: Vec<ShapeSummary>,
}

/// Response body for GET /diamonds/shapes/:shape/closest
#[derive(Debug, Clone, Serialize)]
pub struct ClosestResponse {
    pub shape: ShapeId,
    pub shape_name: &'static str,
    pub carat: f64,
    pub linear_mm: &'static str,
    pub depth_mm: &'static str,
}

impl ClosestResponse {
    pub fn new(shape: ShapeId, entry: &SizeEntry) -> Self {
        Self {
            shape,
            shape_name: shape.display_name(),
            carat: entry.carat,
            linear_mm: entry.linear_mm,
            depth_mm: entry.depth_mm,
        }
    }
}

/// Response body for GET /diamonds/geometry
#[derive(Debug, Clone, Serialize)]
pub struct GeometryResponse {
    pub mm: String,
    pub overlay_scale: f64,
    pub face_up_area: String,
    /// Present only when a carat weight was supplied
    pub visual_scale: Option<f64>,
}

/// Response body for GET /rates/inr-usd
#[derive(Debug, Clone, Serialize)]
pub struct RateResponse {
    pub base: &'static str,
    pub target: &'static str,
    pub rate: f64,
    /// When the rate was served, RFC 3339
    pub as_of: String,
}

impl RateResponse {
    pub fn inr_usd(rate: f64) -> Self {
        Self {
            base: "INR",
            target: "USD",
            rate,
            as_of: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /rates/convert
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub amount_inr: f64,
    pub amount_usd: f64,
    pub formatted: String,
}

/// Response body for POST /rates/invalidate
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub message: String,
}

impl InvalidateResponse {
    pub fn new(cache: &str) -> Self {
        Self {
            message: format!("Cache '{}' invalidated", cache),
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub rate_cache: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(rate_cache: CacheStats) -> Self {
        let hit_rate = rate_cache.hit_rate();
        Self {
            rate_cache,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
