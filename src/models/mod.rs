//! Request and Response models for the gemdesk API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ClosestQuery, ConvertQuery, GeometryQuery, MatchQuery};
pub use responses::{
    ClosestResponse, ConvertResponse, GeometryResponse, HealthResponse, InvalidateResponse,
    MatchResponse, RateResponse, ShapeSummary, ShapesResponse, StatsResponse,
};
