//! Request DTOs for the gemdesk API
//!
//! Query-string parameters of the HTTP endpoints.

use serde::Deserialize;

/// Query for GET /diamonds/match
///
/// Both values are kept as raw strings: invalid input yields an empty match
/// list rather than a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchQuery {
    /// Target length in millimeters
    #[serde(default)]
    pub length: String,
    /// Optional target width in millimeters
    #[serde(default)]
    pub width: Option<String>,
}

/// Query for GET /diamonds/geometry
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryQuery {
    /// Measurement string, `"L"` or `"LxW"`
    #[serde(default)]
    pub mm: String,
    /// Optional carat weight for the visual scale
    #[serde(default)]
    pub carat: Option<f64>,
}

/// Query for GET /diamonds/shapes/:shape/closest
#[derive(Debug, Clone, Deserialize)]
pub struct ClosestQuery {
    pub carat: f64,
}

impl ClosestQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !self.carat.is_finite() || self.carat <= 0.0 {
            return Some("Carat must be a positive number".to_string());
        }
        None
    }
}

/// Query for GET /rates/convert
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertQuery {
    /// Amount in INR
    pub amount: f64,
}

impl ConvertQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !self.amount.is_finite() {
            return Some("Amount must be a finite number".to_string());
        }
        None
    }
}
