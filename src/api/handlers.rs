//! API Handlers
//!
//! HTTP request handlers for each gemdesk endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::config::Config;
use crate::diamond::{
    closest_carat, face_up_area, find_matches, overlay_scale, shapes, sizes_for, visual_scale,
    SearchTarget, ShapeId,
};
use crate::error::{AppError, FetchError, Result};
use crate::models::{
    ClosestQuery, ClosestResponse, ConvertQuery, ConvertResponse, GeometryQuery,
    GeometryResponse, HealthResponse, InvalidateResponse, MatchQuery, MatchResponse,
    RateResponse, ShapeSummary, ShapesResponse, StatsResponse,
};
use crate::sources::{format_usd, RateCache};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached INR→USD rate
    pub rates: Arc<RateCache>,
}

impl AppState {
    /// Creates a new AppState around an existing rate cache.
    pub fn new(rates: RateCache) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP-backed rate cache from the configured endpoint.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        Ok(Self::new(RateCache::from_config(config)?))
    }
}

/// Handler for GET /diamonds/match
pub async fn match_handler(Query(query): Query<MatchQuery>) -> Json<MatchResponse> {
    let width = query.width.as_deref();
    let target = SearchTarget::resolve(&query.length, width);
    let matches = find_matches(&query.length, width);

    Json(MatchResponse::new(target, matches))
}

/// Handler for GET /diamonds/shapes
pub async fn shapes_handler() -> Json<ShapesResponse> {
    let shapes = shapes()
        .map(|shape| ShapeSummary {
            shape,
            name: shape.display_name(),
            sizes: sizes_for(shape).len(),
        })
        .collect();

    Json(ShapesResponse { shapes })
}

/// Handler for GET /diamonds/shapes/:shape/closest
///
/// Returns the standard size whose carat weight is nearest the query.
pub async fn closest_handler(
    Path(shape): Path<String>,
    Query(query): Query<ClosestQuery>,
) -> Result<Json<ClosestResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let shape: ShapeId = shape.parse().map_err(AppError::NotFound)?;
    let entry = closest_carat(shape, query.carat)
        .ok_or_else(|| AppError::NotFound(format!("No sizes for shape: {}", shape)))?;

    Ok(Json(ClosestResponse::new(shape, entry)))
}

/// Handler for GET /diamonds/geometry
pub async fn geometry_handler(Query(query): Query<GeometryQuery>) -> Json<GeometryResponse> {
    Json(GeometryResponse {
        overlay_scale: overlay_scale(&query.mm),
        face_up_area: face_up_area(&query.mm),
        visual_scale: query.carat.map(visual_scale),
        mm: query.mm,
    })
}

/// Handler for GET /rates/inr-usd
pub async fn rate_handler(State(state): State<AppState>) -> Json<RateResponse> {
    let rate = state.rates.get().await;
    Json(RateResponse::inr_usd(rate))
}

/// Handler for GET /rates/convert
pub async fn convert_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let amount_usd = state.rates.convert_inr_to_usd(query.amount).await;
    Ok(Json(ConvertResponse {
        amount_inr: query.amount,
        amount_usd,
        formatted: format_usd(amount_usd),
    }))
}

/// Handler for POST /rates/invalidate
pub async fn invalidate_rate_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    state.rates.invalidate().await;
    Json(InvalidateResponse::new("inr_usd_rate"))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.rates.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Fetcher;
    use crate::error::FetchResult;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FixedRate(f64);

    #[async_trait]
    impl Fetcher<f64> for FixedRate {
        async fn fetch(&self) -> FetchResult<f64> {
            Ok(self.0)
        }
    }

    fn test_state(rate: f64) -> AppState {
        AppState::new(RateCache::new(
            Arc::new(FixedRate(rate)),
            Duration::from_secs(3600),
            0.012,
        ))
    }

    #[tokio::test]
    async fn test_match_handler() {
        let query = MatchQuery {
            length: "6.5".to_string(),
            width: None,
        };
        let response = match_handler(Query(query)).await;
        assert_eq!(response.length, Some(6.5));
        assert!(response.count > 0);
        assert_eq!(response.matches[0].mm, "6.5");
    }

    #[tokio::test]
    async fn test_match_handler_invalid_length() {
        let query = MatchQuery {
            length: "-5".to_string(),
            width: Some("3".to_string()),
        };
        let response = match_handler(Query(query)).await;
        assert!(response.length.is_none());
        assert_eq!(response.count, 0);
    }

    #[tokio::test]
    async fn test_shapes_handler() {
        let response = shapes_handler().await;
        assert_eq!(response.shapes.len(), 10);
        assert_eq!(response.shapes[0].name, "Round Brilliant");
    }

    #[tokio::test]
    async fn test_closest_handler() {
        let response = closest_handler(
            Path("Oval".to_string()),
            Query(ClosestQuery { carat: 1.1 }),
        )
        .await
        .unwrap();
        assert_eq!(response.linear_mm, "7.7x5.7");
    }

    #[tokio::test]
    async fn test_closest_handler_errors() {
        let result = closest_handler(
            Path("trillion".to_string()),
            Query(ClosestQuery { carat: 1.0 }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result =
            closest_handler(Path("round".to_string()), Query(ClosestQuery { carat: 0.0 })).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_geometry_handler() {
        let query = GeometryQuery {
            mm: "1x1".to_string(),
            carat: Some(0.0),
        };
        let response = geometry_handler(Query(query)).await;
        assert_eq!(response.face_up_area, "0.8");
        assert_eq!(response.overlay_scale, 10.0);
        assert_eq!(response.visual_scale, Some(60.0));
    }

    #[tokio::test]
    async fn test_rate_and_convert_handlers() {
        let state = test_state(0.5);

        let response = rate_handler(State(state.clone())).await;
        assert_eq!(response.rate, 0.5);

        let response = convert_handler(State(state), Query(ConvertQuery { amount: 25.0 }))
            .await
            .unwrap();
        assert_eq!(response.amount_usd, 12.5);
        assert_eq!(response.formatted, "$12.50");
    }

    #[tokio::test]
    async fn test_invalidate_and_stats_handlers() {
        let state = test_state(0.5);

        rate_handler(State(state.clone())).await;
        invalidate_rate_handler(State(state.clone())).await;
        rate_handler(State(state.clone())).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.rate_cache.fetches, 2);
        assert_eq!(response.rate_cache.invalidations, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
