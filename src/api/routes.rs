//! API Routes
//!
//! Configures the Axum router with all gemdesk endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    closest_handler, convert_handler, geometry_handler, health_handler, invalidate_rate_handler,
    match_handler, rate_handler, shapes_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /diamonds/match` - Rank reference sizes near a measurement
/// - `GET /diamonds/shapes` - List shapes in the reference table
/// - `GET /diamonds/shapes/:shape/closest` - Nearest standard size by carat
/// - `GET /diamonds/geometry` - Overlay scale, face-up area, visual scale
/// - `GET /rates/inr-usd` - Current INR→USD rate
/// - `GET /rates/convert` - Convert an INR amount to USD
/// - `POST /rates/invalidate` - Drop the cached rate
/// - `GET /stats` - Rate cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/diamonds/match", get(match_handler))
        .route("/diamonds/shapes", get(shapes_handler))
        .route("/diamonds/shapes/:shape/closest", get(closest_handler))
        .route("/diamonds/geometry", get(geometry_handler))
        .route("/rates/inr-usd", get(rate_handler))
        .route("/rates/convert", get(convert_handler))
        .route("/rates/invalidate", post(invalidate_rate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
