//! API Module
//!
//! HTTP handlers and routing for the gemdesk REST API.
//!
//! # Endpoints
//! - `GET /diamonds/match` - Rank reference sizes near a measurement
//! - `GET /diamonds/shapes` - List shapes
//! - `GET /diamonds/shapes/:shape/closest` - Nearest standard size by carat
//! - `GET /diamonds/geometry` - Presentation geometry for a measurement
//! - `GET /rates/inr-usd`, `GET /rates/convert`, `POST /rates/invalidate`
//! - `GET /stats` - Rate cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
