//! gemdesk - diamond size matching and cached lookups for the vendor desk
//!
//! Provides the shape reference table with mm/carat matching, presentation
//! geometry, and TTL caches for the signed-in identity and the INR→USD rate.

pub mod api;
pub mod cache;
pub mod config;
pub mod diamond;
pub mod error;
pub mod models;
pub mod sources;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_invalidation_task, SessionEvent};
