//! Upstream-backed caches
//!
//! The two timed-cache instances the desk relies on:
//! - Identity: current signed-in user, 30 second TTL, failures read as signed out
//! - Rate: INR→USD exchange rate, one hour TTL, failures fall back to 0.012

mod identity;
mod rate;

pub use identity::{Identity, IdentityCache, IdentitySource, IDENTITY_TTL};
pub use rate::{format_usd, HttpRateSource, RateCache, RATE_TTL};
