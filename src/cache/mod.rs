//! Cache Module
//!
//! Single-value caches with TTL expiration, an injected clock and an
//! injected upstream fetch.

mod clock;
mod entry;
mod stats;
mod timed;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use timed::{Fetcher, TimedCache};
