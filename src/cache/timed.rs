//! Timed Cache Module
//!
//! Memoizes a single upstream value for a fixed TTL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::error::FetchResult;

// == Fetcher Trait ==
/// Upstream operation that produces a fresh value for a cache.
#[async_trait]
pub trait Fetcher<T>: Send + Sync {
    async fn fetch(&self) -> FetchResult<T>;
}

#[derive(Debug)]
struct State<T> {
    entry: CacheEntry<T>,
    stats: CacheStats,
}

// == Timed Cache ==
/// Single-value cache with a TTL, an injected fetch operation and an
/// injected clock.
///
/// The lock is held only to check freshness and to store a result, never
/// while the fetch is in flight. Two consequences follow and are accepted:
/// concurrent stale reads may each fetch, and a fetch that started before
/// [`invalidate`](Self::invalidate) may still repopulate the cache after it
/// (last write wins).
pub struct TimedCache<T> {
    name: &'static str,
    ttl: Duration,
    fetcher: Arc<dyn Fetcher<T>>,
    clock: Arc<dyn Clock>,
    state: RwLock<State<T>>,
}

impl<T> TimedCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// # Arguments
    /// * `name` - Label used in log lines
    /// * `ttl` - How long a fetched value stays fresh
    /// * `fetcher` - Upstream source of values
    pub fn new(name: &'static str, ttl: Duration, fetcher: Arc<dyn Fetcher<T>>) -> Self {
        Self::with_clock(name, ttl, fetcher, Arc::new(SystemClock))
    }

    /// Creates a cache on a caller-supplied clock.
    pub fn with_clock(
        name: &'static str,
        ttl: Duration,
        fetcher: Arc<dyn Fetcher<T>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name,
            ttl,
            fetcher,
            clock,
            state: RwLock::new(State {
                entry: CacheEntry::empty(),
                stats: CacheStats::new(),
            }),
        }
    }

    // == Get ==
    /// Returns the cached value if fresh, otherwise fetches and stores a new one.
    ///
    /// A failed fetch leaves the previous entry in place and returns the error.
    pub async fn get(&self) -> FetchResult<T> {
        {
            // Write lock: a hit still updates stats
            let mut state = self.state.write().await;
            let now = self.clock.now_ms();
            if let Some(value) = state.entry.fresh_value(now, self.ttl_ms()) {
                let value = value.clone();
                state.stats.record_hit();
                debug!(cache = self.name, "Serving cached value");
                return Ok(value);
            }
            state.stats.record_miss();
        }

        debug!(cache = self.name, "Cached value missing or stale, fetching");
        let fetched = self.fetcher.fetch().await;

        let mut state = self.state.write().await;
        match fetched {
            Ok(value) => {
                let now = self.clock.now_ms();
                state.entry.store(value.clone(), now);
                state.stats.record_fetch();
                Ok(value)
            }
            Err(e) => {
                state.stats.record_fetch_failure();
                warn!(cache = self.name, error = %e, "Upstream fetch failed");
                Err(e)
            }
        }
    }

    // == Peek ==
    /// Returns the value only if it is fresh; never fetches.
    pub async fn peek(&self) -> Option<T> {
        let state = self.state.read().await;
        state
            .entry
            .fresh_value(self.clock.now_ms(), self.ttl_ms())
            .cloned()
    }

    // == Invalidate ==
    /// Drops the cached value so the next [`get`](Self::get) refetches.
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.entry.clear();
        state.stats.record_invalidation();
        info!(cache = self.name, "Cache invalidated");
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.state.read().await.stats.clone()
    }

    // == Age ==
    /// Milliseconds since the current value was fetched, if any.
    pub async fn age_ms(&self) -> Option<u64> {
        self.state.read().await.entry.age_ms(self.clock.now_ms())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn ttl_ms(&self) -> u64 {
        u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX)
    }
}
