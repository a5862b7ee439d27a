//! Cache Statistics Module
//!
//! Tracks how often a cache served from memory versus went upstream.

use serde::Serialize;

// == Cache Stats ==
/// Counters for a single timed cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads served from a fresh value
    pub hits: u64,
    /// Reads that found no fresh value
    pub misses: u64,
    /// Successful upstream fetches
    pub fetches: u64,
    /// Failed upstream fetches
    pub fetch_failures: u64,
    /// Explicit invalidations
    pub invalidations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_fetch(&mut self) {
        self.fetches += 1;
    }

    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }
}
