//! Cache Entry Module
//!
//! Holds a single cached value together with the time it was fetched.

// == Cache Entry ==
/// A value slot that is either empty or filled at a known time.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value, `None` until the first successful fetch
    pub value: Option<T>,
    /// Fetch timestamp (milliseconds on the cache's clock)
    pub fetched_at: Option<u64>,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
        }
    }
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an empty entry.
    pub fn empty() -> Self {
        Self::default()
    }

    // == Store ==
    /// Replaces the value and stamps it with `now_ms`.
    pub fn store(&mut self, value: T, now_ms: u64) {
        self.value = Some(value);
        self.fetched_at = Some(now_ms);
    }

    // == Clear ==
    /// Empties the slot.
    pub fn clear(&mut self) {
        self.value = None;
        self.fetched_at = None;
    }

    // == Is Fresh ==
    /// Checks whether the entry holds a value younger than `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale. A
    /// clock that moved backwards counts as age zero.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        match (&self.value, self.fetched_at) {
            (Some(_), Some(fetched_at)) => now_ms.saturating_sub(fetched_at) < ttl_ms,
            _ => false,
        }
    }

    // == Fresh Value ==
    /// Returns the value if it is still fresh.
    pub fn fresh_value(&self, now_ms: u64, ttl_ms: u64) -> Option<&T> {
        if self.is_fresh(now_ms, ttl_ms) {
            self.value.as_ref()
        } else {
            None
        }
    }

    // == Age ==
    /// Milliseconds since the value was fetched, or `None` when empty.
    pub fn age_ms(&self, now_ms: u64) -> Option<u64> {
        self.fetched_at.map(|fetched_at| now_ms.saturating_sub(fetched_at))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_is_stale() {
        let entry: CacheEntry<f64> = CacheEntry::empty();
        assert!(!entry.is_fresh(0, 1_000));
        assert!(entry.fresh_value(0, 1_000).is_none());
        assert!(entry.age_ms(0).is_none());
    }

    #[test]
    fn test_store_and_fresh_value() {
        let mut entry = CacheEntry::empty();
        entry.store(0.012, 10_000);

        assert_eq!(entry.fresh_value(10_500, 1_000), Some(&0.012));
        assert_eq!(entry.age_ms(10_500), Some(500));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let mut entry = CacheEntry::empty();
        entry.store("user-1".to_string(), 1_000);

        assert!(entry.is_fresh(1_999, 1_000));
        assert!(!entry.is_fresh(2_000, 1_000), "Entry should be stale at boundary");
    }

    #[test]
    fn test_clock_moving_backwards_counts_as_fresh() {
        let mut entry = CacheEntry::empty();
        entry.store(1u8, 5_000);
        assert!(entry.is_fresh(4_000, 1_000));
        assert_eq!(entry.age_ms(4_000), Some(0));
    }

    #[test]
    fn test_clear() {
        let mut entry = CacheEntry::empty();
        entry.store(1u8, 0);
        entry.clear();

        assert!(entry.value.is_none());
        assert!(entry.fetched_at.is_none());
        assert!(!entry.is_fresh(0, 1_000));
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        let mut entry = CacheEntry::empty();
        entry.store(1u8, 0);
        assert!(!entry.is_fresh(0, 0));
    }
}
