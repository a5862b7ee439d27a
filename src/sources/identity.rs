//! Identity Cache
//!
//! Short-lived cache of the signed-in user's identity.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::{CacheStats, Clock, Fetcher, SystemClock, TimedCache};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};

/// Default identity TTL.
pub const IDENTITY_TTL: Duration = Duration::from_secs(30);

// == Identity ==
/// The authenticated user as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// == Identity Source ==
/// Looks up the current session's identity.
///
/// The auth backend supplies the implementation; this crate only caches
/// its answers. `Ok(None)` means nobody is signed in.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    async fn current_identity(&self) -> FetchResult<Option<Identity>>;
}

/// Adapts an [`IdentitySource`] to a cache fetcher. A missing session is
/// reported as an error so it is never cached.
struct SessionFetcher {
    source: Arc<dyn IdentitySource>,
}

#[async_trait]
impl Fetcher<Identity> for SessionFetcher {
    async fn fetch(&self) -> FetchResult<Identity> {
        self.source
            .current_identity()
            .await?
            .ok_or(FetchError::NoSession)
    }
}

// == Identity Cache ==
/// Cached identity lookups; failures read as "not signed in".
pub struct IdentityCache {
    inner: TimedCache<Identity>,
}

impl IdentityCache {
    /// Creates an identity cache on the system clock.
    pub fn new(source: Arc<dyn IdentitySource>, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, Arc::new(SystemClock))
    }

    /// Creates an identity cache with the configured TTL.
    pub fn from_config(source: Arc<dyn IdentitySource>, config: &Config) -> Self {
        Self::new(source, Duration::from_secs(config.identity_ttl))
    }

    pub fn with_clock(
        source: Arc<dyn IdentitySource>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let fetcher: Arc<dyn Fetcher<Identity>> = Arc::new(SessionFetcher { source });
        Self {
            inner: TimedCache::with_clock("identity", ttl, fetcher, clock),
        }
    }

    // == Get ==
    /// Returns the current identity, or `None` when signed out or when the
    /// lookup fails.
    pub async fn get(&self) -> Option<Identity> {
        match self.inner.get().await {
            Ok(identity) => Some(identity),
            Err(FetchError::NoSession) => {
                debug!("No active session");
                None
            }
            Err(e) => {
                warn!(error = %e, "Identity lookup failed, treating as signed out");
                None
            }
        }
    }

    /// Forgets the cached identity, e.g. on sign-in or sign-out.
    pub async fn invalidate(&self) {
        self.inner.invalidate().await;
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.stats().await
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl()
    }
}
