//! Currency Rate Cache
//!
//! Caches the INR→USD exchange rate for an hour and falls back to a fixed
//! approximate rate whenever the upstream cannot be reached.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::cache::{CacheStats, Clock, Fetcher, SystemClock, TimedCache};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};

/// Default rate TTL.
pub const RATE_TTL: Duration = Duration::from_secs(3600);

/// Currency the rate is quoted in.
const TARGET_CURRENCY: &str = "USD";

// == Wire Format ==
#[derive(Debug, Deserialize)]
struct RatesBody {
    #[serde(default)]
    rates: HashMap<String, serde_json::Value>,
}

/// Extracts `rates.USD` from an exchange-rate response body.
fn extract_rate(body: &[u8]) -> FetchResult<f64> {
    let parsed: RatesBody = serde_json::from_slice(body)
        .map_err(|e| FetchError::Upstream(format!("invalid rates body: {}", e)))?;

    parsed
        .rates
        .get(TARGET_CURRENCY)
        .and_then(serde_json::Value::as_f64)
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .ok_or_else(|| FetchError::MissingField(format!("rates.{}", TARGET_CURRENCY)))
}

// == HTTP Rate Source ==
/// Fetches the rate from an exchange-rate HTTP endpoint.
pub struct HttpRateSource {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRateSource {
    /// Creates a source for `endpoint` with a request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Fetcher<f64> for HttpRateSource {
    async fn fetch(&self) -> FetchResult<f64> {
        let response = self.http.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        extract_rate(&body)
    }
}

// == Rate Cache ==
/// Cached INR→USD rate that never fails.
pub struct RateCache {
    inner: TimedCache<f64>,
    fallback_rate: f64,
}

impl RateCache {
    /// Creates a rate cache on the system clock.
    pub fn new(source: Arc<dyn Fetcher<f64>>, ttl: Duration, fallback_rate: f64) -> Self {
        Self::with_clock(source, ttl, fallback_rate, Arc::new(SystemClock))
    }

    pub fn with_clock(
        source: Arc<dyn Fetcher<f64>>,
        ttl: Duration,
        fallback_rate: f64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: TimedCache::with_clock("inr_usd_rate", ttl, source, clock),
            fallback_rate,
        }
    }

    /// Builds the HTTP-backed rate cache described by `config`.
    pub fn from_config(config: &Config) -> FetchResult<Self> {
        let source = HttpRateSource::new(
            config.rate_endpoint.clone(),
            Duration::from_secs(config.rate_timeout),
        )?;
        Ok(Self::new(
            Arc::new(source),
            Duration::from_secs(config.rate_ttl),
            config.fallback_rate,
        ))
    }

    // == Get ==
    /// Returns the current rate, or the fallback rate if it cannot be fetched.
    ///
    /// The fallback is not cached, so the next call retries upstream.
    pub async fn get(&self) -> f64 {
        match self.inner.get().await {
            Ok(rate) => rate,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = self.fallback_rate,
                    "Using fallback INR to USD rate"
                );
                self.fallback_rate
            }
        }
    }

    // == Convert ==
    /// Converts an INR amount to USD at the current rate.
    pub async fn convert_inr_to_usd(&self, amount_inr: f64) -> f64 {
        amount_inr * self.get().await
    }

    pub async fn invalidate(&self) {
        self.inner.invalidate().await;
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.stats().await
    }

    pub fn fallback_rate(&self) -> f64 {
        self.fallback_rate
    }
}

// == Formatting ==
/// Formats a USD amount as `$1234.50`.
///
/// Amounts that round to zero cents print without a sign.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if cents < 0.0 {
        format!("-${:.2}", -cents / 100.0)
    } else {
        format!("${:.2}", cents.abs() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Serves a fixed body as if it came from the endpoint.
    struct BodySource {
        body: &'static str,
        calls: AtomicU64,
    }

    #[async_trait]
    impl Fetcher<f64> for BodySource {
        async fn fetch(&self) -> FetchResult<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            extract_rate(self.body.as_bytes())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl Fetcher<f64> for FailingSource {
        async fn fetch(&self) -> FetchResult<f64> {
            Err(FetchError::Status(502))
        }
    }

    fn body_source(body: &'static str) -> Arc<BodySource> {
        Arc::new(BodySource {
            body,
            calls: AtomicU64::new(0),
        })
    }

    #[test]
    fn test_extract_rate() {
        let body = br#"{"base":"INR","rates":{"USD":0.0119,"EUR":0.011}}"#;
        assert_eq!(extract_rate(body).unwrap(), 0.0119);
    }

    #[test]
    fn test_extract_rate_missing_field() {
        let err = extract_rate(br#"{"rates":{"EUR":0.011}}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingField(_)));

        let err = extract_rate(br#"{"result":"error"}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingField(_)));

        let err = extract_rate(br#"{"rates":{"USD":"n/a"}}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingField(_)));
    }

    #[test]
    fn test_extract_rate_invalid_json() {
        let err = extract_rate(b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_rate_cached_for_ttl() {
        let source = body_source(r#"{"rates":{"USD":0.0125}}"#);
        let clock = Arc::new(ManualClock::new(0));
        let cache = RateCache::with_clock(source.clone(), RATE_TTL, 0.012, clock.clone());

        assert_eq!(cache.get().await, 0.0125);
        clock.advance(Duration::from_secs(3599));
        assert_eq!(cache.get().await, 0.0125);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_secs(1));
        cache.get().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back() {
        let cache = RateCache::new(Arc::new(FailingSource), RATE_TTL, 0.012);
        assert_eq!(cache.get().await, 0.012);
        assert_eq!(cache.stats().await.fetch_failures, 1);
    }

    #[tokio::test]
    async fn test_missing_usd_falls_back() {
        let source = body_source(r#"{"rates":{"EUR":0.011}}"#);
        let cache = RateCache::new(source.clone(), RATE_TTL, 0.012);

        assert_eq!(cache.get().await, 0.012);
        // Fallback is not cached
        assert_eq!(cache.get().await, 0.012);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_convert_inr_to_usd() {
        let cache = RateCache::new(body_source(r#"{"rates":{"USD":0.5}}"#), RATE_TTL, 0.012);
        assert_eq!(cache.convert_inr_to_usd(1000.0).await, 500.0);
    }

    #[tokio::test]
    async fn test_invalidate_refetches() {
        let source = body_source(r#"{"rates":{"USD":0.0125}}"#);
        let cache = RateCache::new(source.clone(), RATE_TTL, 0.012);

        cache.get().await;
        cache.invalidate().await;
        cache.get().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_http_source_endpoint() {
        let source =
            HttpRateSource::new("http://localhost:9/rates", Duration::from_secs(1)).unwrap();
        assert_eq!(source.endpoint(), "http://localhost:9/rates");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        // Port 9 (discard) is closed on test machines; connection is refused
        let source =
            HttpRateSource::new("http://127.0.0.1:9/latest/INR", Duration::from_secs(2)).unwrap();
        let cache = RateCache::new(Arc::new(source), RATE_TTL, 0.012);
        assert_eq!(cache.get().await, 0.012);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12.0), "$12.00");
        assert_eq!(format_usd(1234.5), "$1234.50");
        assert_eq!(format_usd(0.004), "$0.00");
        assert_eq!(format_usd(-3.25), "-$3.25");
    }

    #[test]
    fn test_format_usd_sub_cent_negative_has_no_sign() {
        assert_eq!(format_usd(-0.004), "$0.00");
        assert_eq!(format_usd(-0.0), "$0.00");
        assert_eq!(format_usd(-0.005), "-$0.01");
    }
}
