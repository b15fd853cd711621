//! Caching layer for station searches.
//!
//! Journeys in one run often share endpoints, and every session resolves
//! both of its stations again. Search results are cached by query name so
//! a repeated name costs one request per run. Connection listings and
//! offers are never cached.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::booking::{AuthToken, BookingApi, BookingError, ConnectionPage, OfferRequest, StationRecord};
use crate::domain::EvaNumber;

/// Cached search result.
type StationEntry = Arc<Vec<StationRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 256,
        }
    }
}

/// Cache for station search results, keyed by trimmed query name.
pub struct StationCache {
    stations: MokaCache<String, StationEntry>,
}

impl StationCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let stations = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { stations }
    }

    fn key(name: &str) -> String {
        name.trim().to_string()
    }

    pub async fn get(&self, name: &str) -> Option<StationEntry> {
        self.stations.get(&Self::key(name)).await
    }

    pub async fn insert(&self, name: &str, entry: StationEntry) {
        self.stations.insert(Self::key(name), entry).await;
    }

    pub fn invalidate_all(&self) {
        self.stations.invalidate_all();
    }
}

/// Booking backend with cached station searches.
///
/// Everything except [`find_stations`](BookingApi::find_stations) goes
/// straight to the wrapped backend. Failed searches are not cached.
pub struct CachedBookingApi<A> {
    inner: A,
    cache: StationCache,
}

impl<A: BookingApi> CachedBookingApi<A> {
    pub fn new(inner: A, cache_config: &CacheConfig) -> Self {
        Self {
            inner,
            cache: StationCache::new(cache_config),
        }
    }

    /// Access the wrapped backend.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn cache(&self) -> &StationCache {
        &self.cache
    }
}

impl<A: BookingApi> BookingApi for CachedBookingApi<A> {
    async fn start_session(&self) -> Result<AuthToken, BookingError> {
        self.inner.start_session().await
    }

    async fn find_stations(
        &self,
        token: &AuthToken,
        name: &str,
    ) -> Result<Vec<StationRecord>, BookingError> {
        if let Some(cached) = self.cache.get(name).await {
            debug!(query = name, "station search served from cache");
            return Ok(cached.as_ref().clone());
        }

        let records = self.inner.find_stations(token, name).await?;
        self.cache.insert(name, Arc::new(records.clone())).await;

        Ok(records)
    }

    async fn get_connections(
        &self,
        token: &AuthToken,
        from: EvaNumber,
        to: EvaNumber,
        date: NaiveDate,
        skip: usize,
    ) -> Result<ConnectionPage, BookingError> {
        self.inner
            .get_connections(token, from, to, date, skip)
            .await
    }

    async fn get_offers(
        &self,
        token: &AuthToken,
        request: &OfferRequest,
    ) -> Result<serde_json::Value, BookingError> {
        self.inner.get_offers(token, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Numeric;
    use std::sync::Mutex;

    /// Counts searches and fails those for "broken".
    #[derive(Default)]
    struct CountingApi {
        searches: Mutex<Vec<String>>,
    }

    impl BookingApi for CountingApi {
        async fn start_session(&self) -> Result<AuthToken, BookingError> {
            AuthToken::parse("t")
        }

        async fn find_stations(
            &self,
            _token: &AuthToken,
            name: &str,
        ) -> Result<Vec<StationRecord>, BookingError> {
            self.searches.lock().unwrap().push(name.to_string());
            if name == "broken" {
                return Err(BookingError::RateLimited);
            }
            Ok(vec![StationRecord {
                number: Numeric::Int(1),
                name: name.to_string(),
                meta: None,
            }])
        }

        async fn get_connections(
            &self,
            _token: &AuthToken,
            _from: EvaNumber,
            _to: EvaNumber,
            _date: NaiveDate,
            _skip: usize,
        ) -> Result<ConnectionPage, BookingError> {
            Ok(ConnectionPage::default())
        }

        async fn get_offers(
            &self,
            _token: &AuthToken,
            _request: &OfferRequest,
        ) -> Result<serde_json::Value, BookingError> {
            Ok(serde_json::Value::Null)
        }
    }

    fn searches(api: &CachedBookingApi<CountingApi>) -> Vec<String> {
        api.inner().searches.lock().unwrap().clone()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 256);
    }

    #[tokio::test]
    async fn repeated_search_hits_cache() {
        let api = CachedBookingApi::new(CountingApi::default(), &CacheConfig::default());
        let token = api.start_session().await.unwrap();

        let first = api.find_stations(&token, "Wien").await.unwrap();
        let second = api.find_stations(&token, " Wien ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(searches(&api), ["Wien"]);
    }

    #[tokio::test]
    async fn different_names_are_cached_separately() {
        let api = CachedBookingApi::new(CountingApi::default(), &CacheConfig::default());
        let token = api.start_session().await.unwrap();

        api.find_stations(&token, "Wien").await.unwrap();
        api.find_stations(&token, "München").await.unwrap();
        api.find_stations(&token, "Wien").await.unwrap();

        assert_eq!(searches(&api), ["Wien", "München"]);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let api = CachedBookingApi::new(CountingApi::default(), &CacheConfig::default());
        let token = api.start_session().await.unwrap();

        assert!(api.find_stations(&token, "broken").await.is_err());
        assert!(api.find_stations(&token, "broken").await.is_err());

        assert_eq!(searches(&api), ["broken", "broken"]);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let api = CachedBookingApi::new(CountingApi::default(), &CacheConfig::default());
        let token = api.start_session().await.unwrap();

        api.find_stations(&token, "Wien").await.unwrap();
        api.cache().invalidate_all();
        api.find_stations(&token, "Wien").await.unwrap();

        assert_eq!(searches(&api), ["Wien", "Wien"]);
    }
}
