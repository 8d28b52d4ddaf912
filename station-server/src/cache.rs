//! Caching layer for station query results.
//!
//! Results are keyed by the snapshot version as well as the query, so an
//! entry can never be served against a snapshot it was not computed from.
//! The registry still clears the cache on every swap to free memory early.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationSet;
use crate::query::{QueryResult, QueryState, query};

/// Cache key: (snapshot version, query).
type QueryKey = (u64, QueryState);

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
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for query results.
pub struct QueryCache {
    results: MokaCache<QueryKey, Arc<QueryResult>>,
}

impl QueryCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let results = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { results }
    }

    /// Answer a query from the cache, computing it on a miss.
    pub async fn get_or_query(&self, snapshot: &StationSet, state: &QueryState) -> Arc<QueryResult> {
        let key = (snapshot.version(), state.clone());
        self.results
            .get_with(key, async { Arc::new(query(snapshot.stations(), state)) })
            .await
    }

    /// Look up a cached result without computing it.
    #[cfg(test)]
    pub async fn get(&self, version: u64, state: &QueryState) -> Option<Arc<QueryResult>> {
        self.results.get(&(version, state.clone())).await
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
    }
}
