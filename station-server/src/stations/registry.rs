//! The station registry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheConfig, QueryCache};
use crate::domain::{Station, StationId, StationSet};
use crate::query::{QueryResult, QueryState};
use crate::zones::{ZoneSummary, summarize};

use super::convert::convert_stations;
use super::error::StationError;
use super::source::InventorySource;

/// What happened to a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The new snapshot is live.
    Replaced { version: u64, stations: usize },
    /// A newer refresh started first; this result was discarded.
    Superseded,
}

/// A query answer together with the snapshot it was computed from.
#[derive(Debug, Clone)]
pub struct SnapshotQuery {
    pub version: u64,
    pub result: Arc<QueryResult>,
}

/// Thread-safe station registry.
///
/// Owns the current snapshot and answers queries against it. A refresh
/// builds a complete new snapshot and swaps it in with one assignment, so
/// every query sees either the old snapshot or the new one in full.
///
/// Starting a refresh aborts any refresh still in flight, and a result
/// that arrives after a newer refresh started is discarded.
pub struct StationRegistry<S> {
    current: RwLock<Arc<StationSet>>,
    source: S,
    query_cache: QueryCache,
    /// Ticket of the most recently started refresh.
    latest_refresh: AtomicU64,
    in_flight: Mutex<Option<(u64, AbortHandle)>>,
}

impl<S: InventorySource> StationRegistry<S> {
    /// Create a registry around an existing snapshot.
    pub fn new(source: S, initial: StationSet, cache_config: &CacheConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
            source,
            query_cache: QueryCache::new(cache_config),
            latest_refresh: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Create a registry by fetching the first snapshot from the source.
    pub async fn load(source: S, cache_config: &CacheConfig) -> Result<Self, StationError> {
        let dtos = source.fetch_all().await?;
        let initial = StationSet::new(convert_stations(&dtos), 1, Utc::now())?;
        info!(stations = initial.len(), "loaded station snapshot");

        Ok(Self::new(source, initial, cache_config))
    }

    /// The current snapshot.
    ///
    /// Hold on to the returned `Arc` to run several operations against one
    /// consistent view.
    pub async fn snapshot(&self) -> Arc<StationSet> {
        self.current.read().await.clone()
    }

    /// Filter, sort and paginate the current snapshot.
    pub async fn query(&self, state: &QueryState) -> SnapshotQuery {
        let snapshot = self.snapshot().await;
        let result = self.query_cache.get_or_query(&snapshot, state).await;
        SnapshotQuery {
            version: snapshot.version(),
            result,
        }
    }

    /// Zone summaries of the current snapshot.
    pub async fn summarize(&self) -> Vec<ZoneSummary> {
        summarize(self.snapshot().await.stations())
    }

    /// Look up one station in the current snapshot.
    pub async fn get(&self, id: StationId) -> Option<Station> {
        self.snapshot().await.get(id).cloned()
    }

    /// Fetch a new snapshot and swap it in.
    ///
    /// On failure the current snapshot is kept and the error returned.
    pub async fn refresh(&self) -> Result<RefreshOutcome, StationError> {
        let (ticket, registration) = self.begin();
        let outcome = self.fetch_and_swap(ticket, registration).await;
        self.finish(ticket);
        outcome
    }

    /// Take the next ticket and register it as the in-flight refresh,
    /// aborting the one it replaces.
    ///
    /// The ticket is drawn under the in-flight lock so tickets and
    /// registrations happen in the same order.
    fn begin(&self) -> (u64, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let ticket = self.latest_refresh.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((previous, previous_handle)) = in_flight.replace((ticket, handle)) {
            debug!(previous, ticket, "aborting superseded refresh");
            previous_handle.abort();
        }
        (ticket, registration)
    }

    async fn fetch_and_swap(
        &self,
        ticket: u64,
        registration: AbortRegistration,
    ) -> Result<RefreshOutcome, StationError> {
        let Ok(fetched) = Abortable::new(self.source.fetch_all(), registration).await else {
            return Ok(RefreshOutcome::Superseded);
        };
        let dtos = fetched?;
        let stations = convert_stations(&dtos);

        let mut current = self.current.write().await;
        if self.latest_refresh.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "discarding stale refresh result");
            return Ok(RefreshOutcome::Superseded);
        }

        let version = current.version() + 1;
        let next = StationSet::new(stations, version, Utc::now())?;
        let count = next.len();
        *current = Arc::new(next);
        drop(current);

        self.query_cache.invalidate_all();

        info!(version, stations = count, "station snapshot replaced");
        Ok(RefreshOutcome::Replaced {
            version,
            stations: count,
        })
    }

    /// Forget the in-flight handle if it is still ours.
    fn finish(&self, ticket: u64) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if in_flight.as_ref().is_some_and(|(t, _)| *t == ticket) {
            *in_flight = None;
        }
    }
}
