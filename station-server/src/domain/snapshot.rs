//! Immutable station snapshots.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::{DomainError, Station, StationId};

/// One consistent view of the whole station inventory.
///
/// Stations keep the order the inventory source produced them in. Ids are
/// unique within a snapshot. A snapshot is never mutated; a refresh builds
/// a new one and swaps it in.
#[derive(Debug, Clone)]
pub struct StationSet {
    stations: Vec<Station>,
    version: u64,
    fetched_at: DateTime<Utc>,
}

impl StationSet {
    /// Build a snapshot, rejecting duplicate station ids.
    pub fn new(
        stations: Vec<Station>,
        version: u64,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station.id) {
                return Err(DomainError::DuplicateStationId(station.id));
            }
        }

        Ok(Self {
            stations,
            version,
            fetched_at,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Monotonic version assigned by the registry that built this snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
