//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, Zone};
use crate::insights::{
    AvailabilityBucket, FleetOverview, PriorityAlert, RebalanceCandidate, StatusDistribution,
};
use crate::query::{InvalidQueryState, PageRequest, QueryResult, QueryState, SortDirection};
use crate::stations::RefreshOutcome;
use crate::zones::{ZoneSortField, ZoneSummary};

/// Default number of alerts or rebalancing candidates.
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Largest alert or rebalancing list a caller may request.
pub const MAX_LIST_LIMIT: usize = 50;

/// Request for a page of stations.
///
/// Every field is optional; missing fields take the query defaults.
#[derive(Debug, Default, Deserialize)]
pub struct StationQueryRequest {
    /// Free-text search over name, address and zone
    pub search: Option<String>,

    /// Exact zone name, e.g. "North"
    pub zone: Option<String>,

    /// all | active | maintenance | empty | full
    pub category: Option<String>,

    /// all | problem | high-usage
    pub view: Option<String>,

    /// name | bikes | usage | zone
    pub sort: Option<String>,

    /// asc | desc
    pub direction: Option<String>,

    /// 1-based page number
    pub page: Option<String>,

    pub page_size: Option<String>,
}

impl StationQueryRequest {
    /// Validate into a query. Unknown values are rejected, not defaulted.
    pub fn to_state(&self) -> Result<QueryState, InvalidQueryState> {
        let defaults = PageRequest::default();
        let mut state = QueryState {
            search: self.search.clone().unwrap_or_default(),
            page: PageRequest::new(
                parse_number("page", &self.page)?.unwrap_or(defaults.page()),
                parse_number("page_size", &self.page_size)?.unwrap_or(defaults.page_size()),
            )?,
            ..QueryState::default()
        };

        if let Some(zone) = non_empty(&self.zone) {
            let zone: Zone = zone
                .parse()
                .map_err(|_| InvalidQueryState::UnknownZone(zone.to_string()))?;
            state.zone = Some(zone);
        }
        if let Some(category) = non_empty(&self.category) {
            state.category = category.parse()?;
        }
        if let Some(view) = non_empty(&self.view) {
            state.view = view.parse()?;
        }
        if let Some(sort) = non_empty(&self.sort) {
            state.sort = sort.parse()?;
        }
        if let Some(direction) = non_empty(&self.direction) {
            state.direction = direction.parse()?;
        }

        Ok(state)
    }
}

/// Treat `?zone=` the same as a missing parameter.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse an optional numeric parameter. Malformed values such as `-1`
/// become `NotANumber`.
fn parse_number<T: std::str::FromStr>(
    parameter: &'static str,
    value: &Option<String>,
) -> Result<Option<T>, InvalidQueryState> {
    non_empty(value)
        .map(|raw| {
            raw.parse().map_err(|_| InvalidQueryState::NotANumber {
                parameter,
                value: raw.to_string(),
            })
        })
        .transpose()
}

/// A station in API responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub zone: String,
    pub bikes: u32,
    pub docks: u32,
    /// Docks with no bike in them
    pub free_docks: u32,
    pub status: String,
    pub usage: u32,
    pub average_duration_mins: u32,
    pub lat: f64,
    pub lng: f64,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
            address: station.address.clone(),
            zone: station.zone.as_str().to_string(),
            bikes: station.bikes(),
            docks: station.docks(),
            free_docks: station.occupancy.free_docks(),
            status: station.status.as_str().to_string(),
            usage: station.usage,
            average_duration_mins: station.average_duration_mins,
            lat: station.location.lat(),
            lng: station.location.lng(),
        }
    }
}

/// Response for a station page.
#[derive(Debug, Serialize)]
pub struct StationPageResponse {
    pub items: Vec<StationResult>,
    /// Stations matching the filters, across all pages
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: u32,
    pub page_size: u32,
    /// Version of the snapshot the page was cut from
    pub snapshot_version: u64,
}

impl StationPageResponse {
    pub fn from_result(result: &QueryResult, snapshot_version: u64) -> Self {
        Self {
            items: result.items.iter().map(StationResult::from_station).collect(),
            total_matches: result.total_matches,
            total_pages: result.total_pages,
            page: result.page,
            page_size: result.page_size,
            snapshot_version,
        }
    }
}

/// Request to order zone summaries.
#[derive(Debug, Default, Deserialize)]
pub struct ZoneQueryRequest {
    /// zone | station-count | availability | usage | maintenance
    pub sort: Option<String>,

    /// asc | desc
    pub direction: Option<String>,
}

impl ZoneQueryRequest {
    pub fn to_order(&self) -> Result<(ZoneSortField, SortDirection), InvalidQueryState> {
        let field = match non_empty(&self.sort) {
            Some(s) => s.parse()?,
            None => ZoneSortField::default(),
        };
        let direction = match non_empty(&self.direction) {
            Some(d) => d.parse()?,
            None => SortDirection::default(),
        };
        Ok((field, direction))
    }
}

/// Summary of one zone.
#[derive(Debug, Serialize)]
pub struct ZoneSummaryResult {
    pub zone: String,
    pub station_count: usize,
    pub total_bikes: u64,
    pub total_docks: u64,
    /// Percentage of docks holding a bike
    pub bike_availability: u32,
    pub average_usage: u32,
    pub maintenance_count: usize,
}

impl From<&ZoneSummary> for ZoneSummaryResult {
    fn from(summary: &ZoneSummary) -> Self {
        Self {
            zone: summary.zone.as_str().to_string(),
            station_count: summary.station_count,
            total_bikes: summary.total_bikes,
            total_docks: summary.total_docks,
            bike_availability: summary.bike_availability,
            average_usage: summary.average_usage,
            maintenance_count: summary.maintenance_count,
        }
    }
}

/// Response for zone summaries.
#[derive(Debug, Serialize)]
pub struct ZonesResponse {
    pub zones: Vec<ZoneSummaryResult>,
}

/// Headline fleet numbers.
#[derive(Debug, Serialize)]
pub struct OverviewResult {
    pub total_stations: usize,
    pub active_stations: usize,
    pub maintenance_stations: usize,
    pub total_bikes: u64,
    pub total_docks: u64,
    pub empty_stations: usize,
    pub full_stations: usize,
}

impl From<&FleetOverview> for OverviewResult {
    fn from(o: &FleetOverview) -> Self {
        Self {
            total_stations: o.total_stations,
            active_stations: o.active_stations,
            maintenance_stations: o.maintenance_stations,
            total_bikes: o.total_bikes,
            total_docks: o.total_docks,
            empty_stations: o.empty_stations,
            full_stations: o.full_stations,
        }
    }
}

/// Station counts by state.
#[derive(Debug, Serialize)]
pub struct StatusDistributionResult {
    pub active: usize,
    pub maintenance: usize,
    pub empty_active: usize,
    pub full_active: usize,
}

impl From<&StatusDistribution> for StatusDistributionResult {
    fn from(d: &StatusDistribution) -> Self {
        Self {
            active: d.active,
            maintenance: d.maintenance,
            empty_active: d.empty_active,
            full_active: d.full_active,
        }
    }
}

/// One bar of the availability histogram.
#[derive(Debug, Serialize)]
pub struct AvailabilityBucketResult {
    /// e.g. "26-50%"
    pub range: &'static str,
    pub stations: usize,
}

impl From<&(AvailabilityBucket, usize)> for AvailabilityBucketResult {
    fn from((bucket, stations): &(AvailabilityBucket, usize)) -> Self {
        Self {
            range: bucket.label(),
            stations: *stations,
        }
    }
}

/// Response for the fleet overview.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub overview: OverviewResult,
    pub status: StatusDistributionResult,
    pub availability: Vec<AvailabilityBucketResult>,
    pub snapshot_version: u64,
    /// RFC 3339 timestamp of the snapshot
    pub fetched_at: String,
}

/// Request carrying a list limit.
#[derive(Debug, Default, Deserialize)]
pub struct LimitRequest {
    pub limit: Option<String>,
}

impl LimitRequest {
    /// The requested limit, defaulted and capped.
    pub fn limit(&self) -> Result<usize, InvalidQueryState> {
        let limit = parse_number("limit", &self.limit)?.unwrap_or(DEFAULT_LIST_LIMIT);
        Ok(limit.min(MAX_LIST_LIMIT))
    }
}

/// A station flagged for attention.
#[derive(Debug, Serialize)]
pub struct AlertResult {
    pub station: StationResult,
    /// "empty" or "maintenance"
    pub kind: &'static str,
}

impl From<&PriorityAlert<'_>> for AlertResult {
    fn from(alert: &PriorityAlert<'_>) -> Self {
        Self {
            station: StationResult::from_station(alert.station),
            kind: alert.kind.as_str(),
        }
    }
}

/// Response for priority alerts.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertResult>,
}

/// A station that should receive bikes.
#[derive(Debug, Serialize)]
pub struct RebalanceResult {
    pub station: StationResult,
    pub capacity_percent: u32,
}

impl From<&RebalanceCandidate<'_>> for RebalanceResult {
    fn from(c: &RebalanceCandidate<'_>) -> Self {
        Self {
            station: StationResult::from_station(c.station),
            capacity_percent: c.capacity_percent,
        }
    }
}

/// Response for rebalancing candidates.
#[derive(Debug, Serialize)]
pub struct RebalancingResponse {
    pub candidates: Vec<RebalanceResult>,
}

/// Response for a manual refresh.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshResponse {
    Replaced { version: u64, stations: usize },
    Superseded,
}

impl From<RefreshOutcome> for RefreshResponse {
    fn from(outcome: RefreshOutcome) -> Self {
        match outcome {
            RefreshOutcome::Replaced { version, stations } => {
                RefreshResponse::Replaced { version, stations }
            }
            RefreshOutcome::Superseded => RefreshResponse::Superseded,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
