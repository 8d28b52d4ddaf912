//! Stations that need attention.

use crate::domain::Station;
use crate::zones::percentage;

/// Why a station was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Empty,
    Maintenance,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Empty => "empty",
            AlertKind::Maintenance => "maintenance",
        }
    }
}

/// A flagged station.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityAlert<'a> {
    pub station: &'a Station,
    pub kind: AlertKind,
}

/// The first `limit` stations, in collection order, that are empty or in
/// maintenance. An empty station in maintenance is reported as empty.
pub fn priority_alerts(stations: &[Station], limit: usize) -> Vec<PriorityAlert<'_>> {
    stations
        .iter()
        .filter_map(|station| {
            let kind = if station.is_empty() {
                AlertKind::Empty
            } else if station.in_maintenance() {
                AlertKind::Maintenance
            } else {
                return None;
            };
            Some(PriorityAlert { station, kind })
        })
        .take(limit)
        .collect()
}

/// A station short on bikes.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalanceCandidate<'a> {
    pub station: &'a Station,
    /// Rounded fill level, 0-100.
    pub capacity_percent: u32,
}

/// The `limit` stations with the lowest fill ratio. Ties keep collection
/// order.
pub fn rebalancing_candidates(stations: &[Station], limit: usize) -> Vec<RebalanceCandidate<'_>> {
    let mut ranked: Vec<&Station> = stations.iter().collect();
    ranked.sort_by(|a, b| {
        a.occupancy
            .fill_ratio()
            .total_cmp(&b.occupancy.fill_ratio())
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|station| RebalanceCandidate {
            station,
            capacity_percent: percentage(
                u64::from(station.bikes()),
                u64::from(station.docks()),
            ),
        })
        .collect()
}
