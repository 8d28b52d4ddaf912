//! Per-zone aggregates.
//!
//! Summaries are derived on demand from a station collection and have no
//! lifecycle of their own.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::{Station, Zone};
use crate::query::{InvalidQueryState, SortDirection};

/// Aggregated statistics for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSummary {
    pub zone: Zone,
    pub station_count: usize,
    pub total_bikes: u64,
    pub total_docks: u64,
    /// `round(total_bikes / total_docks * 100)`, or 0 for a zone with no docks.
    pub bike_availability: u32,
    /// Mean ride count per station, rounded.
    pub average_usage: u32,
    pub maintenance_count: usize,
}

#[derive(Default)]
struct ZoneTotals {
    station_count: usize,
    total_bikes: u64,
    total_docks: u64,
    total_usage: u64,
    maintenance_count: usize,
}

/// Summarize every zone present in the collection.
///
/// Zones with no stations are omitted. Summaries come back in `Zone`
/// declaration order; use [`sort_summaries`] for anything else.
pub fn summarize(stations: &[Station]) -> Vec<ZoneSummary> {
    let mut totals: BTreeMap<Zone, ZoneTotals> = BTreeMap::new();

    for station in stations {
        let t = totals.entry(station.zone).or_default();
        t.station_count += 1;
        t.total_bikes += u64::from(station.bikes());
        t.total_docks += u64::from(station.docks());
        t.total_usage += u64::from(station.usage);
        if station.in_maintenance() {
            t.maintenance_count += 1;
        }
    }

    totals
        .into_iter()
        .map(|(zone, t)| ZoneSummary {
            zone,
            station_count: t.station_count,
            total_bikes: t.total_bikes,
            total_docks: t.total_docks,
            bike_availability: percentage(t.total_bikes, t.total_docks),
            average_usage: (t.total_usage as f64 / t.station_count as f64).round() as u32,
            maintenance_count: t.maintenance_count,
        })
        .collect()
}

/// `round(part / whole * 100)`, defined as 0 when `whole` is 0.
pub(crate) fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Field zone summaries can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneSortField {
    #[default]
    Zone,
    StationCount,
    Availability,
    Usage,
    Maintenance,
}

impl ZoneSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneSortField::Zone => "zone",
            ZoneSortField::StationCount => "station-count",
            ZoneSortField::Availability => "availability",
            ZoneSortField::Usage => "usage",
            ZoneSortField::Maintenance => "maintenance",
        }
    }
}

impl FromStr for ZoneSortField {
    type Err = InvalidQueryState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zone" => Ok(ZoneSortField::Zone),
            "station-count" => Ok(ZoneSortField::StationCount),
            "availability" => Ok(ZoneSortField::Availability),
            "usage" => Ok(ZoneSortField::Usage),
            "maintenance" => Ok(ZoneSortField::Maintenance),
            other => Err(InvalidQueryState::UnknownSortField(other.to_string())),
        }
    }
}

/// Stable sort of zone summaries.
pub fn sort_summaries(
    summaries: &mut [ZoneSummary],
    field: ZoneSortField,
    direction: SortDirection,
) {
    summaries.sort_by(|a, b| direction.apply(compare_by(field, a, b)));
}

fn compare_by(field: ZoneSortField, a: &ZoneSummary, b: &ZoneSummary) -> Ordering {
    match field {
        ZoneSortField::Zone => a.zone.as_str().cmp(b.zone.as_str()),
        ZoneSortField::StationCount => a.station_count.cmp(&b.station_count),
        ZoneSortField::Availability => a.bike_availability.cmp(&b.bike_availability),
        ZoneSortField::Usage => a.average_usage.cmp(&b.average_usage),
        ZoneSortField::Maintenance => a.maintenance_count.cmp(&b.maintenance_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{abc, station};

    #[test]
    fn summarize_example_collection() {
        let summaries = summarize(&abc());
        assert_eq!(summaries.len(), 2);

        let north = &summaries[0];
        assert_eq!(north.zone, Zone::North);
        assert_eq!(north.station_count, 2);
        assert_eq!(north.total_bikes, 5);
        assert_eq!(north.total_docks, 20);
        assert_eq!(north.bike_availability, 25);

        let south = &summaries[1];
        assert_eq!(south.zone, Zone::South);
        assert_eq!(south.station_count, 1);
        assert_eq!(south.total_bikes, 10);
        assert_eq!(south.total_docks, 10);
        assert_eq!(south.bike_availability, 100);
    }

    #[test]
    fn zero_docks_means_zero_availability() {
        let stations = vec![station(1).zone(Zone::East).bikes(0, 0).build()];
        let summaries = summarize(&stations);
        assert_eq!(summaries[0].bike_availability, 0);
    }

    #[test]
    fn average_usage_and_maintenance() {
        let stations = vec![
            station(1).zone(Zone::West).usage(100).build(),
            station(2).zone(Zone::West).usage(201).maintenance().build(),
        ];
        let summary = &summarize(&stations)[0];
        // 150.5 rounds up
        assert_eq!(summary.average_usage, 151);
        assert_eq!(summary.maintenance_count, 1);
    }

    #[test]
    fn empty_collection_has_no_zones() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn sort_by_station_count_desc() {
        let stations = vec![
            station(1).zone(Zone::South).build(),
            station(2).zone(Zone::North).build(),
            station(3).zone(Zone::North).build(),
            station(4).zone(Zone::East).build(),
        ];
        let mut summaries = summarize(&stations);
        sort_summaries(&mut summaries, ZoneSortField::StationCount, SortDirection::Desc);

        let zones: Vec<Zone> = summaries.iter().map(|s| s.zone).collect();
        // South and East tie at 1 and keep declaration order
        assert_eq!(zones, vec![Zone::North, Zone::South, Zone::East]);
    }

    #[test]
    fn parse_sort_field() {
        assert_eq!(
            "station-count".parse::<ZoneSortField>().unwrap(),
            ZoneSortField::StationCount
        );
        assert!("count".parse::<ZoneSortField>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::stations_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Station counts across zones add up to the collection size
        #[test]
        fn zone_counts_sum_to_total(stations in stations_strategy(40)) {
            let total: usize = summarize(&stations).iter().map(|z| z.station_count).sum();
            prop_assert_eq!(total, stations.len());
        }

        /// Availability is a percentage
        #[test]
        fn availability_bounded(stations in stations_strategy(40)) {
            for summary in summarize(&stations) {
                prop_assert!(summary.bike_availability <= 100);
                prop_assert!(summary.total_bikes <= summary.total_docks);
            }
        }
    }
}
