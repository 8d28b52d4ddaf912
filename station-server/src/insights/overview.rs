//! Fleet-wide headline numbers.

use crate::domain::Station;

/// Totals across the whole fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetOverview {
    pub total_stations: usize,
    pub active_stations: usize,
    pub maintenance_stations: usize,
    pub total_bikes: u64,
    pub total_docks: u64,
    /// Stations with no bikes, regardless of status.
    pub empty_stations: usize,
    /// Stations with every dock occupied, regardless of status.
    pub full_stations: usize,
}

impl FleetOverview {
    pub fn compute(stations: &[Station]) -> Self {
        stations.iter().fold(Self::default(), |mut acc, s| {
            acc.total_stations += 1;
            if s.is_active() {
                acc.active_stations += 1;
            } else {
                acc.maintenance_stations += 1;
            }
            acc.total_bikes += u64::from(s.bikes());
            acc.total_docks += u64::from(s.docks());
            if s.is_empty() {
                acc.empty_stations += 1;
            }
            if s.is_full() {
                acc.full_stations += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{abc, station};

    #[test]
    fn overview_of_example_collection() {
        let overview = FleetOverview::compute(&abc());
        assert_eq!(
            overview,
            FleetOverview {
                total_stations: 3,
                active_stations: 3,
                maintenance_stations: 0,
                total_bikes: 15,
                total_docks: 30,
                empty_stations: 1,
                full_stations: 1,
            }
        );
    }

    #[test]
    fn maintenance_counted_separately() {
        let stations = vec![station(1).build(), station(2).maintenance().build()];
        let overview = FleetOverview::compute(&stations);
        assert_eq!(overview.active_stations, 1);
        assert_eq!(overview.maintenance_stations, 1);
    }

    #[test]
    fn empty_fleet() {
        assert_eq!(FleetOverview::compute(&[]), FleetOverview::default());
    }
}
