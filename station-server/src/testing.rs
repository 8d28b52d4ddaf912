//! Station fixtures shared by unit tests.

use proptest::prelude::*;

use crate::domain::{Coordinates, Occupancy, Station, StationId, StationStatus, Zone};

/// Build a test station with sensible defaults.
pub(crate) fn station(id: u32) -> StationFixture {
    StationFixture {
        id,
        name: format!("Station {id}"),
        address: format!("{id} Main St"),
        zone: Zone::Central,
        bikes: 5,
        docks: 10,
        status: StationStatus::Active,
        usage: 300,
    }
}

pub(crate) struct StationFixture {
    id: u32,
    name: String,
    address: String,
    zone: Zone,
    bikes: u32,
    docks: u32,
    status: StationStatus,
    usage: u32,
}

impl StationFixture {
    pub(crate) fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub(crate) fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub(crate) fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub(crate) fn bikes(mut self, bikes: u32, docks: u32) -> Self {
        self.bikes = bikes;
        self.docks = docks;
        self
    }

    pub(crate) fn maintenance(mut self) -> Self {
        self.status = StationStatus::Maintenance;
        self
    }

    pub(crate) fn usage(mut self, usage: u32) -> Self {
        self.usage = usage;
        self
    }

    pub(crate) fn build(self) -> Station {
        Station {
            id: StationId::new(self.id).unwrap(),
            name: self.name,
            address: self.address,
            zone: self.zone,
            occupancy: Occupancy::new(self.bikes, self.docks).unwrap(),
            status: self.status,
            usage: self.usage,
            average_duration_mins: 15,
            location: Coordinates::new(40.73, -73.93).unwrap(),
        }
    }
}

/// The three-station collection used throughout the query examples:
/// A (North, empty), B (South, full), C (North, half full).
pub(crate) fn abc() -> Vec<Station> {
    vec![
        station(1).name("A").zone(Zone::North).bikes(0, 10).build(),
        station(2).name("B").zone(Zone::South).bikes(10, 10).build(),
        station(3).name("C").zone(Zone::North).bikes(5, 10).build(),
    ]
}

fn zone_strategy() -> impl Strategy<Value = Zone> {
    prop::sample::select(Zone::ALL.to_vec())
}

/// Arbitrary station with the given id. Names, addresses and counts are
/// drawn from small domains so that ties and search hits are common.
pub(crate) fn station_strategy(id: u32) -> impl Strategy<Value = Station> {
    (
        "[A-C][a-c]{0,2}",
        prop::sample::select(vec!["Main St", "Oak Ave", "Park Rd"]),
        zone_strategy(),
        0u32..6,
        0u32..4,
        prop::bool::weighted(0.2),
        prop::sample::select(vec![100u32, 400, 500, 501, 900]),
    )
        .prop_map(move |(name, street, zone, docks, bikes, maint, usage)| {
            let mut fixture = station(id)
                .name(&name)
                .address(&format!("{} {street}", id % 7))
                .zone(zone)
                .bikes(bikes.min(docks), docks)
                .usage(usage);
            if maint {
                fixture = fixture.maintenance();
            }
            fixture.build()
        })
}

/// Arbitrary collection with unique ids `1..=n`.
pub(crate) fn stations_strategy(max_len: usize) -> impl Strategy<Value = Vec<Station>> {
    (0..=max_len).prop_flat_map(|len| {
        (1..=len as u32)
            .map(station_strategy)
            .collect::<Vec<_>>()
    })
}
