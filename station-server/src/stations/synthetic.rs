//! Seeded synthetic inventory.
//!
//! Stands in for a real inventory service during development and demos.
//! Every fetch produces a fresh fleet from `seed + round`, so refreshes
//! change the data while a given seed stays reproducible.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::Zone;

use super::client::StationDto;

/// Default fleet size.
pub const DEFAULT_STATION_COUNT: u32 = 1000;

const STREETS: [&str; 7] = [
    "Main St",
    "Oak Ave",
    "Park Rd",
    "River Blvd",
    "Market St",
    "Broadway",
    "Lake Dr",
];

const CENTER_LAT: f64 = 40.73;
const CENTER_LNG: f64 = -73.93;
/// Half-width of the generated area, in degrees.
const SPREAD: f64 = 0.05;
const MAINTENANCE_PROBABILITY: f64 = 0.15;

/// Generator for a reproducible synthetic fleet.
#[derive(Debug)]
pub struct SyntheticInventory {
    count: u32,
    seed: u64,
    round: AtomicU64,
}

impl SyntheticInventory {
    pub fn new(count: u32, seed: u64) -> Self {
        Self {
            count,
            seed,
            round: AtomicU64::new(0),
        }
    }

    /// Generate the next fleet.
    pub fn next_fleet(&self) -> Vec<StationDto> {
        let round = self.round.fetch_add(1, Ordering::Relaxed);
        generate(self.count, self.seed.wrapping_add(round))
    }
}

/// Generate `count` stations with ids `1..=count`.
///
/// Bikes are drawn within each station's dock capacity.
pub fn generate(count: u32, seed: u64) -> Vec<StationDto> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (1..=count)
        .map(|id| {
            let docks = rng.gen_range(10..=24);
            let street = STREETS.choose(&mut rng).copied().unwrap_or(STREETS[0]);
            let zone = Zone::ALL.choose(&mut rng).copied().unwrap_or(Zone::Central);
            let status = if rng.gen_bool(MAINTENANCE_PROBABILITY) {
                "maintenance"
            } else {
                "active"
            };

            StationDto {
                id,
                name: format!("Station {id}"),
                address: format!("{} {street}", rng.gen_range(1..=999)),
                zone: zone.as_str().to_string(),
                bikes: rng.gen_range(0..=docks),
                docks,
                status: status.to_string(),
                usage: rng.gen_range(100..=1099),
                average_duration: rng.gen_range(5..=34),
                lat: CENTER_LAT + rng.gen_range(-SPREAD..SPREAD),
                lng: CENTER_LNG + rng.gen_range(-SPREAD..SPREAD),
            }
        })
        .collect()
}
