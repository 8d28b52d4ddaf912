//! Station records and their validated parts.

use std::fmt;
use std::str::FromStr;

use super::{DomainError, Zone};

/// A positive station identifier, stable for the lifetime of a snapshot.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationId;
///
/// let id = StationId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
///
/// assert!(StationId::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Create a station id. Zero is rejected.
    pub fn new(id: u32) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidStationId);
        }
        Ok(StationId(id))
    }

    /// The raw numeric id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operational status of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationStatus {
    Active,
    Maintenance,
}

impl StationStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Active => "active",
            StationStatus::Maintenance => "maintenance",
        }
    }
}

impl FromStr for StationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StationStatus::Active),
            "maintenance" => Ok(StationStatus::Maintenance),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bikes docked versus dock capacity.
///
/// Guarantees `bikes <= docks`. A station with zero docks is both empty
/// and full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupancy {
    bikes: u32,
    docks: u32,
}

impl Occupancy {
    /// Create an occupancy, rejecting more bikes than docks.
    pub fn new(bikes: u32, docks: u32) -> Result<Self, DomainError> {
        if bikes > docks {
            return Err(DomainError::BikesExceedDocks { bikes, docks });
        }
        Ok(Self { bikes, docks })
    }

    pub fn bikes(&self) -> u32 {
        self.bikes
    }

    pub fn docks(&self) -> u32 {
        self.docks
    }

    /// Docks with no bike in them.
    pub fn free_docks(&self) -> u32 {
        self.docks - self.bikes
    }

    /// No bikes available.
    pub fn is_empty(&self) -> bool {
        self.bikes == 0
    }

    /// Every dock occupied.
    pub fn is_full(&self) -> bool {
        self.bikes == self.docks
    }

    /// Fraction of docks holding a bike, in `[0, 1]`. Zero-dock stations
    /// report 0.
    pub fn fill_ratio(&self) -> f64 {
        if self.docks == 0 {
            return 0.0;
        }
        f64::from(self.bikes) / f64::from(self.docks)
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(DomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// One physical dock location.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub zone: Zone,
    pub occupancy: Occupancy,
    pub status: StationStatus,
    /// Rolling ride count.
    pub usage: u32,
    pub average_duration_mins: u32,
    pub location: Coordinates,
}

impl Station {
    pub fn bikes(&self) -> u32 {
        self.occupancy.bikes()
    }

    pub fn docks(&self) -> u32 {
        self.occupancy.docks()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy.is_full()
    }

    pub fn is_active(&self) -> bool {
        self.status == StationStatus::Active
    }

    pub fn in_maintenance(&self) -> bool {
        self.status == StationStatus::Maintenance
    }
}
