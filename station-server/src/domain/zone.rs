//! Station zones.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// A coarse geographic grouping of stations.
///
/// The set of zones is closed. Parsing is case-sensitive so that zone
/// filters compare exactly against the canonical names.
///
/// # Examples
///
/// ```
/// use station_server::domain::Zone;
///
/// let zone: Zone = "North".parse().unwrap();
/// assert_eq!(zone, Zone::North);
/// assert_eq!(zone.as_str(), "North");
///
/// assert!("north".parse::<Zone>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zone {
    North,
    South,
    East,
    West,
    Central,
}

impl Zone {
    /// Every zone, in declaration order.
    pub const ALL: [Zone; 5] = [
        Zone::North,
        Zone::South,
        Zone::East,
        Zone::West,
        Zone::Central,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::North => "North",
            Zone::South => "South",
            Zone::East => "East",
            Zone::West => "West",
            Zone::Central => "Central",
        }
    }
}

impl FromStr for Zone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| DomainError::UnknownZone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
