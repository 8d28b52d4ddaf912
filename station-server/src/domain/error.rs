//! Domain error types.
//!
//! These errors represent validation failures when building stations from
//! raw inventory records. They are distinct from fetch/IO errors.

use super::StationId;

/// Domain-level errors for station validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Station ids are positive; zero is reserved
    #[error("invalid station id: must be positive")]
    InvalidStationId,

    /// Zone name outside the known set
    #[error("unknown zone: {0:?}")]
    UnknownZone(String),

    /// Status outside the known set
    #[error("unknown station status: {0:?}")]
    UnknownStatus(String),

    /// More bikes docked than the station has docks for
    #[error("station holds {bikes} bikes but only has {docks} docks")]
    BikesExceedDocks { bikes: u32, docks: u32 },

    /// Coordinates that are not finite or out of range
    #[error("invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Two stations in one snapshot share an id
    #[error("duplicate station id: {0}")]
    DuplicateStationId(StationId),
}
