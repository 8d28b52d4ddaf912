//! Domain types for the bike station registry.
//!
//! This module contains the core domain model types that represent
//! validated station data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod snapshot;
mod station;
mod zone;

pub use error::DomainError;
pub use snapshot::StationSet;
pub use station::{Coordinates, Occupancy, Station, StationId, StationStatus};
pub use zone::Zone;
