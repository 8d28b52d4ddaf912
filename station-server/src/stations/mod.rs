//! Station inventory: where snapshots come from and the registry that
//! serves them.
//!
//! The registry holds one immutable snapshot at a time. Snapshots are
//! fetched from an inventory source (a remote API or the seeded synthetic
//! generator), validated, and swapped in atomically.

mod client;
mod convert;
mod error;
mod registry;
mod source;
mod synthetic;

pub use client::{StationClient, StationClientConfig, StationDto, parse_stations};
pub use convert::convert_stations;
pub use error::StationError;
pub use registry::{RefreshOutcome, SnapshotQuery, StationRegistry};
pub use source::{Inventory, InventorySource};
pub use synthetic::{DEFAULT_STATION_COUNT, SyntheticInventory, generate};
