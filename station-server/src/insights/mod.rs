//! Fleet insights for the dashboard cards and charts.
//!
//! Like zone summaries, these are derived on demand from a station
//! collection.

mod alerts;
mod distribution;
mod overview;

pub use alerts::{
    AlertKind, PriorityAlert, RebalanceCandidate, priority_alerts, rebalancing_candidates,
};
pub use distribution::{AvailabilityBucket, StatusDistribution, availability_histogram};
pub use overview::FleetOverview;
