//! Bike-sharing station server.
//!
//! Serves a filtered, sorted and paginated view of the station fleet,
//! per-zone summaries and a few fleet-wide insights, all computed from an
//! immutable snapshot that is refreshed in the background.

pub mod cache;
pub mod config;
pub mod domain;
pub mod insights;
pub mod query;
pub mod stations;
pub mod web;
pub mod zones;

#[cfg(test)]
mod testing;
