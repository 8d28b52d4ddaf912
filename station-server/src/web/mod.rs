//! Web layer for the station list.
//!
//! Provides HTTP endpoints for querying stations, zone summaries and
//! fleet insights.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
