//! Station list queries.
//!
//! A query is a pure function of a station collection and a `QueryState`:
//! search, zone, category and view filters, then a stable sort, then a
//! page slice. The counts in the result always describe the filtered set
//! before slicing.

mod engine;
mod filter;
mod state;

pub use engine::{QueryResult, query, sort_stations};
pub use filter::{HIGH_USAGE_THRESHOLD, StationFilter};
pub use state::{
    Category, DEFAULT_PAGE_SIZE, InvalidQueryState, MAX_PAGE_SIZE, PageRequest, QueryState,
    SortDirection, SortField, ViewFilter,
};
