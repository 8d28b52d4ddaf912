//! Station predicates.

use crate::domain::{Station, Zone};

use super::state::{Category, QueryState, ViewFilter};

/// Usage above which a station counts as high-usage.
pub const HIGH_USAGE_THRESHOLD: u32 = 500;

impl Category {
    /// Whether a station falls in this category.
    pub fn matches(&self, station: &Station) -> bool {
        match self {
            Category::All => true,
            Category::Active => station.is_active(),
            Category::Maintenance => station.in_maintenance(),
            Category::Empty => station.is_empty(),
            Category::Full => station.is_full(),
        }
    }
}

impl ViewFilter {
    /// Whether a station belongs in this view.
    pub fn matches(&self, station: &Station) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Problem => {
                station.in_maintenance() || station.is_empty() || station.is_full()
            }
            ViewFilter::HighUsage => station.usage > HIGH_USAGE_THRESHOLD,
        }
    }
}

/// The filter stages of a query, compiled once per query.
///
/// The search needle is lower-cased up front so each station only pays for
/// lower-casing its own fields.
#[derive(Debug, Clone)]
pub struct StationFilter {
    needle: Option<String>,
    zone: Option<Zone>,
    category: Category,
    view: ViewFilter,
}

impl StationFilter {
    pub fn new(state: &QueryState) -> Self {
        let needle = if state.search.trim().is_empty() {
            None
        } else {
            Some(state.search.to_lowercase())
        };

        Self {
            needle,
            zone: state.zone,
            category: state.category,
            view: state.view,
        }
    }

    /// Apply search, zone, category and view, in that order.
    pub fn matches(&self, station: &Station) -> bool {
        self.matches_search(station)
            && self.zone.is_none_or(|z| station.zone == z)
            && self.category.matches(station)
            && self.view.matches(station)
    }

    fn matches_search(&self, station: &Station) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        station.name.to_lowercase().contains(needle.as_str())
            || station.address.to_lowercase().contains(needle.as_str())
            || station.zone.as_str().to_lowercase().contains(needle.as_str())
    }
}
