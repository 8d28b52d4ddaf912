//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Station;
use crate::query::QueryResult;

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Station table fragment for one result page.
#[derive(Template)]
#[template(path = "station_table.html")]
pub struct StationTableTemplate {
    pub stations: Vec<StationRowView>,
    pub total_matches: usize,
    pub page: u32,
    pub total_pages: usize,
    pub snapshot_version: u64,
}

impl StationTableTemplate {
    pub fn from_result(result: &QueryResult, snapshot_version: u64) -> Self {
        Self {
            stations: result.items.iter().map(StationRowView::from_station).collect(),
            total_matches: result.total_matches,
            page: result.page,
            total_pages: result.total_pages,
            snapshot_version,
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station row view model.
#[derive(Debug, Clone)]
pub struct StationRowView {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub zone: String,
    pub bikes: u32,
    pub docks: u32,
    pub usage: u32,
    pub in_maintenance: bool,
    pub is_empty: bool,
    pub is_full: bool,
}

impl StationRowView {
    /// Row highlight class.
    pub fn row_class(&self) -> &'static str {
        if self.in_maintenance {
            "maintenance"
        } else if self.is_empty {
            "empty"
        } else if self.is_full {
            "full"
        } else {
            ""
        }
    }

    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
            address: station.address.clone(),
            zone: station.zone.as_str().to_string(),
            bikes: station.bikes(),
            docks: station.docks(),
            usage: station.usage,
            in_maintenance: station.in_maintenance(),
            is_empty: station.is_empty(),
            is_full: station.is_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryState, query};
    use crate::testing::{abc, station};

    #[test]
    fn renders_rows() {
        let result = query(&abc(), &QueryState::default());
        let html = StationTableTemplate::from_result(&result, 3)
            .render()
            .unwrap();

        assert!(html.contains("1 Main St"));
        assert!(html.contains("2 Main St"));
        assert!(html.contains("3 Main St"));
        assert!(html.contains("3 stations"));
        assert!(!html.contains("No stations match"));
    }

    #[test]
    fn renders_empty_state() {
        let result = query(&[], &QueryState::default());
        let html = StationTableTemplate::from_result(&result, 1)
            .render()
            .unwrap();
        assert!(html.contains("No stations match"));
    }

    #[test]
    fn row_class_prefers_maintenance() {
        let row = StationRowView::from_station(&station(1).bikes(0, 10).maintenance().build());
        assert_eq!(row.row_class(), "maintenance");

        let row = StationRowView::from_station(&station(2).bikes(10, 10).build());
        assert_eq!(row.row_class(), "full");

        let row = StationRowView::from_station(&station(3).bikes(4, 10).build());
        assert_eq!(row.row_class(), "");
    }

    #[test]
    fn escapes_names() {
        let stations = vec![station(1).name("<b>Oak</b>").build()];
        let result = query(&stations, &QueryState::default());
        let html = StationTableTemplate::from_result(&result, 1)
            .render()
            .unwrap();
        assert!(!html.contains("<b>Oak</b>"));
        assert!(html.contains("&lt;b&gt;Oak"));
    }
}
