//! Filter, sort and paginate in one pass.

use std::cmp::Ordering;

use crate::domain::Station;

use super::filter::StationFilter;
use super::state::{QueryState, SortDirection, SortField};

/// One page of a station query plus the counts the caller needs to page.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The stations on the requested page, at most `page_size` of them.
    pub items: Vec<Station>,
    /// Stations matching every filter, before pagination.
    pub total_matches: usize,
    /// `ceil(total_matches / page_size)`, never less than 1.
    pub total_pages: usize,
    pub page: u32,
    pub page_size: u32,
}

impl QueryResult {
    /// Whether the requested page lies past the last page.
    pub fn is_past_end(&self) -> bool {
        self.page as usize > self.total_pages
    }
}

/// Run a query against a collection.
///
/// Stages run in a fixed order: search, zone, category, view, sort,
/// paginate. The collection is never reordered; sorting works on
/// references. A page past the end yields no items, not an error.
///
/// # Examples
///
/// ```
/// use station_server::query::{Category, QueryState, query};
///
/// let result = query(&[], &QueryState::default().with_category(Category::Empty));
/// assert!(result.items.is_empty());
/// assert_eq!(result.total_matches, 0);
/// assert_eq!(result.total_pages, 1);
/// ```
pub fn query(stations: &[Station], state: &QueryState) -> QueryResult {
    let filter = StationFilter::new(state);

    let mut matched: Vec<&Station> = stations.iter().filter(|s| filter.matches(s)).collect();
    sort_stations(&mut matched, state.sort, state.direction);

    let total_matches = matched.len();
    let page_size = state.page.page_size() as usize;
    let total_pages = total_matches.div_ceil(page_size).max(1);

    let items = matched
        .into_iter()
        .skip(state.page.offset())
        .take(page_size)
        .cloned()
        .collect();

    QueryResult {
        items,
        total_matches,
        total_pages,
        page: state.page.page(),
        page_size: state.page.page_size(),
    }
}

/// Stable sort by one field. Names and zones compare as strings, bikes and
/// usage numerically.
pub fn sort_stations(stations: &mut [&Station], field: SortField, direction: SortDirection) {
    stations.sort_by(|a, b| direction.apply(compare_by(field, a, b)));
}

fn compare_by(field: SortField, a: &Station, b: &Station) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Bikes => a.bikes().cmp(&b.bikes()),
        SortField::Usage => a.usage.cmp(&b.usage),
        SortField::Zone => a.zone.as_str().cmp(b.zone.as_str()),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Zone;
    use crate::query::{Category, PageRequest, ViewFilter};
    use crate::testing::stations_strategy;
    use proptest::prelude::*;

    fn state_strategy() -> impl Strategy<Value = QueryState> {
        (
            prop::sample::select(vec!["", "a", "B", "main", "oak", "nor", "zzz"]),
            prop::option::of(prop::sample::select(Zone::ALL.to_vec())),
            prop::sample::select(vec![
                Category::All,
                Category::Active,
                Category::Maintenance,
                Category::Empty,
                Category::Full,
            ]),
            prop::sample::select(vec![ViewFilter::All, ViewFilter::Problem, ViewFilter::HighUsage]),
            prop::sample::select(vec![
                SortField::Name,
                SortField::Bikes,
                SortField::Usage,
                SortField::Zone,
            ]),
            prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
            1u32..6,
            1u32..8,
        )
            .prop_map(|(search, zone, category, view, sort, direction, page, size)| {
                QueryState {
                    search: search.to_string(),
                    zone,
                    category,
                    view,
                    sort,
                    direction,
                    page: PageRequest::new(page, size).unwrap(),
                }
            })
    }

    /// Reference model: filter and sort with no pagination.
    fn filtered_and_sorted(stations: &[Station], state: &QueryState) -> Vec<Station> {
        let filter = StationFilter::new(state);
        let mut matched: Vec<&Station> = stations.iter().filter(|s| filter.matches(s)).collect();
        sort_stations(&mut matched, state.sort, state.direction);
        matched.into_iter().cloned().collect()
    }

    proptest! {
        /// Every returned station passes every active predicate
        #[test]
        fn items_satisfy_filters(stations in stations_strategy(30), state in state_strategy()) {
            let result = query(&stations, &state);
            let needle = state.search.to_lowercase();
            for s in &result.items {
                if !state.search.trim().is_empty() {
                    prop_assert!(
                        s.name.to_lowercase().contains(&needle)
                            || s.address.to_lowercase().contains(&needle)
                            || s.zone.as_str().to_lowercase().contains(&needle)
                    );
                }
                if let Some(zone) = state.zone {
                    prop_assert_eq!(s.zone, zone);
                }
                prop_assert!(state.category.matches(s));
                prop_assert!(state.view.matches(s));
            }
        }

        /// total_matches counts the unpaginated filtered set
        #[test]
        fn count_ignores_pagination(stations in stations_strategy(30), state in state_strategy()) {
            let result = query(&stations, &state);
            let expected = filtered_and_sorted(&stations, &state).len();
            prop_assert_eq!(result.total_matches, expected);
            prop_assert_eq!(result.total_pages, expected.div_ceil(state.page.page_size() as usize).max(1));
        }

        /// Walking every page reproduces the filtered, sorted set exactly
        #[test]
        fn pages_cover_everything_once(stations in stations_strategy(30), state in state_strategy()) {
            let first = query(&stations, &state.clone().with_page(PageRequest::new(1, state.page.page_size()).unwrap()));
            let mut collected = Vec::new();
            for page in 1..=first.total_pages as u32 {
                let paged = state.clone().with_page(PageRequest::new(page, state.page.page_size()).unwrap());
                collected.extend(query(&stations, &paged).items);
            }
            prop_assert_eq!(collected, filtered_and_sorted(&stations, &state));
        }

        /// Equal sort keys keep their collection order
        #[test]
        fn sort_is_stable(stations in stations_strategy(30), state in state_strategy()) {
            let all = filtered_and_sorted(&stations, &state);
            let position = |s: &Station| stations.iter().position(|t| t.id == s.id).unwrap();
            for pair in all.windows(2) {
                if compare_by(state.sort, &pair[0], &pair[1]) == Ordering::Equal {
                    prop_assert!(position(&pair[0]) < position(&pair[1]));
                }
            }
        }

        /// Same inputs, same output; the collection is not modified
        #[test]
        fn query_is_pure(stations in stations_strategy(30), state in state_strategy()) {
            let before = stations.clone();
            let a = query(&stations, &state);
            let b = query(&stations, &state);
            prop_assert_eq!(a, b);
            prop_assert_eq!(stations, before);
        }

        /// A far-away page is empty but reports the real totals
        #[test]
        fn distant_page_is_empty(stations in stations_strategy(30), state in state_strategy()) {
            let far = state.clone().with_page(PageRequest::new(1_000_000, state.page.page_size()).unwrap());
            let near = query(&stations, &state);
            let result = query(&stations, &far);
            prop_assert!(result.items.is_empty());
            prop_assert_eq!(result.total_matches, near.total_matches);
            prop_assert_eq!(result.total_pages, near.total_pages);
        }
    }
}
