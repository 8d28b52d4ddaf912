//! Query parameters for the station list.
//!
//! Every parameter is a closed type with a strict parser: unknown values are
//! rejected when the query is built, never silently replaced by a default.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Zone;

/// Default number of stations per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Errors for query parameters a caller got wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQueryState {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown view: {0:?}")]
    UnknownView(String),

    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),

    #[error("unknown sort direction: {0:?}")]
    UnknownSortDirection(String),

    #[error("unknown zone: {0:?}")]
    UnknownZone(String),

    /// A numeric parameter that is not a non-negative integer
    #[error("{parameter} must be a non-negative integer, got {value:?}")]
    NotANumber {
        parameter: &'static str,
        value: String,
    },

    /// Pages are numbered from 1
    #[error("page numbers start at 1")]
    ZeroPage,

    #[error("page size must be between 1 and {max}, got {got}")]
    PageSizeOutOfRange { got: u32, max: u32 },
}

/// Quick filter over status and fullness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Active,
    Maintenance,
    /// No bikes docked
    Empty,
    /// Every dock occupied
    Full,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Active => "active",
            Category::Maintenance => "maintenance",
            Category::Empty => "empty",
            Category::Full => "full",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidQueryState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "active" => Ok(Category::Active),
            "maintenance" => Ok(Category::Maintenance),
            "empty" => Ok(Category::Empty),
            "full" => Ok(Category::Full),
            other => Err(InvalidQueryState::UnknownCategory(other.to_string())),
        }
    }
}

/// Coarse view combining several station fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewFilter {
    #[default]
    All,
    /// In maintenance, empty, or full
    Problem,
    /// Usage above the high-usage threshold
    HighUsage,
}

impl ViewFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::Problem => "problem",
            ViewFilter::HighUsage => "high-usage",
        }
    }
}

impl FromStr for ViewFilter {
    type Err = InvalidQueryState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewFilter::All),
            "problem" => Ok(ViewFilter::Problem),
            "high-usage" => Ok(ViewFilter::HighUsage),
            other => Err(InvalidQueryState::UnknownView(other.to_string())),
        }
    }
}

/// Field the station list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Bikes,
    Usage,
    Zone,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Bikes => "bikes",
            SortField::Usage => "usage",
            SortField::Zone => "zone",
        }
    }
}

impl FromStr for SortField {
    type Err = InvalidQueryState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "bikes" => Ok(SortField::Bikes),
            "usage" => Ok(SortField::Usage),
            "zone" => Ok(SortField::Zone),
            other => Err(InvalidQueryState::UnknownSortField(other.to_string())),
        }
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Apply the direction to an ascending comparison.
    ///
    /// Equal stays equal, so a stable sort keeps ties in input order in
    /// both directions.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = InvalidQueryState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(InvalidQueryState::UnknownSortDirection(other.to_string())),
        }
    }
}

/// A validated 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Validate a page request.
    ///
    /// Page 0 is rejected rather than clamped, as is a page size outside
    /// `1..=MAX_PAGE_SIZE`. Pages past the end are valid and come back empty.
    pub fn new(page: u32, page_size: u32) -> Result<Self, InvalidQueryState> {
        if page == 0 {
            return Err(InvalidQueryState::ZeroPage);
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(InvalidQueryState::PageSizeOutOfRange {
                got: page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parameters of one filter + sort + paginate request.
///
/// Owned by the caller; the registry holds no query state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    /// Case-insensitive substring over name, address and zone. Blank
    /// matches everything.
    pub search: String,
    pub zone: Option<Zone>,
    pub category: Category,
    pub view: ViewFilter,
    pub sort: SortField,
    pub direction: SortDirection,
    pub page: PageRequest,
}

impl QueryState {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_view(mut self, view: ViewFilter) -> Self {
        self.view = view;
        self
    }

    pub fn with_sort(mut self, sort: SortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "search={:?} zone={} category={} view={} sort={}:{} page={}x{}",
            self.search,
            self.zone.map_or("any", |z| z.as_str()),
            self.category.as_str(),
            self.view.as_str(),
            self.sort.as_str(),
            self.direction.as_str(),
            self.page.page,
            self.page.page_size,
        )
    }
}
