#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use listings::{Space, SpaceListResponse, SpaceQuery, SpaceType};

/// Listings shown per grid page.
pub const PER_PAGE: u32 = 12;

pub const LOAD_ERROR: &str = "Failed to fetch spaces. Please try again.";

/// Active list filters. `None` means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: Option<String>,
    pub space_type: Option<SpaceType>,
    pub city: Option<String>,
    pub is_available: Option<bool>,
}

/// Filter, pagination, and load state behind the listing grid.
///
/// Every filter change resets to page 1. A load is keyed by [`Self::query`]
/// plus a reload counter, so the component refetches whenever either changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub search_input: String,
    pub filters: ListingFilters,
    pub page: u32,
    pub spaces: Vec<Space>,
    pub total: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub reload: u64,
    /// Ticket of the newest in-flight load; older responses are dropped.
    pending: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            filters: ListingFilters::default(),
            page: 1,
            spaces: Vec::new(),
            total: 0,
            total_pages: 0,
            loading: true,
            error: None,
            reload: 0,
            pending: 0,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl ListingState {
    /// Query for the current filters and page.
    pub fn query(&self) -> SpaceQuery {
        SpaceQuery {
            page: Some(i64::from(self.page)),
            per_page: Some(i64::from(PER_PAGE)),
            space_type: self.filters.space_type.map(|kind| kind.as_str().to_owned()),
            city: self.filters.city.clone(),
            is_available: self.filters.is_available,
            search: self.filters.search.clone(),
            ..SpaceQuery::default()
        }
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Apply the typed search text as the `search` filter.
    pub fn submit_search(&mut self) {
        self.filters.search = non_blank(&self.search_input);
        self.page = 1;
    }

    /// Select-box value: empty for "All Types", otherwise a space type.
    pub fn set_space_type(&mut self, value: &str) {
        self.filters.space_type = SpaceType::parse(value);
        self.page = 1;
    }

    pub fn set_city(&mut self, value: &str) {
        self.filters.city = non_blank(value);
        self.page = 1;
    }

    /// Select-box value: `"true"`, `"false"`, or empty for "any".
    pub fn set_availability(&mut self, value: &str) {
        self.filters.is_available = match value.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        self.page = 1;
    }

    /// Move to `page` when it exists; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: u32) {
        if page >= 1 && page <= self.total_pages {
            self.page = page;
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }

    /// Re-run the current query, e.g. after an error or a new listing.
    pub fn retry(&mut self) {
        self.reload += 1;
    }

    /// Mark a load as started and return its ticket for [`Self::finish_load`].
    pub fn begin_load(&mut self) -> u64 {
        self.pending += 1;
        self.loading = true;
        self.error = None;
        self.pending
    }

    /// Store a load result. Results for superseded tickets are ignored.
    /// A failure keeps the previously loaded page visible.
    pub fn finish_load<E>(&mut self, ticket: u64, result: Result<SpaceListResponse, E>) {
        if ticket != self.pending {
            return;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                self.spaces = resp.spaces;
                self.total = resp.total;
                self.total_pages = resp.total_pages;
                self.page = resp.page;
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_ERROR.to_owned()),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.spaces.is_empty()
    }
}
