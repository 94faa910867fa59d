//! Table-level roster state (search box, sortable headers, pager).

use super::{roster_page, RosterPage, RosterQuery, SortDirection, SortField, DEFAULT_PAGE_SIZE};
use crate::models::Patient;

/// Holds the current query and applies the table's interaction rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    query: RosterQuery,
    page_size: usize,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl RosterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: RosterQuery::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &RosterQuery {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search term and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    /// Back to page 1, keeping search and sort.
    pub fn reset_page(&mut self) {
        self.query.page = 1;
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order. Always goes back to page 1.
    pub fn sort_by(&mut self, field: SortField) {
        self.query.sort_direction = if self.query.sort_field == field {
            self.query.sort_direction.flipped()
        } else {
            SortDirection::Asc
        };
        self.query.sort_field = field;
        self.query.page = 1;
    }

    /// Move to `page`, clamped against the current filtered roster.
    pub fn go_to_page(&mut self, patients: &[Patient], page: usize) {
        self.query.page = page;
        self.query.page = self.view(patients).page;
    }

    pub fn next_page(&mut self, patients: &[Patient]) {
        let page = self.query.page.saturating_add(1);
        self.go_to_page(patients, page);
    }

    pub fn previous_page(&mut self, patients: &[Patient]) {
        let page = self.query.page.saturating_sub(1);
        self.go_to_page(patients, page);
    }

    pub fn view<'a>(&self, patients: &'a [Patient]) -> RosterPage<'a> {
        roster_page(patients, &self.query, self.page_size)
    }
}
