//! Filter, sort and paginate the roster.

use serde::Serialize;

use super::{RosterQuery, SortDirection};
use crate::models::Patient;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One visible page of the roster plus pagination metadata.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RosterPage<'a> {
    pub rows: Vec<&'a Patient>,
    /// Page actually shown (1-based, after clamping)
    pub page: usize,
    pub page_size: usize,
    /// Rows left after filtering
    pub total_filtered: usize,
    /// Rows before filtering
    pub total_patients: usize,
    pub total_pages: usize,
    /// 0-based start of the window in the filtered list (inclusive)
    pub start_index: usize,
    /// 0-based end of the window in the filtered list (exclusive)
    pub end_index: usize,
}

impl<'a> RosterPage<'a> {
    /// Nothing to show: render the empty state instead of a table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pagination controls are only shown for more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// "Menampilkan X - Y dari Z hasil", or `None` for an empty page.
    pub fn caption(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "Menampilkan {} - {} dari {} hasil",
            self.start_index + 1,
            self.end_index,
            self.total_filtered
        ))
    }

    /// Header line above the table.
    pub fn summary(&self) -> String {
        format!(
            "Total {} pasien dari {} total",
            self.total_filtered, self.total_patients
        )
    }
}

/// Compute the visible page for `query`.
///
/// Ascending order is a stable sort on the chosen column; descending order is
/// exactly its reverse. The requested page is clamped to the valid range.
pub fn roster_page<'a>(
    patients: &'a [Patient],
    query: &RosterQuery,
    page_size: usize,
) -> RosterPage<'a> {
    let page_size = page_size.max(1);

    let mut filtered: Vec<&Patient> = patients.iter().filter(|p| query.matches(p)).collect();
    filtered.sort_by(|a, b| query.sort_field.compare(a, b));
    if query.sort_direction == SortDirection::Desc {
        filtered.reverse();
    }

    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(page_size);
    let page = query.page.clamp(1, total_pages.max(1));
    let start_index = ((page - 1) * page_size).min(total_filtered);
    let end_index = (start_index + page_size).min(total_filtered);

    tracing::debug!(
        search = %query.search,
        total_filtered,
        total_pages,
        page,
        "roster page computed"
    );

    RosterPage {
        rows: filtered[start_index..end_index].to_vec(),
        page,
        page_size,
        total_filtered,
        total_patients: patients.len(),
        total_pages,
        start_index,
        end_index,
    }
}
