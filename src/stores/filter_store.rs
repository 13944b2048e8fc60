// ============================================================================
// FILTER STORE - page, page size, search text and date range of the listing
// ============================================================================

use chrono::NaiveDate;

use crate::models::TransactionQuery;
use crate::utils::query_date;

/// Page sizes offered by the "Show N entries" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    pub fn value(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// List-view filter. Every mutation bumps `revision`, so each user action
/// yields exactly one re-fetch even when the values end up unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    page: u32,
    page_size: PageSize,
    search: String,
    range: DateRange,
    revision: u64,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            search: String::new(),
            range: DateRange::default(),
            revision: 0,
        }
    }
}

impl Filter {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switches page size and goes back to the first page. `total_items`
    /// is the count reported by the last successful fetch.
    pub fn change_page_size(&mut self, size: PageSize, total_items: u64) {
        let total_pages = total_items.div_ceil(size.value() as u64);
        if self.page as u64 > total_pages {
            log::debug!("📄 Page {} beyond {} pages at size {}, resetting", self.page, total_pages, size.value());
        }
        self.page_size = size;
        self.page = 1;
        self.touch();
    }

    /// `index` is the 0-based page selected in the pagination control.
    pub fn change_page(&mut self, index: usize) {
        self.page = u32::try_from(index).unwrap_or(u32::MAX - 1) + 1;
        self.touch();
    }

    pub fn change_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.touch();
    }

    pub fn change_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.range = DateRange { start, end };
        self.touch();
    }

    /// Re-fetch the current page without changing anything else.
    pub fn refresh(&mut self) {
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn query(&self, location: &str) -> TransactionQuery {
        TransactionQuery {
            limit: self.page_size.value(),
            location: location.to_string(),
            page: self.page,
            keyword: self.search.clone(),
            start_date: query_date(self.range.start),
            end_date: query_date(self.range.end),
        }
    }

    /// Number shown in the "No" column for the row at `index` of this page.
    pub fn row_number(&self, index: usize) -> u64 {
        (self.page as u64 - 1) * self.page_size.value() as u64 + index as u64 + 1
    }

    /// Bounds of the "Showing X to Y of Z" footer.
    pub fn showing(&self, rows_on_page: usize, total_items: u64) -> (u64, u64) {
        if rows_on_page == 0 {
            return (0, 0);
        }
        let from = self.row_number(0);
        let to = (from + rows_on_page as u64 - 1).min(total_items.max(from));
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_on_page(page: usize, size: PageSize) -> Filter {
        let mut filter = Filter::default();
        filter.change_page_size(size, 10_000);
        filter.change_page(page - 1);
        filter
    }

    #[test]
    fn page_size_values_round_trip() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::from_value(size.value()), Some(size));
        }
        assert_eq!(PageSize::from_value(25), None);
        assert_eq!(PageSize::default().value(), 10);
    }

    #[test]
    fn page_size_change_within_total_resets_to_first_page_once() {
        for current in PageSize::ALL {
            for next in PageSize::ALL {
                let mut filter = filter_on_page(3, current);
                let total_items = 3 * next.value() as u64;
                let before = filter.revision();

                filter.change_page_size(next, total_items);

                assert_eq!(filter.page(), 1);
                assert_eq!(filter.page_size(), next);
                assert_eq!(filter.revision(), before + 1);
            }
        }
    }

    #[test]
    fn page_size_change_beyond_total_resets_to_first_page() {
        let mut filter = filter_on_page(5, PageSize::Ten);
        filter.change_page_size(PageSize::Hundred, 40);
        assert_eq!(filter.page(), 1);

        let mut empty = filter_on_page(2, PageSize::Ten);
        empty.change_page_size(PageSize::Fifty, 0);
        assert_eq!(empty.page(), 1);
    }

    #[test]
    fn limit_fifty_with_forty_items_stays_on_page_one() {
        let mut filter = Filter::default();
        let before = filter.revision();

        filter.change_page_size(PageSize::Fifty, 40);

        assert_eq!(filter.page(), 1);
        assert_eq!(filter.revision(), before + 1);
        assert_eq!(filter.query("LOC01").limit, 50);
    }

    #[test]
    fn pagination_control_index_is_zero_based() {
        let mut filter = Filter::default();
        filter.change_page(0);
        assert_eq!(filter.page(), 1);
        filter.change_page(4);
        assert_eq!(filter.page(), 5);
    }

    #[test]
    fn search_and_range_are_sent_verbatim() {
        let mut filter = Filter::default();
        filter.change_page(2);
        filter.change_search("  B 1234 ");
        filter.change_date_range(NaiveDate::from_ymd_opt(2024, 1, 2), None);

        let query = filter.query("LOC01");
        assert_eq!(query.page, 3);
        assert_eq!(query.keyword, "  B 1234 ");
        assert_eq!(query.start_date, "2024-01-02");
        assert_eq!(query.end_date, "");
        assert_eq!(query.location, "LOC01");
    }

    #[test]
    fn every_mutation_bumps_the_revision() {
        let mut filter = Filter::default();
        filter.change_search("");
        filter.change_date_range(None, None);
        filter.refresh();
        assert_eq!(filter.revision(), 3);
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        let filter = filter_on_page(3, PageSize::Ten);
        assert_eq!(filter.row_number(0), 21);
        assert_eq!(filter.row_number(9), 30);
    }

    #[test]
    fn showing_bounds_follow_the_page() {
        let filter = filter_on_page(3, PageSize::Ten);
        assert_eq!(filter.showing(4, 24), (21, 24));
        assert_eq!(Filter::default().showing(10, 40), (1, 10));
        assert_eq!(Filter::default().showing(0, 0), (0, 0));
    }
}
