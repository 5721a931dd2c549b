use std::sync::Arc;

use super::pipeline::{Catalog, CatalogPage, FilterCriteria, PageState, SortKey, total_pages};
use super::record::CreditStatus;

/// Session state for the marketplace explorer: the current filter
/// criteria, sort order, and page over a shared catalog.
///
/// Any criteria change resets the page to 1 — a new filter invalidates
/// the old pagination state.
pub struct Explorer {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    sort: Option<SortKey>,
    page: PageState,
}

impl Explorer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_page_size(catalog, super::pipeline::DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: Arc<Catalog>, page_size: usize) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            sort: None,
            page: PageState::new(page_size),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.reset_page();
    }

    pub fn set_registry(&mut self, registry: Option<String>) {
        self.criteria.registry = registry;
        self.reset_page();
    }

    pub fn set_status(&mut self, status: Option<CreditStatus>) {
        self.criteria.status = status;
        self.reset_page();
    }

    pub fn set_vintage_year(&mut self, year: Option<u16>) {
        self.criteria.vintage_year = year;
        self.reset_page();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
        self.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.reset_page();
    }

    /// Sort changes reorder the filtered set in place; the page sticks.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    /// Clamps to `[1, max(total_pages, 1)]` so an empty result still
    /// leaves the explorer on a well-defined page.
    pub fn go_to_page(&mut self, page: usize) {
        let pages = self.current_total_pages().max(1);
        self.page.current_page = page.clamp(1, pages);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_sub(1));
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn view(&self) -> CatalogPage {
        self.catalog.query(&self.criteria, self.sort, self.page)
    }

    fn reset_page(&mut self) {
        self.page.current_page = 1;
    }

    fn current_total_pages(&self) -> usize {
        let count = self.catalog.filtered(&self.criteria).len();
        total_pages(count, self.page.page_size)
    }
}
