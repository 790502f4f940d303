// src/state/browser.rs
use tracing::debug;

use crate::dtos::page::Page;
use crate::dtos::product::ProductQuery;
use crate::models::{Category, Product, StockStatus};
use crate::pagination::{total_pages, PerPage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Free-text name search; empty means unfiltered.
    pub q: String,
    pub stock_status: Option<StockStatus>,
    pub category_id: Option<i64>,
}

/// A list request tagged with the ticket that must still be current when its
/// response is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub ticket: u64,
    pub query: ProductQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: i64,
    pub name: String,
}

impl PendingDelete {
    pub fn title(&self) -> String {
        format!("Delete \"{}\"?", self.name)
    }

    pub fn warning(&self) -> &'static str {
        "This action cannot be undone."
    }
}

/// Client-side state of the product listing: filters, pagination, the
/// current page of items and the bookkeeping for in-flight loads.
#[derive(Debug, Clone)]
pub struct BrowserState {
    filters: Filters,
    page: u64,
    per_page: PerPage,
    total: u64,
    items: Vec<Product>,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
    latest_ticket: u64,
    pending_delete: Option<PendingDelete>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            page: 1,
            per_page: PerPage::default(),
            total: 0,
            items: Vec::new(),
            categories: Vec::new(),
            loading: false,
            error: None,
            latest_ticket: 0,
            pending_delete: None,
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> PerPage {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.per_page.get())
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Updates the search text without reloading; it takes effect on the
    /// next load (see `submit_search`).
    pub fn set_query_text(&mut self, q: impl Into<String>) {
        self.filters.q = q.into();
    }

    pub fn submit_search(&mut self) {
        self.page = 1;
    }

    pub fn set_stock_status(&mut self, status: Option<StockStatus>) {
        self.filters.stock_status = status;
        self.page = 1;
    }

    pub fn set_category(&mut self, category_id: Option<i64>) {
        self.filters.category_id = category_id;
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: PerPage) {
        self.per_page = per_page;
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.page = 1;
    }

    /// Replaces every filter and the page size at once, back on page 1.
    pub fn apply_filters(&mut self, filters: Filters, per_page: PerPage) {
        self.filters = filters;
        self.per_page = per_page;
        self.page = 1;
    }

    /// Jumps to `page`, clamped to the pages the last load reported.
    /// Returns whether the page changed.
    pub fn jump_to_page(&mut self, page: u64) -> bool {
        let target = page.clamp(1, self.total_pages());
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    /// Moves forward one page. Returns false (and changes nothing) when the
    /// "Next" control would be disabled.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// The request descriptor for the current filters and page.
    pub fn query(&self) -> ProductQuery {
        let q = self.filters.q.trim();
        ProductQuery {
            page: self.page,
            per_page: self.per_page.get(),
            q: (!q.is_empty()).then(|| q.to_string()),
            stock_status: self.filters.stock_status,
            category_id: self.filters.category_id,
        }
    }

    /// Starts a load: issues a fresh ticket, which supersedes every earlier
    /// one, and raises the loading flag.
    pub fn begin_load(&mut self) -> ListRequest {
        self.latest_ticket += 1;
        self.loading = true;
        ListRequest {
            ticket: self.latest_ticket,
            query: self.query(),
        }
    }

    /// Applies a load result if `ticket` is still the latest one. Stale
    /// results are dropped and leave the state untouched. On failure the
    /// item set is cleared and the error kept for display.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Page<Product>, String>) -> bool {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "Discarding stale product page");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.total = page.total();
                self.items = page.data;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
        true
    }

    /// Opens the delete confirmation for a product on the current page.
    pub fn request_delete(&mut self, id: i64) -> Option<&PendingDelete> {
        let product = self.items.iter().find(|p| p.id == id)?;
        self.pending_delete = Some(PendingDelete {
            id,
            name: product.name.clone(),
        });
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Closes the confirmation and hands back what was confirmed.
    pub fn take_pending_delete(&mut self) -> Option<PendingDelete> {
        self.pending_delete.take()
    }

    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::page::PageMeta;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 10.0,
            stock_status: StockStatus::InStock,
            category: None,
            created_at: None,
        }
    }

    fn page(items: Vec<Product>, total: Option<u64>) -> Page<Product> {
        Page {
            data: items,
            meta: total.map(|total| PageMeta {
                total: Some(total),
                ..PageMeta::default()
            }),
        }
    }

    fn loaded(total: u64, per_page: PerPage) -> BrowserState {
        let mut state = BrowserState::new();
        state.set_per_page(per_page);
        let req = state.begin_load();
        state.finish_load(req.ticket, Ok(page(vec![product(1, "Lamp")], Some(total))));
        state
    }

    #[test]
    fn starts_on_first_page_with_defaults() {
        let state = BrowserState::new();
        assert_eq!(state.page(), 1);
        assert_eq!(state.per_page().get(), 10);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn every_filter_change_resets_to_first_page() {
        let mut state = loaded(100, PerPage::Ten);
        let changes: [fn(&mut BrowserState); 5] = [
            |s| s.set_stock_status(Some(StockStatus::OutOfStock)),
            |s| s.set_category(Some(3)),
            |s| s.set_per_page(PerPage::Fifty),
            |s| {
                s.set_query_text("lamp");
                s.submit_search();
            },
            |s| s.reset_filters(),
        ];
        for change in changes {
            state.set_per_page(PerPage::Ten);
            assert!(state.next_page());
            assert!(state.next_page());
            assert_eq!(state.page(), 3);
            change(&mut state);
            assert_eq!(state.page(), 1);
        }
    }

    #[test]
    fn next_is_disabled_on_last_page() {
        let mut state = loaded(45, PerPage::Twenty);
        assert_eq!(state.total_pages(), 3);
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.page(), 3);
        assert!(!state.can_go_next());
        assert!(!state.next_page());
        assert_eq!(state.page(), 3);
        assert!(state.can_go_previous());
    }

    #[test]
    fn previous_is_disabled_on_first_page() {
        let mut state = loaded(45, PerPage::Twenty);
        assert!(!state.previous_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn jump_is_clamped_to_known_pages() {
        let mut state = loaded(45, PerPage::Twenty);
        assert!(state.jump_to_page(9));
        assert_eq!(state.page(), 3);
        assert!(!state.jump_to_page(3));
        assert!(state.jump_to_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn apply_filters_sets_everything_on_page_one() {
        let mut state = loaded(100, PerPage::Ten);
        state.next_page();
        state.apply_filters(
            Filters {
                q: "desk".into(),
                stock_status: Some(StockStatus::InStock),
                category_id: Some(2),
            },
            PerPage::Fifty,
        );
        let query = state.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 50);
        assert_eq!(query.q.as_deref(), Some("desk"));
    }

    #[test]
    fn query_omits_empty_filters() {
        let mut state = BrowserState::new();
        state.set_query_text("   ");
        let query = state.query();
        assert_eq!(query.q, None);
        assert_eq!(query.stock_status, None);
        assert_eq!(query.category_id, None);

        state.set_query_text(" lamp ");
        state.set_category(Some(4));
        let query = state.query();
        assert_eq!(query.q.as_deref(), Some("lamp"));
        assert_eq!(query.category_id, Some(4));
    }

    #[test]
    fn typing_does_not_change_page() {
        let mut state = loaded(100, PerPage::Ten);
        state.next_page();
        state.set_query_text("lam");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn total_falls_back_to_item_count() {
        let mut state = BrowserState::new();
        let req = state.begin_load();
        state.finish_load(req.ticket, Ok(page(vec![product(1, "a"), product(2, "b")], None)));
        assert_eq!(state.total(), 2);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = BrowserState::new();
        let first = state.begin_load();
        state.set_stock_status(Some(StockStatus::OutOfStock));
        let second = state.begin_load();
        assert_eq!(second.query.stock_status, Some(StockStatus::OutOfStock));

        // Newer response lands first, older one arrives late.
        assert!(state.finish_load(second.ticket, Ok(page(vec![product(2, "Fresh")], Some(1)))));
        assert!(!state.finish_load(first.ticket, Ok(page(vec![product(1, "Stale")], Some(99)))));

        assert_eq!(state.items()[0].name, "Fresh");
        assert_eq!(state.total(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_response_keeps_loading_flag_for_latest() {
        let mut state = BrowserState::new();
        let first = state.begin_load();
        let _second = state.begin_load();
        state.finish_load(first.ticket, Ok(page(vec![], Some(0))));
        assert!(state.is_loading());
    }

    #[test]
    fn failure_clears_items_and_records_error() {
        let mut state = loaded(5, PerPage::Ten);
        let req = state.begin_load();
        state.finish_load(req.ticket, Err("Failed to load products".into()));
        assert!(state.items().is_empty());
        assert_eq!(state.error(), Some("Failed to load products"));

        let req = state.begin_load();
        state.finish_load(req.ticket, Ok(page(vec![product(1, "Lamp")], Some(1))));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn delete_needs_a_product_on_the_page() {
        let mut state = loaded(1, PerPage::Ten);
        assert!(state.request_delete(42).is_none());

        let pending = state.request_delete(1).unwrap();
        assert_eq!(pending.title(), "Delete \"Lamp\"?");
        state.cancel_delete();
        assert!(state.pending_delete().is_none());
        assert!(state.take_pending_delete().is_none());
    }
}
