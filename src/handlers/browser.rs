// src/handlers/browser.rs
use tracing::{error, info, instrument, warn};

use super::{Notice, CATEGORY_LIMIT};
use crate::models::StockStatus;
use crate::pagination::PerPage;
use crate::routes::CatalogApi;
use crate::state::{BrowserState, Filters, PendingDelete};

/// Product listing bound to a catalog backend. Every filter or pagination
/// change re-issues the list request for the new descriptor.
pub struct CatalogBrowser<A> {
    api: A,
    state: BrowserState,
}

impl<A: CatalogApi> CatalogBrowser<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BrowserState::new(),
        }
    }

    /// Fresh browser with categories and the first page loaded.
    pub async fn mount(api: A) -> Self {
        let mut browser = Self::new(api);
        browser.load_categories().await;
        browser.load_products().await;
        browser
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Category failures only cost the category filter, so they are logged
    /// and replaced by an empty list.
    #[instrument(skip(self))]
    pub async fn load_categories(&mut self) {
        match self.api.list_categories(CATEGORY_LIMIT).await {
            Ok(categories) => self.state.set_categories(categories),
            Err(e) => {
                warn!(?e, "Category lookup failed, filtering by category disabled");
                self.state.set_categories(Vec::new());
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn load_products(&mut self) {
        let request = self.state.begin_load();
        let result = self.api.list_products(&request.query).await.map_err(|e| {
            error!(?e, "Failed to load products");
            e.user_message("Failed to load products")
        });
        self.state.finish_load(request.ticket, result);
    }

    pub fn set_query_text(&mut self, q: impl Into<String>) {
        self.state.set_query_text(q);
    }

    /// Applies the typed search text (Enter in the search box).
    pub async fn submit_search(&mut self) {
        self.state.submit_search();
        self.load_products().await;
    }

    pub async fn search(&mut self, q: impl Into<String>) {
        self.set_query_text(q);
        self.submit_search().await;
    }

    pub async fn set_stock_status(&mut self, status: Option<StockStatus>) {
        self.state.set_stock_status(status);
        self.load_products().await;
    }

    pub async fn set_category(&mut self, category_id: Option<i64>) {
        self.state.set_category(category_id);
        self.load_products().await;
    }

    pub async fn set_per_page(&mut self, per_page: PerPage) {
        self.state.set_per_page(per_page);
        self.load_products().await;
    }

    pub async fn apply_filters(&mut self, filters: Filters, per_page: PerPage) {
        self.state.apply_filters(filters, per_page);
        self.load_products().await;
    }

    /// Loads `page` if it differs from the current one after clamping.
    pub async fn go_to_page(&mut self, page: u64) -> bool {
        if !self.state.jump_to_page(page) {
            return false;
        }
        self.load_products().await;
        true
    }

    pub async fn reset_filters(&mut self) {
        self.state.reset_filters();
        self.load_products().await;
    }

    pub async fn refresh(&mut self) {
        self.load_products().await;
    }

    /// Returns false when already on the last page; nothing is fetched then.
    pub async fn next_page(&mut self) -> bool {
        if !self.state.next_page() {
            return false;
        }
        self.load_products().await;
        true
    }

    pub async fn previous_page(&mut self) -> bool {
        if !self.state.previous_page() {
            return false;
        }
        self.load_products().await;
        true
    }

    /// First step of a delete: asks for confirmation of a listed product.
    pub fn request_delete(&mut self, id: i64) -> Option<&PendingDelete> {
        self.state.request_delete(id)
    }

    pub fn cancel_delete(&mut self) {
        self.state.cancel_delete();
    }

    /// Deletes the product awaiting confirmation, then reloads the current
    /// page once whether or not the delete succeeded. Rows are never removed
    /// locally.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        let pending = self.state.take_pending_delete()?;
        let notice = match self.api.delete_product(pending.id).await {
            Ok(()) => {
                info!(id = pending.id, "Product deleted");
                Notice::Success(format!("Deleted \"{}\"", pending.name))
            }
            Err(e) => {
                error!(?e, id = pending.id, "Failed to delete product");
                Notice::Error(e.user_message("Failed to delete product"))
            }
        };
        self.load_products().await;
        Some(notice)
    }
}
