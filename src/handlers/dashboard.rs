// src/handlers/dashboard.rs
use tracing::debug;

use super::{CatalogBrowser, ProductCreator, SubmitOutcome};
use crate::routes::CatalogApi;

/// Products page: the listing plus the "Add Product" dialog. A successful
/// create bumps `refresh_token` and remounts the listing.
pub struct Dashboard<A> {
    api: A,
    browser: CatalogBrowser<A>,
    form: ProductCreator<A>,
    form_open: bool,
    refresh_token: u64,
}

impl<A: CatalogApi + Clone> Dashboard<A> {
    pub async fn mount(api: A) -> Self {
        let browser = CatalogBrowser::mount(api.clone()).await;
        let form = ProductCreator::mount(api.clone()).await;
        Self {
            api,
            browser,
            form,
            form_open: false,
            refresh_token: 0,
        }
    }

    pub fn browser(&self) -> &CatalogBrowser<A> {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut CatalogBrowser<A> {
        &mut self.browser
    }

    pub fn form(&self) -> &ProductCreator<A> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductCreator<A> {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn refresh_token(&self) -> u64 {
        self.refresh_token
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit().await;
        if let SubmitOutcome::Created { .. } = outcome {
            self.on_created().await;
        }
        outcome
    }

    async fn on_created(&mut self) {
        self.form_open = false;
        self.refresh_token += 1;
        debug!(refresh_token = self.refresh_token, "Remounting product listing");
        self.browser = CatalogBrowser::mount(self.api.clone()).await;
    }
}
