// src/routes/products.rs
use tracing::{debug, instrument};

use super::{ensure_success, HttpCatalogApi};
use crate::dtos::page::Page;
use crate::dtos::product::{CreateProductRequest, ProductEnvelope, ProductQuery};
use crate::error::{AppError, AppResult};
use crate::models::Product;

impl HttpCatalogApi {
    // GET /v1/products?page&per_page[&q][&stock_status][&category_id]
    #[instrument(skip(self))]
    pub(super) async fn fetch_products(&self, query: &ProductQuery) -> AppResult<Page<Product>> {
        let resp = self
            .client
            .get(self.url("/v1/products"))
            .query(query)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AppError::decode(format!("products: {e}")))?;
        let page = Page::from_value(body)?;
        debug!(items = page.data.len(), total = page.total(), "Fetched products");
        Ok(page)
    }

    // POST /v1/products
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub(super) async fn post_product(
        &self,
        request: &CreateProductRequest,
    ) -> AppResult<Option<Product>> {
        let resp = self
            .client
            .post(self.url("/v1/products"))
            .json(request)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        // The created entity is a courtesy; an empty or odd body still means success.
        let body = resp.bytes().await?;
        let created = serde_json::from_slice::<ProductEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.data);
        Ok(created)
    }

    // DELETE /v1/products/{id}
    #[instrument(skip(self))]
    pub(super) async fn remove_product(&self, id: i64) -> AppResult<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/v1/products/{id}")))
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}
