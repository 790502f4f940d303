// src/routes/categories.rs
use tracing::instrument;

use super::{ensure_success, HttpCatalogApi};
use crate::dtos::category::CategoryList;
use crate::error::{AppError, AppResult};
use crate::models::Category;

impl HttpCatalogApi {
    // GET /v1/categories?limit=N
    #[instrument(skip(self))]
    pub(super) async fn fetch_categories(&self, limit: u32) -> AppResult<Vec<Category>> {
        let resp = self
            .client
            .get(self.url("/v1/categories"))
            .query(&[("limit", limit)])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let list: CategoryList = resp
            .json()
            .await
            .map_err(|e| AppError::decode(format!("categories: {e}")))?;
        Ok(list.into_vec(limit as usize))
    }
}
