// src/routes/mod.rs
pub mod categories;
pub mod products;

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Response;

use crate::config::ApiConfig;
use crate::dtos::page::Page;
use crate::dtos::product::{CreateProductRequest, ProductQuery};
use crate::error::{AppError, AppResult};
use crate::models::{Category, Product};

/// The catalog backend as the dashboard sees it. `HttpCatalogApi` talks to
/// the real service; tests substitute in-memory fakes.
pub trait CatalogApi {
    fn list_categories(&self, limit: u32) -> impl Future<Output = AppResult<Vec<Category>>> + Send;

    fn list_products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = AppResult<Page<Product>>> + Send;

    /// Creates a product and returns it when the server echoes it back.
    fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> impl Future<Output = AppResult<Option<Product>>> + Send;

    fn delete_product(&self, id: i64) -> impl Future<Output = AppResult<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Turns a non-2xx response into `AppError::Api`, keeping the server's
/// message and field errors.
async fn ensure_success(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.bytes().await.unwrap_or_default();
    Err(AppError::from_response(status, &body))
}

impl CatalogApi for HttpCatalogApi {
    async fn list_categories(&self, limit: u32) -> AppResult<Vec<Category>> {
        self.fetch_categories(limit).await
    }

    async fn list_products(&self, query: &ProductQuery) -> AppResult<Page<Product>> {
        self.fetch_products(query).await
    }

    async fn create_product(&self, request: &CreateProductRequest) -> AppResult<Option<Product>> {
        self.post_product(request).await
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.remove_product(id).await
    }
}
