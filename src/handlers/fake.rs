use std::sync::{Arc, Mutex};

use crate::dtos::page::{Page, PageMeta};
use crate::dtos::product::{CreateProductRequest, ProductQuery};
use crate::error::{AppError, AppResult, FieldErrors};
use crate::models::{Category, Product, StockStatus};
use crate::routes::CatalogApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCategories(u32),
    ListProducts(ProductQuery),
    Create(CreateProductRequest),
    Delete(i64),
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    products: Vec<Product>,
    categories: Vec<Category>,
    fail_categories: bool,
    fail_products: bool,
    create_error: Option<(u16, Option<String>, FieldErrors)>,
    fail_delete: bool,
    next_id: i64,
}

/// In-memory catalog that records every call made against it.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: 12.5,
        stock_status: StockStatus::InStock,
        category: None,
        created_at: None,
    }
}

impl FakeApi {
    pub fn with_products(count: i64) -> Self {
        let api = Self::default();
        {
            let mut inner = api.inner.lock().unwrap();
            inner.products = (1..=count).map(|id| product(id, &format!("Product {id}"))).collect();
            inner.categories = vec![
                Category { id: 1, name: "Audio".into() },
                Category { id: 2, name: "Office".into() },
            ];
            inner.next_id = count + 1;
        }
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn fail_categories(&self) {
        self.inner.lock().unwrap().fail_categories = true;
    }

    pub fn fail_products(&self) {
        self.inner.lock().unwrap().fail_products = true;
    }

    pub fn fail_delete(&self) {
        self.inner.lock().unwrap().fail_delete = true;
    }

    pub fn fail_create(&self, status: u16, message: Option<&str>, errors: FieldErrors) {
        self.inner.lock().unwrap().create_error =
            Some((status, message.map(str::to_string), errors));
    }

    fn record(&self, call: Call) {
        self.inner.lock().unwrap().calls.push(call);
    }
}

fn api_error(status: u16, message: Option<String>, errors: FieldErrors) -> AppError {
    AppError::Api {
        status: reqwest::StatusCode::from_u16(status).unwrap(),
        message,
        errors,
    }
}

impl CatalogApi for FakeApi {
    async fn list_categories(&self, limit: u32) -> AppResult<Vec<Category>> {
        self.record(Call::ListCategories(limit));
        let inner = self.inner.lock().unwrap();
        if inner.fail_categories {
            return Err(api_error(500, None, FieldErrors::new()));
        }
        Ok(inner.categories.iter().take(limit as usize).cloned().collect())
    }

    async fn list_products(&self, query: &ProductQuery) -> AppResult<Page<Product>> {
        self.record(Call::ListProducts(query.clone()));
        let inner = self.inner.lock().unwrap();
        if inner.fail_products {
            return Err(api_error(503, Some("Service unavailable".into()), FieldErrors::new()));
        }
        let matching: Vec<&Product> = inner
            .products
            .iter()
            .filter(|p| query.q.as_deref().map_or(true, |q| p.name.contains(q)))
            .filter(|p| query.stock_status.map_or(true, |s| p.stock_status == s))
            .collect();
        let start = ((query.page - 1) * u64::from(query.per_page)) as usize;
        let data = matching
            .iter()
            .skip(start)
            .take(query.per_page as usize)
            .map(|p| (*p).clone())
            .collect();
        Ok(Page {
            data,
            meta: Some(PageMeta {
                total: Some(matching.len() as u64),
                ..PageMeta::default()
            }),
        })
    }

    async fn create_product(&self, request: &CreateProductRequest) -> AppResult<Option<Product>> {
        self.record(Call::Create(request.clone()));
        let mut inner = self.inner.lock().unwrap();
        if let Some((status, message, errors)) = inner.create_error.clone() {
            return Err(api_error(status, message, errors));
        }
        let created = Product {
            id: inner.next_id,
            name: request.name.clone(),
            price: request.price,
            stock_status: request.stock_status,
            category: None,
            created_at: None,
        };
        inner.next_id += 1;
        inner.products.push(created.clone());
        Ok(Some(created))
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.record(Call::Delete(id));
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_delete {
            return Err(api_error(404, Some("Product not found".into()), FieldErrors::new()));
        }
        inner.products.retain(|p| p.id != id);
        Ok(())
    }
}
