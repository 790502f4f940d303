// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Product, StockStatus};

/// Body of `POST /v1/products`, produced from a validated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub stock_status: StockStatus,
    #[validate(range(min = 1, message = "Select a category"))]
    pub category_id: i64,
}

/// Query string of `GET /v1/products`. Unset filters are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    pub page: u64,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// `{ "data": Product }` wrapper returned by create.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub data: Option<Product>,
}
