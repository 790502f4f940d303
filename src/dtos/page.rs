// src/dtos/page.rs
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub last_page: Option<u64>,
}

/// Paginated envelope: `{ data: [...], meta?: {...} }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: Option<PageMeta>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodes an envelope leniently: a missing or non-array `data` yields no
    /// items, and unreadable `meta` is treated as absent.
    pub fn from_value(mut value: Value) -> AppResult<Self> {
        let data = match value.get_mut("data").map(Value::take) {
            Some(items @ Value::Array(_)) => serde_json::from_value(items)
                .map_err(|e| AppError::decode(format!("page items: {e}")))?,
            _ => Vec::new(),
        };
        let meta = value
            .get_mut("meta")
            .map(Value::take)
            .and_then(|m| serde_json::from_value(m).ok());
        Ok(Page { data, meta })
    }
}

impl<T> Page<T> {
    /// Total item count reported by the server, or the size of this page when
    /// no metadata came back.
    pub fn total(&self) -> u64 {
        self.meta
            .as_ref()
            .and_then(|m| m.total)
            .unwrap_or(self.data.len() as u64)
    }
}
