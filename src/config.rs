// src/config.rs
use crate::error::{AppError, AppResult};

pub const BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin with `/api` appended, no trailing slash.
    pub api_root: String,
}

impl ApiConfig {
    pub fn from_base_url(base_url: &str) -> AppResult<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::config(format!("{BASE_URL_VAR} must not be empty")));
        }
        let origin = trimmed.strip_suffix('/').unwrap_or(trimmed);
        Ok(Self {
            api_root: format!("{origin}/api"),
        })
    }

    /// Reads `API_BASE_URL`, after loading `.env` if one is present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| AppError::config(format!("{BASE_URL_VAR} must be set")))?;
        Self::from_base_url(&base_url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}
