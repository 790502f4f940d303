// src/error.rs
use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Inline, per-field validation messages keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog API returned {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
        errors: FieldErrors,
    },

    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Error body shape the catalog API uses for 4xx/5xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: FieldErrors,
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    /// Builds an `Api` error from a status and raw response body. Bodies that
    /// are not the JSON error shape keep the status and drop the message.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        AppError::Api {
            status,
            message: parsed.message.filter(|m| !m.trim().is_empty()),
            errors: parsed.errors,
        }
    }

    /// Message to show the user: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api { message: Some(msg), .. } => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Field errors carried by the failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Api { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}
