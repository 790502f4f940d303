//! Admin client for a remote product catalog: a typed API client, the
//! listing and creation-form state, and text rendering for the terminal.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod shell;
pub mod state;
pub mod view;

pub use config::ApiConfig;
pub use error::{AppError, AppResult};
pub use routes::{CatalogApi, HttpCatalogApi};
