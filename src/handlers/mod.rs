pub mod browser;
pub mod dashboard;
pub mod form;

#[cfg(test)]
pub(crate) mod fake;

pub use browser::CatalogBrowser;
pub use dashboard::Dashboard;
pub use form::{ProductCreator, SubmitOutcome};

/// Categories requested for filter and form choices.
pub const CATEGORY_LIMIT: u32 = 200;

/// Transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}
