pub mod browser;
pub mod form;

pub use browser::{BrowserState, Filters, ListRequest, PendingDelete};
pub use form::{Draft, FormState};
