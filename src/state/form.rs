// src/state/form.rs
use validator::Validate;

use crate::dtos::product::CreateProductRequest;
use crate::error::FieldErrors;
use crate::models::{Category, StockStatus};

/// Unsaved product as typed by the user. Price and category are kept as raw
/// input and coerced when the draft is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub price: String,
    pub stock_status: StockStatus,
    pub category: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            stock_status: StockStatus::InStock,
            category: None,
        }
    }
}

impl Draft {
    /// Coerces and checks the draft. Any failure comes back as inline
    /// messages keyed by field name.
    pub fn validate(&self) -> Result<CreateProductRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let price = match coerce_price(&self.price) {
            Some(price) => price,
            None => {
                push(&mut errors, "price", "Expected number");
                0.0
            }
        };

        let category_id = self
            .category
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);

        let request = CreateProductRequest {
            name: self.name.clone(),
            price,
            stock_status: self.stock_status,
            category_id,
        };

        if let Err(report) = request.validate() {
            for (field, failures) in report.field_errors() {
                for failure in failures.iter() {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    push(&mut errors, &field, &message);
                }
            }
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}

// Blank input counts as zero, like a cleared number field.
fn coerce_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|p| p.is_finite())
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Creation form: the draft, the category choices and inline errors.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub draft: Draft,
    categories: Vec<Category>,
    errors: FieldErrors,
    submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Adds server-reported field errors to the inline ones.
    pub fn merge_errors(&mut self, errors: &FieldErrors) {
        for (field, messages) in errors {
            for message in messages {
                push(&mut self.errors, field, message);
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn select_category(&mut self, id: i64) {
        self.draft.category = Some(id.to_string());
    }

    /// Back to blank defaults after a successful create.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
    }
}
