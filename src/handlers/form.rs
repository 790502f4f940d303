// src/handlers/form.rs
use tracing::{error, info, instrument, warn};

use super::{Notice, CATEGORY_LIMIT};
use crate::models::Product;
use crate::routes::CatalogApi;
use crate::state::FormState;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed; errors are on the form and nothing was sent.
    Invalid,
    Created {
        product: Option<Product>,
        notice: Notice,
    },
    Failed(Notice),
}

/// Product creation form bound to a catalog backend.
pub struct ProductCreator<A> {
    api: A,
    state: FormState,
}

impl<A: CatalogApi> ProductCreator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: FormState::new(),
        }
    }

    /// Form with its category choices fetched.
    pub async fn mount(api: A) -> Self {
        let mut form = Self::new(api);
        form.load_categories().await;
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    #[instrument(skip(self))]
    pub async fn load_categories(&mut self) {
        match self.api.list_categories(CATEGORY_LIMIT).await {
            Ok(categories) => self.state.set_categories(categories),
            Err(e) => {
                warn!(?e, "Category lookup failed, form has no category choices");
                self.state.set_categories(Vec::new());
            }
        }
    }

    #[instrument(skip(self), fields(name = %self.state.draft.name))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.state.draft.validate() {
            Ok(request) => request,
            Err(errors) => {
                self.state.set_errors(errors);
                return SubmitOutcome::Invalid;
            }
        };
        self.state.set_errors(Default::default());

        self.state.set_submitting(true);
        let result = self.api.create_product(&request).await;
        self.state.set_submitting(false);

        match result {
            Ok(product) => {
                info!(id = product.as_ref().map(|p| p.id), "Product created");
                self.state.reset();
                SubmitOutcome::Created {
                    product,
                    notice: Notice::Success("Product created".to_string()),
                }
            }
            Err(e) => {
                error!(?e, "Failed to create product");
                if let Some(errors) = e.field_errors() {
                    self.state.merge_errors(errors);
                }
                SubmitOutcome::Failed(Notice::Error(e.user_message("Failed to create product")))
            }
        }
    }
}
