//! Product assignment view model: attach a batch of catalog products to one
//! supplier in a single all-or-nothing submission.

use vendora_client::{ApiClient, ApiError};
use vendora_core::{DomainError, StoreId};
use vendora_products::{AssignmentCategory, AssignmentDraft, Product};

/// State behind the "assign products" page.
#[derive(Debug)]
pub struct AssignmentView {
    supplier_id: String,
    store_id: StoreId,
    catalog: Vec<Product>,
    search_term: String,
    draft: AssignmentDraft,
    submitting: bool,
    error: Option<String>,
}

impl AssignmentView {
    pub fn new(supplier_id: impl Into<String>, store_id: StoreId) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            store_id,
            catalog: Vec::new(),
            search_term: String::new(),
            draft: AssignmentDraft::new(),
            submitting: false,
            error: None,
        }
    }

    /// Load the full catalog for the store (single unpaginated fetch).
    pub async fn load_catalog(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.catalog = client.list_products(self.store_id).await?;
        Ok(())
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Catalog rows matching the search box. Selection is untouched by
    /// filtering: a selected product that scrolls out of the filter stays
    /// selected.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .iter()
            .filter(|p| p.matches_search(&self.search_term))
            .collect()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn toggle(&mut self, product_id: &str) -> bool {
        self.error = None;
        self.draft.toggle(product_id)
    }

    pub fn set_cost_price(&mut self, product_id: &str, cost_price: f64) {
        self.draft.set_cost_price(product_id, cost_price);
    }

    pub fn set_category(&mut self, product_id: &str, category: AssignmentCategory) {
        self.draft.set_category(product_id, category);
    }

    pub fn is_selected(&self, product_id: &str) -> bool {
        self.draft.is_selected(product_id)
    }

    pub fn selected_count(&self) -> usize {
        self.draft.len()
    }

    /// Submit button is disabled while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current user-facing error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and post the batch.
    ///
    /// A validation failure never reaches the wire; a server failure keeps
    /// the draft so the operator can correct and retry. `Ok(())` means the
    /// caller should navigate back to the supplier list.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), DomainError> {
        if self.submitting {
            return Ok(());
        }

        let batch = match self.draft.clone().into_batch(&self.supplier_id, self.store_id) {
            Ok(batch) => batch,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.submitting = true;
        let result = client.assign_products(&batch).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.error = None;
                self.draft = AssignmentDraft::new();
                Ok(())
            }
            Err(e) => {
                // Server message verbatim when it sent one.
                self.error = Some(e.to_string());
                Err(DomainError::validation(e.to_string()))
            }
        }
    }
}
