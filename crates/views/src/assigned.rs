//! Assigned-products detail view: the products linked to one supplier and
//! their aggregate statistics.

use vendora_client::{ApiClient, ApiError};
use vendora_products::{AssignedProduct, AssignmentStats};

#[derive(Debug, Default)]
pub struct AssignedProductsView {
    supplier_ref: String,
    rows: Vec<AssignedProduct>,
    stats: AssignmentStats,
    error: Option<String>,
}

impl AssignedProductsView {
    pub fn new(supplier_ref: impl Into<String>) -> Self {
        Self {
            supplier_ref: supplier_ref.into(),
            ..Self::default()
        }
    }

    /// Fetch and normalize the supplier's assignments.
    ///
    /// "Nothing assigned yet" (the backend's 404) is a legitimate empty
    /// table, not an error banner; any other failure sets the error.
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        match client.assigned_products(&self.supplier_ref).await {
            Ok(rows) => {
                self.stats = AssignmentStats::from_rows(&rows);
                self.rows = rows;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn rows(&self) -> &[AssignedProduct] {
        &self.rows
    }

    pub fn stats(&self) -> AssignmentStats {
        self.stats
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
