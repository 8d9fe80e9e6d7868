//! Draft state for the batch "assign products to supplier" workflow.
//!
//! The draft lives entirely on the client until submit: checking a product
//! creates an entry, unchecking destroys it (no stale price survives), and
//! the whole selection is posted as one all-or-nothing batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vendora_core::{DomainError, DomainResult, StoreId};

/// Whether the supplier is the primary or a secondary source for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentCategory {
    Primary,
    #[default]
    Secondary,
}

/// One selected product within a draft.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DraftEntry {
    pub cost_price: f64,
    pub category: AssignmentCategory,
}

/// The selection set: product id → draft entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentDraft {
    entries: BTreeMap<String, DraftEntry>,
}

impl AssignmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, product_id: &str) -> bool {
        self.entries.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check or uncheck a product. Returns whether it is selected afterwards.
    ///
    /// Unchecking removes the entry entirely so a later re-check starts from
    /// defaults again.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.entries.remove(product_id).is_some() {
            false
        } else {
            self.entries
                .insert(product_id.to_string(), DraftEntry::default());
            true
        }
    }

    /// Set the cost price for a selected product. No-op when not selected.
    pub fn set_cost_price(&mut self, product_id: &str, cost_price: f64) {
        if let Some(entry) = self.entries.get_mut(product_id) {
            entry.cost_price = cost_price;
        }
    }

    /// Set the category for a selected product. No-op when not selected.
    pub fn set_category(&mut self, product_id: &str, category: AssignmentCategory) {
        if let Some(entry) = self.entries.get_mut(product_id) {
            entry.category = category;
        }
    }

    pub fn entry(&self, product_id: &str) -> Option<&DraftEntry> {
        self.entries.get(product_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DraftEntry)> {
        self.entries.iter().map(|(id, e)| (id.as_str(), e))
    }

    /// The batch is submittable only when at least one product is selected
    /// and every selected product has a positive cost price.
    pub fn validate(&self) -> DomainResult<()> {
        if self.entries.is_empty() {
            return Err(DomainError::validation("no products selected"));
        }
        for (product_id, entry) in &self.entries {
            if !(entry.cost_price > 0.0) {
                return Err(DomainError::validation(format!(
                    "cost price must be greater than zero for product {product_id}"
                )));
            }
        }
        Ok(())
    }

    /// Build the submit payload. Fails with the same errors as [`validate`].
    ///
    /// [`validate`]: AssignmentDraft::validate
    pub fn into_batch(
        self,
        supplier_id: impl Into<String>,
        store_id: StoreId,
    ) -> DomainResult<AssignProductsRequest> {
        self.validate()?;
        Ok(AssignProductsRequest {
            supplier_id: supplier_id.into(),
            store_id,
            products: self
                .entries
                .into_iter()
                .map(|(product_id, e)| AssignmentEntry {
                    product_id,
                    cost_price: e.cost_price,
                    category: e.category,
                })
                .collect(),
        })
    }
}

/// Wire payload for `POST /supplier/assign-products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignProductsRequest {
    pub supplier_id: String,
    pub store_id: StoreId,
    pub products: Vec<AssignmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentEntry {
    pub product_id: String,
    pub cost_price: f64,
    pub category: AssignmentCategory,
}
