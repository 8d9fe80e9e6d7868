//! Catalog product record.

use serde::{Deserialize, Serialize};

use vendora_core::StoreId;

/// A catalog item as the backend lists it for a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// SKU / PLU / UPC, whichever the store tracks.
    #[serde(default, alias = "sku")]
    pub plu_upc: Option<String>,
    #[serde(default)]
    pub msrp_price: Option<f64>,
    #[serde(default)]
    pub single_item_selling_price: Option<f64>,
    /// Units in stock.
    #[serde(default)]
    pub item_quantity: u64,
    pub store_id: StoreId,
}

impl Product {
    /// Case-insensitive substring match over name, category and SKU, used by
    /// the assignment view's catalog search box.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&term);
        hit(&self.name)
            || self.category.as_deref().is_some_and(hit)
            || self.plu_upc.as_deref().is_some_and(hit)
    }
}
