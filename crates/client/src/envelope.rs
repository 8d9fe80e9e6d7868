//! Envelope-variant decoding.
//!
//! The backend wraps the same payloads in different nesting depths depending
//! on the route and its age (`data.suppliers` vs `data.data.suppliers`,
//! assignment rows under `data.data` or `data.data.data`). Each payload is
//! decoded here once, through an **ordered** list of shape matchers
//! (deepest nesting first) so the rest of the crate never touches raw JSON.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use vendora_products::{AssignedProduct, AssignmentCategory, Product};
use vendora_suppliers::Supplier;

use crate::error::ApiError;

/// Pagination block as the list endpoint reports it.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Decoded body of the supplier list endpoint.
#[derive(Debug, Deserialize)]
pub struct SupplierListBody {
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

/// Decode a supplier list response, preferring the deeper envelope.
pub fn supplier_list(value: &Value) -> Result<SupplierListBody, ApiError> {
    decode_first("supplier list", value, &[&["data", "data"], &["data"]])
}

#[derive(Debug, Deserialize)]
struct ProductListBody {
    products: Vec<Product>,
}

/// Decode the catalog list response.
pub fn product_list(value: &Value) -> Result<Vec<Product>, ApiError> {
    decode_first::<ProductListBody>("product list", value, &[&["data"], &[]])
        .map(|body| body.products)
}

/// Decode the single-supplier response (`{data: Supplier}`).
pub fn single_supplier(value: &Value) -> Result<Supplier, ApiError> {
    decode_first("supplier", value, &[&["data"], &[]])
}

/// Raw product↔supplier join row as the backend sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssignment {
    #[serde(default)]
    product: Option<RawAssignedProduct>,
    #[serde(default)]
    cost_price: f64,
    /// Assignment category; anything other than `"primary"` is secondary.
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssignedProduct {
    #[serde(default, alias = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "sku")]
    plu_upc: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    single_item_selling_price: Option<f64>,
    #[serde(default)]
    item_quantity: u64,
}

/// Decode assignment rows and flatten them for display.
///
/// Rows whose embedded product did not resolve (missing id, placeholder
/// name) are dropped here; one bad join row must not poison the table.
pub fn assigned_products(value: &Value) -> Result<Vec<AssignedProduct>, ApiError> {
    let raw: Vec<RawAssignment> = decode_first(
        "assigned products",
        value,
        &[&["data", "data", "data"], &["data", "data"]],
    )?;
    Ok(raw.into_iter().filter_map(flatten_row).collect())
}

fn flatten_row(raw: RawAssignment) -> Option<AssignedProduct> {
    let product = raw.product?;
    let supplier_type = match raw.state.as_deref() {
        Some(s) if s.eq_ignore_ascii_case("primary") => AssignmentCategory::Primary,
        _ => AssignmentCategory::Secondary,
    };
    let row = AssignedProduct {
        id: product.id,
        name: product.name,
        sku: product.plu_upc,
        category: product.category,
        cost_price: raw.cost_price,
        selling_price: product.single_item_selling_price,
        quantity: product.item_quantity,
        supplier_type,
        assigned_at: raw.created_at,
    };
    row.is_resolvable().then_some(row)
}

fn decode_at<T: DeserializeOwned>(value: &Value, path: &[&str]) -> Option<T> {
    let mut node = value;
    for key in path {
        node = node.get(key)?;
    }
    serde_json::from_value(node.clone()).ok()
}

fn decode_first<T: DeserializeOwned>(
    what: &str,
    value: &Value,
    paths: &[&[&str]],
) -> Result<T, ApiError> {
    for path in paths {
        if let Some(decoded) = decode_at(value, path) {
            return Ok(decoded);
        }
    }
    Err(ApiError::Decode(format!(
        "no known {what} envelope matched"
    )))
}
