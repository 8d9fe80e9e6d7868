//! Flat row model for products already linked to a supplier, plus the
//! aggregate statistics the detail view displays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::AssignmentCategory;

/// One product↔supplier association, flattened from the backend's nested
/// envelope into what the table renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: Option<f64>,
    pub quantity: u64,
    pub supplier_type: AssignmentCategory,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
}

impl AssignedProduct {
    /// Whether the embedded product resolved to a real record.
    ///
    /// Orphaned or partially-migrated join rows come back with a missing id
    /// or a placeholder name; those are dropped before display.
    pub fn is_resolvable(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.name.eq_ignore_ascii_case("unknown product")
    }
}

/// Aggregates shown above the assigned-products table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub total_quantity: u64,
    /// Σ cost_price × quantity.
    pub inventory_value: f64,
}

impl AssignmentStats {
    pub fn from_rows(rows: &[AssignedProduct]) -> Self {
        let mut stats = Self {
            total_products: rows.len(),
            ..Self::default()
        };
        for row in rows {
            if row.quantity > 0 {
                stats.in_stock += 1;
            }
            stats.total_quantity += row.quantity;
            stats.inventory_value += row.cost_price * row.quantity as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, cost: f64, qty: u64) -> AssignedProduct {
        AssignedProduct {
            id: id.to_string(),
            name: name.to_string(),
            sku: None,
            category: None,
            cost_price: cost,
            selling_price: None,
            quantity: qty,
            supplier_type: AssignmentCategory::Secondary,
            assigned_at: None,
        }
    }

    #[test]
    fn orphaned_rows_are_not_resolvable() {
        assert!(row("p-1", "Oat Milk", 2.0, 3).is_resolvable());
        assert!(!row("", "Oat Milk", 2.0, 3).is_resolvable());
        assert!(!row("p-1", "   ", 2.0, 3).is_resolvable());
        assert!(!row("p-1", "Unknown Product", 2.0, 3).is_resolvable());
    }

    #[test]
    fn stats_aggregate_count_stock_quantity_and_value() {
        let rows = vec![
            row("p-1", "Oat Milk", 2.50, 4),
            row("p-2", "Espresso Beans", 10.0, 0),
            row("p-3", "Paper Cups", 0.10, 200),
        ];
        let stats = AssignmentStats::from_rows(&rows);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.total_quantity, 204);
        assert!((stats.inventory_value - (2.50 * 4.0 + 0.10 * 200.0)).abs() < 1e-9);
    }

    #[test]
    fn stats_on_no_rows_are_all_zero() {
        assert_eq!(AssignmentStats::from_rows(&[]), AssignmentStats::default());
    }
}
