//! Two-view navigation: supplier list ⇄ products of one supplier.

use vendora_suppliers::Supplier;

/// Which of the two views is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Suppliers,
    /// Detail view; carries the supplier it was opened for.
    Products { supplier: Supplier },
}

/// The two-state navigation machine. Starts on the supplier list; entering
/// the products view requires a selected supplier, leaving clears it.
#[derive(Debug)]
pub struct Workspace {
    view: View,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            view: View::Suppliers,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn open_products(&mut self, supplier: Supplier) {
        self.view = View::Products { supplier };
    }

    pub fn back_to_suppliers(&mut self) {
        self.view = View::Suppliers;
    }

    pub fn selected_supplier(&self) -> Option<&Supplier> {
        match &self.view {
            View::Products { supplier } => Some(supplier),
            View::Suppliers => None,
        }
    }
}
