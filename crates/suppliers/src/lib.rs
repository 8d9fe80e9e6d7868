//! `vendora-suppliers`: the supplier record and its invariants.

pub mod address;
pub mod supplier;

pub use address::Address;
pub use supplier::{Supplier, SupplierDraft, is_valid_supplier_ref};
