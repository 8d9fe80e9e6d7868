//! `vendora-products`: catalog records, assignment drafts, assigned rows.

pub mod assigned;
pub mod assignment;
pub mod product;

pub use assigned::{AssignedProduct, AssignmentStats};
pub use assignment::{AssignProductsRequest, AssignmentCategory, AssignmentDraft, AssignmentEntry};
pub use product::Product;
