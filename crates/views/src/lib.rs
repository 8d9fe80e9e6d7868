//! `vendora-views`: headless view models for the supplier workflow.
//!
//! Each type here holds exactly the state and derivations a renderer needs:
//! what rows are visible, which controls are disabled and why, what the
//! empty state says. No HTML, no terminal drawing.

pub mod assign;
pub mod assigned;
pub mod csv;
pub mod list;
pub mod page_window;
pub mod workspace;

pub use assign::AssignmentView;
pub use assigned::AssignedProductsView;
pub use csv::{CsvExport, export_suppliers};
pub use list::{CountState, EmptyState, Row, RowCounts, SupplierListView, count_ref, fetch_row_counts};
pub use page_window::PageWindow;
pub use workspace::Workspace;
