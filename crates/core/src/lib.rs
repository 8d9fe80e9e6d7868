//! `vendora-core`: shared building blocks for the supplier client.
//!
//! This crate contains **pure domain** primitives (no I/O, no HTTP).

pub mod error;
pub mod id;
pub mod page;

pub use error::{DomainError, DomainResult};
pub use id::StoreId;
pub use page::Page;
