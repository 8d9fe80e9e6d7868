//! `vendora-client`: the API gateway client.
//!
//! One HTTP client for the whole app: attaches the bearer token, decodes the
//! backend's (heterogeneous) response envelopes once at the boundary, and
//! maps status codes into a small error taxonomy. Everything above this
//! crate works with stable internal types only.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{ApiClient, SupplierPage};
pub use error::ApiError;
