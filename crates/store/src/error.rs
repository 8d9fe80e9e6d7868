//! Store operation errors.

use thiserror::Error;

use vendora_client::ApiError;
use vendora_core::DomainError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Client-side validation failed; no request was sent.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The supplier carries no valid reference and must not be mutated
    /// (seeded/sample rows).
    #[error("supplier has no valid id and cannot be modified")]
    ImmutableSupplier,

    /// The request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The caller cancelled; the result was discarded before reaching state.
    #[error("operation cancelled")]
    Cancelled,
}
