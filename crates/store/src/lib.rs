//! `vendora-store`: the supplier application-state container.
//!
//! An injected container rather than an ambient global: actions go
//! through a pure reducer, subscribers get a copy of every
//! applied action, and async operations follow the mutate-then-refetch
//! discipline (the list is only ever replaced by what the server returned,
//! never locally patched).

pub mod action;
pub mod cancel;
pub mod error;
pub mod state;
pub mod store;

pub use action::SupplierAction;
pub use cancel::CancelToken;
pub use error::StoreError;
pub use state::{OpKind, OpStatus, SupplierState};
pub use store::{Subscription, SupplierStore};
