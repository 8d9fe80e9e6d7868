//! Actions and the pure reducer.

use vendora_core::Page;
use vendora_suppliers::Supplier;

use crate::state::{OpKind, OpStatus, SupplierState};

/// Everything that can happen to the supplier state.
///
/// Subscribers receive a copy of each action after it has been applied.
#[derive(Debug, Clone)]
pub enum SupplierAction {
    /// An operation of this kind started.
    Pending(OpKind),
    /// The list fetch resolved; the collection is replaced wholesale.
    ListLoaded {
        suppliers: Vec<Supplier>,
        page: Page,
    },
    /// A create/update/delete resolved (the follow-up refetch reports the
    /// actual collection change via `ListLoaded`).
    MutationSucceeded(OpKind),
    /// An operation failed; prior data stays intact.
    Failed { kind: OpKind, error: String },
    /// The caller cancelled; the result (if any) was discarded, and the
    /// kind returns to idle rather than staying loading forever.
    Cancelled(OpKind),
}

/// Evolve state from one action. Pure, no I/O.
pub fn reduce(state: &mut SupplierState, action: &SupplierAction) {
    match action {
        SupplierAction::Pending(kind) => {
            state.set_status(*kind, OpStatus::Loading);
        }
        SupplierAction::ListLoaded { suppliers, page } => {
            state.suppliers = suppliers.clone();
            state.page = *page;
            state.set_status(OpKind::List, OpStatus::Idle);
        }
        SupplierAction::MutationSucceeded(kind) => {
            state.set_status(*kind, OpStatus::Idle);
        }
        SupplierAction::Failed { kind, error } => {
            state.set_status(*kind, OpStatus::Failed(error.clone()));
        }
        SupplierAction::Cancelled(kind) => {
            state.set_status(*kind, OpStatus::Idle);
        }
    }
}
