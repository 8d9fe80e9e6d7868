//! The injected state container.

use std::sync::{Mutex, mpsc};
use std::time::Duration;

use vendora_client::ApiClient;
use vendora_core::StoreId;
use vendora_suppliers::{Supplier, SupplierDraft, is_valid_supplier_ref};

use crate::action::{SupplierAction, reduce};
use crate::cancel::CancelToken;
use crate::error::StoreError;
use crate::state::{OpKind, SupplierState};

/// A subscription to applied actions.
///
/// Each subscriber gets a copy of every action, in application order.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<SupplierAction>,
}

impl Subscription {
    pub fn recv(&self) -> Result<SupplierAction, mpsc::RecvError> {
        self.receiver.recv()
    }

    pub fn try_recv(&self) -> Result<SupplierAction, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<SupplierAction, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Single source of truth for the supplier collection of one store.
///
/// Locks are held only while applying an action, never across an await.
pub struct SupplierStore {
    client: ApiClient,
    state: Mutex<SupplierState>,
    subscribers: Mutex<Vec<mpsc::Sender<SupplierAction>>>,
}

impl SupplierStore {
    pub fn new(client: ApiClient) -> Self {
        Self::with_page_size(client, 10)
    }

    pub fn with_page_size(client: ApiClient, limit: u32) -> Self {
        Self {
            client,
            state: Mutex::new(SupplierState::new(limit)),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current state, cloned. Cheap enough at one page of suppliers.
    pub fn snapshot(&self) -> SupplierState {
        lock_recovering(&self.state).clone()
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }
        Subscription { receiver: rx }
    }

    fn dispatch(&self, action: SupplierAction) {
        {
            let mut state = lock_recovering(&self.state);
            reduce(&mut state, &action);
        }
        if let Ok(mut subs) = self.subscribers.lock() {
            // Drop dead subscribers while publishing.
            subs.retain(|tx| tx.send(action.clone()).is_ok());
        }
    }

    /// Fetch one server page and replace the collection.
    ///
    /// On failure the prior data stays; only the list error is recorded.
    pub async fn fetch_suppliers(
        &self,
        store_id: StoreId,
        page: u32,
        limit: u32,
        cancel: &CancelToken,
    ) -> Result<(), StoreError> {
        self.dispatch(SupplierAction::Pending(OpKind::List));

        match self.client.list_suppliers(store_id, page, limit).await {
            Ok(server_page) => {
                if cancel.is_cancelled() {
                    return Err(self.cancelled(OpKind::List));
                }
                self.dispatch(SupplierAction::ListLoaded {
                    suppliers: server_page.suppliers,
                    page: server_page.page,
                });
                Ok(())
            }
            Err(e) => {
                if cancel.is_cancelled() {
                    return Err(self.cancelled(OpKind::List));
                }
                self.dispatch(SupplierAction::Failed {
                    kind: OpKind::List,
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Create a supplier, then refetch the list for the same store.
    ///
    /// Returns a transient placeholder record (`is_temporary`) for UI
    /// continuity; it is never inserted into state. Server-assigned
    /// identity arrives with the refetched list.
    pub async fn create_supplier(
        &self,
        draft: SupplierDraft,
        cancel: &CancelToken,
    ) -> Result<Supplier, StoreError> {
        draft.validate()?;
        let draft = draft.with_composed_address();

        self.dispatch(SupplierAction::Pending(OpKind::Create));
        if let Err(e) = self.client.create_supplier(&draft).await {
            return Err(self.fail(OpKind::Create, e, cancel));
        }
        if cancel.is_cancelled() {
            return Err(self.cancelled(OpKind::Create));
        }
        self.dispatch(SupplierAction::MutationSucceeded(OpKind::Create));

        let temporary = temporary_record(&draft);
        self.refetch(draft.store_id, cancel).await;
        Ok(temporary)
    }

    /// Update a supplier, then refetch the list for the draft's store.
    ///
    /// Rejects references that fail the mutability invariant before any
    /// request is sent.
    pub async fn update_supplier(
        &self,
        id: &str,
        draft: SupplierDraft,
        cancel: &CancelToken,
    ) -> Result<(), StoreError> {
        if !is_valid_supplier_ref(id) {
            return Err(StoreError::ImmutableSupplier);
        }
        draft.validate()?;
        let draft = draft.with_composed_address();

        self.dispatch(SupplierAction::Pending(OpKind::Update));
        if let Err(e) = self.client.update_supplier(id, &draft).await {
            return Err(self.fail(OpKind::Update, e, cancel));
        }
        if cancel.is_cancelled() {
            return Err(self.cancelled(OpKind::Update));
        }
        self.dispatch(SupplierAction::MutationSucceeded(OpKind::Update));

        self.refetch(draft.store_id, cancel).await;
        Ok(())
    }

    /// Delete a supplier, then refetch the list for its store.
    pub async fn delete_supplier(
        &self,
        id: &str,
        store_id: StoreId,
        cancel: &CancelToken,
    ) -> Result<(), StoreError> {
        if !is_valid_supplier_ref(id) {
            return Err(StoreError::ImmutableSupplier);
        }

        self.dispatch(SupplierAction::Pending(OpKind::Delete));
        if let Err(e) = self.client.delete_supplier(id).await {
            return Err(self.fail(OpKind::Delete, e, cancel));
        }
        if cancel.is_cancelled() {
            return Err(self.cancelled(OpKind::Delete));
        }
        self.dispatch(SupplierAction::MutationSucceeded(OpKind::Delete));

        self.refetch(store_id, cancel).await;
        Ok(())
    }

    /// Exactly one follow-up list fetch per successful mutation, on the
    /// page the container currently shows. A refetch failure is recorded as
    /// the list error; the mutation itself already succeeded.
    async fn refetch(&self, store_id: StoreId, cancel: &CancelToken) {
        let page = lock_recovering(&self.state).page;
        if let Err(e) = self
            .fetch_suppliers(store_id, page.page, page.limit, cancel)
            .await
        {
            tracing::warn!(error = %e, "post-mutation refetch failed");
        }
    }

    fn fail(&self, kind: OpKind, error: vendora_client::ApiError, cancel: &CancelToken) -> StoreError {
        if cancel.is_cancelled() {
            return self.cancelled(kind);
        }
        self.dispatch(SupplierAction::Failed {
            kind,
            error: error.to_string(),
        });
        error.into()
    }

    /// Terminal action for a cancelled operation: the kind must not stay
    /// loading after its result has been discarded.
    fn cancelled(&self, kind: OpKind) -> StoreError {
        self.dispatch(SupplierAction::Cancelled(kind));
        StoreError::Cancelled
    }
}

/// Take the lock, recovering the inner value if a holder panicked.
fn lock_recovering<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn temporary_record(draft: &SupplierDraft) -> Supplier {
    Supplier {
        supplier_id: format!("temp-{}", uuid::Uuid::now_v7()),
        id: None,
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        street_address: draft.street_address.clone(),
        city: draft.city.clone(),
        state: draft.state.clone(),
        zip_code: draft.zip_code.clone(),
        store_id: draft.store_id,
        created_at: None,
        updated_at: None,
        is_temporary: true,
    }
}
