//! Supplier collection state and per-operation status.

use vendora_core::Page;
use vendora_suppliers::Supplier;

/// The four async operation kinds the container runs.
///
/// Loading/error state is keyed per kind, so a slow list fetch does not
/// masquerade as a create in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpKind {
    List,
    Create,
    Update,
    Delete,
}

impl OpKind {
    fn index(self) -> usize {
        match self {
            OpKind::List => 0,
            OpKind::Create => 1,
            OpKind::Update => 2,
            OpKind::Delete => 3,
        }
    }
}

/// Status of one operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// State held by the container.
#[derive(Debug, Clone)]
pub struct SupplierState {
    /// The current server page of suppliers (source of truth).
    pub suppliers: Vec<Supplier>,
    pub page: Page,
    ops: [OpStatus; 4],
}

impl SupplierState {
    pub fn new(limit: u32) -> Self {
        Self {
            suppliers: Vec::new(),
            page: Page::first(limit),
            ops: Default::default(),
        }
    }

    pub fn status(&self, kind: OpKind) -> &OpStatus {
        &self.ops[kind.index()]
    }

    pub fn is_loading(&self, kind: OpKind) -> bool {
        matches!(self.status(kind), OpStatus::Loading)
    }

    /// Error string for one kind, if its last run failed.
    pub fn error(&self, kind: OpKind) -> Option<&str> {
        match self.status(kind) {
            OpStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub(crate) fn set_status(&mut self, kind: OpKind, status: OpStatus) {
        self.ops[kind.index()] = status;
    }
}

impl Default for SupplierState {
    fn default() -> Self {
        Self::new(10)
    }
}
