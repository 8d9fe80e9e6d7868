//! Supplier record, create/update draft, and the mutability invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendora_core::{DomainError, DomainResult, StoreId};

use crate::address::Address;

/// Longest accepted supplier reference.
const MAX_REF_LEN: usize = 50;

/// Whether a supplier reference can be used in mutation URLs.
///
/// Accepts `[A-Za-z0-9_-]`, 1..=50 characters, nothing else. Seeded sample
/// rows carry decorative ids (spaces, punctuation) and must never be edited
/// or deleted through the UI; this predicate is the gate.
pub fn is_valid_supplier_ref(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_REF_LEN
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// A supplier as held in client state.
///
/// `supplier_id` is the caller-assigned slug; `id` is the backend-assigned
/// identity when the backend reports one. At least one of the two must be
/// valid for the record to be mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "supplier_id", default)]
    pub supplier_id: String,
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Composed display address, `"{street}, {city}, {state} {zip}"`.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    pub store_id: StoreId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Client-synthesized placeholder pending a list refresh.
    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    pub is_temporary: bool,
}

impl Supplier {
    /// The reference to use in mutation URLs, if any.
    ///
    /// Prefers the backend-assigned `id`; falls back to `supplier_id`.
    pub fn mutable_ref(&self) -> Option<&str> {
        if let Some(id) = self.id.as_deref()
            && is_valid_supplier_ref(id)
        {
            return Some(id);
        }
        if is_valid_supplier_ref(&self.supplier_id) {
            return Some(&self.supplier_id);
        }
        None
    }

    /// Whether edit/delete controls may be enabled for this record.
    pub fn is_mutable(&self) -> bool {
        self.mutable_ref().is_some()
    }

    /// Display address, recomposed from parts when the composed string is
    /// missing.
    pub fn display_address(&self) -> Option<String> {
        if let Some(addr) = self.address.as_deref()
            && !addr.trim().is_empty()
        {
            return Some(addr.to_string());
        }
        match (&self.street_address, &self.city, &self.state, &self.zip_code) {
            (Some(street), Some(city), Some(state), Some(zip)) => {
                Some(Address::new(street, city, state, zip).compose())
            }
            _ => None,
        }
    }
}

/// Form payload for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub store_id: StoreId,
}

impl SupplierDraft {
    pub fn new(name: impl Into<String>, store_id: StoreId) -> Self {
        Self {
            name: name.into(),
            store_id,
            ..Self::default()
        }
    }

    /// Validate before any request is sent.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if let Some(email) = self.email.as_deref()
            && !email.trim().is_empty()
            && !is_plausible_email(email)
        {
            return Err(DomainError::validation(format!(
                "invalid email address: {email}"
            )));
        }
        Ok(())
    }

    /// Compose the display address from parts when all four are present,
    /// keeping any explicitly set composed string otherwise.
    pub fn with_composed_address(mut self) -> Self {
        if self.address.is_none()
            && let (Some(street), Some(city), Some(state), Some(zip)) =
                (&self.street_address, &self.city, &self.state, &self.zip_code)
        {
            self.address = Some(Address::new(street, city, state, zip).compose());
        }
        self
    }
}

/// `local@domain.tld` with no whitespace; same shape check the form applies.
fn is_plausible_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn supplier(supplier_id: &str, id: Option<&str>) -> Supplier {
        Supplier {
            supplier_id: supplier_id.to_string(),
            id: id.map(str::to_string),
            name: "Acme Wholesale".to_string(),
            email: None,
            phone: None,
            address: None,
            street_address: None,
            city: None,
            state: None,
            zip_code: None,
            store_id: StoreId::new(),
            created_at: None,
            updated_at: None,
            is_temporary: false,
        }
    }

    #[test]
    fn valid_refs_are_slug_shaped() {
        assert!(is_valid_supplier_ref("acme-01"));
        assert!(is_valid_supplier_ref("A_b-3"));
        assert!(is_valid_supplier_ref(&"x".repeat(50)));

        assert!(!is_valid_supplier_ref(""));
        assert!(!is_valid_supplier_ref("has space"));
        assert!(!is_valid_supplier_ref("tab\tchar"));
        assert!(!is_valid_supplier_ref("emoji🙂"));
        assert!(!is_valid_supplier_ref(&"x".repeat(51)));
    }

    #[test]
    fn mutable_ref_prefers_backend_id() {
        let s = supplier("slug-1", Some("backend-9"));
        assert_eq!(s.mutable_ref(), Some("backend-9"));
    }

    #[test]
    fn mutable_ref_falls_back_to_supplier_id() {
        let s = supplier("slug-1", Some("sample row #3"));
        assert_eq!(s.mutable_ref(), Some("slug-1"));
    }

    #[test]
    fn sample_rows_are_not_mutable() {
        let s = supplier("Sample Vendor (seeded)", None);
        assert!(!s.is_mutable());
    }

    #[test]
    fn display_address_prefers_composed_string() {
        let mut s = supplier("slug-1", None);
        s.address = Some("9 Elm Rd, Dover, DE 19901".to_string());
        s.street_address = Some("ignored".to_string());
        assert_eq!(s.display_address().as_deref(), Some("9 Elm Rd, Dover, DE 19901"));
    }

    #[test]
    fn display_address_recomposes_from_parts() {
        let mut s = supplier("slug-1", None);
        s.street_address = Some("1 Main St".to_string());
        s.city = Some("Springfield".to_string());
        s.state = Some("IL".to_string());
        s.zip_code = Some("62704".to_string());
        assert_eq!(
            s.display_address().as_deref(),
            Some("1 Main St, Springfield, IL 62704")
        );
    }

    #[test]
    fn draft_requires_a_name() {
        let draft = SupplierDraft::new("   ", StoreId::new());
        let err = draft.validate().unwrap_err();
        match err {
            vendora_core::DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn draft_rejects_malformed_email() {
        let mut draft = SupplierDraft::new("Acme", StoreId::new());
        for bad in ["plainaddress", "a @b.com", "a@b", "a@@b.com", "@b.com", "a@.com"] {
            draft.email = Some(bad.to_string());
            assert!(draft.validate().is_err(), "accepted {bad:?}");
        }
        draft.email = Some("ops@acme-wholesale.example".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn with_composed_address_fills_only_missing_address() {
        let mut draft = SupplierDraft::new("Acme", StoreId::new());
        draft.street_address = Some("1 Main St".to_string());
        draft.city = Some("Springfield".to_string());
        draft.state = Some("IL".to_string());
        draft.zip_code = Some("62704".to_string());
        let composed = draft.clone().with_composed_address();
        assert_eq!(
            composed.address.as_deref(),
            Some("1 Main St, Springfield, IL 62704")
        );

        draft.address = Some("custom".to_string());
        let kept = draft.with_composed_address();
        assert_eq!(kept.address.as_deref(), Some("custom"));
    }

    #[test]
    fn supplier_deserializes_underscore_id_alias() {
        let s: Supplier = serde_json::from_str(
            r#"{
                "supplier_id": "acme-01",
                "_id": "66b2f0",
                "name": "Acme",
                "storeId": "00000000-0000-0000-0000-000000000000"
            }"#,
        )
        .unwrap();
        assert_eq!(s.id.as_deref(), Some("66b2f0"));
        assert!(!s.is_temporary);
    }

    proptest! {
        #[test]
        fn slug_chars_are_always_valid(s in "[A-Za-z0-9_-]{1,50}") {
            prop_assert!(is_valid_supplier_ref(&s));
        }

        #[test]
        fn whitespace_is_never_valid(s in "[A-Za-z0-9_-]{0,20} [A-Za-z0-9_-]{0,20}") {
            prop_assert!(!is_valid_supplier_ref(&s));
        }
    }
}
