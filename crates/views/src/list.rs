//! Supplier list view model: client-side search and paging over the server
//! page the container currently holds, plus the per-row product counts.

use std::collections::HashMap;

use vendora_client::ApiClient;
use vendora_suppliers::Supplier;

/// Client-side page size for the filtered table.
const ITEMS_PER_PAGE: usize = 10;

/// Why the table body is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No suppliers at all: show the "add your first vendor" call-to-action.
    NoSuppliers,
    /// Suppliers exist but none match the search: offer to clear it.
    NoMatches,
}

/// One renderable table row.
#[derive(Debug)]
pub struct Row<'a> {
    /// 1-based index within the filtered set (what the index column shows).
    pub display_index: usize,
    pub supplier: &'a Supplier,
    /// Edit/delete enabled only for mutable records.
    pub mutable: bool,
    /// Tooltip text when the actions are disabled.
    pub disabled_reason: Option<&'static str>,
}

/// Search + client-side cursor over the in-memory supplier array.
///
/// Searching never triggers a server fetch; it narrows the page the
/// container already holds and resets the client-side cursor to 1.
#[derive(Debug, Clone)]
pub struct SupplierListView {
    search_term: String,
    cursor: usize,
    items_per_page: usize,
}

impl Default for SupplierListView {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierListView {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            cursor: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Change the search term; the cursor snaps back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.cursor = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, page: usize, filtered_len: usize) {
        self.cursor = page.clamp(1, self.client_pages(filtered_len));
    }

    pub fn next_page(&mut self, filtered_len: usize) {
        self.set_cursor(self.cursor + 1, filtered_len);
    }

    pub fn prev_page(&mut self, filtered_len: usize) {
        self.set_cursor(self.cursor.saturating_sub(1), filtered_len);
    }

    /// Number of client-side pages for a filtered set.
    pub fn client_pages(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.items_per_page).max(1)
    }

    /// The filter predicate: case-insensitive substring over name, email,
    /// phone and address. An empty term matches everything.
    pub fn matches(supplier: &Supplier, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&term);
        hit(&supplier.name)
            || supplier.email.as_deref().is_some_and(hit)
            || supplier.phone.as_deref().is_some_and(hit)
            || supplier.display_address().as_deref().is_some_and(hit)
            || supplier.street_address.as_deref().is_some_and(hit)
    }

    pub fn filtered<'a>(&self, suppliers: &'a [Supplier]) -> Vec<&'a Supplier> {
        suppliers
            .iter()
            .filter(|s| Self::matches(s, &self.search_term))
            .collect()
    }

    /// The rows the current client-side page shows.
    pub fn visible_rows<'a>(&self, suppliers: &'a [Supplier]) -> Vec<Row<'a>> {
        let filtered = self.filtered(suppliers);
        let cursor = self.cursor.clamp(1, self.client_pages(filtered.len()));
        let start = (cursor - 1) * self.items_per_page;

        filtered
            .into_iter()
            .enumerate()
            .skip(start)
            .take(self.items_per_page)
            .map(|(i, supplier)| {
                let mutable = supplier.is_mutable();
                Row {
                    display_index: i + 1,
                    supplier,
                    mutable,
                    disabled_reason: (!mutable)
                        .then_some("sample data cannot be edited or deleted"),
                }
            })
            .collect()
    }

    pub fn empty_state(&self, suppliers: &[Supplier]) -> Option<EmptyState> {
        if suppliers.is_empty() {
            return Some(EmptyState::NoSuppliers);
        }
        if self.filtered(suppliers).is_empty() {
            return Some(EmptyState::NoMatches);
        }
        None
    }
}

/// Loading state of one row's product count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountState {
    /// Fetch in flight: the cell shows a loading badge.
    Loading,
    Ready(usize),
}

/// Per-row assigned-product counts keyed by supplier reference.
#[derive(Debug, Default)]
pub struct RowCounts {
    counts: HashMap<String, CountState>,
}

impl RowCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, supplier_ref: &str) -> Option<CountState> {
        self.counts.get(supplier_ref).copied()
    }

    pub fn mark_loading(&mut self, supplier_refs: &[String]) {
        for r in supplier_refs {
            self.counts.insert(r.clone(), CountState::Loading);
        }
    }

    pub fn apply(&mut self, resolved: HashMap<String, usize>) {
        for (r, n) in resolved {
            self.counts.insert(r, CountState::Ready(n));
        }
    }
}

/// The reference used to fetch a supplier's assigned products.
pub fn count_ref(supplier: &Supplier) -> &str {
    supplier.id.as_deref().unwrap_or(&supplier.supplier_id)
}

/// Fan out one assigned-products request per visible supplier.
///
/// Bounded by the callers' page size (≤ 10 concurrent requests). One row's
/// failure maps to a zero count and never blocks the other rows.
pub async fn fetch_row_counts(
    client: &ApiClient,
    supplier_refs: Vec<String>,
) -> HashMap<String, usize> {
    let mut tasks = tokio::task::JoinSet::new();
    for supplier_ref in supplier_refs {
        let client = client.clone();
        tasks.spawn(async move {
            let count = match client.assigned_products(&supplier_ref).await {
                Ok(rows) => rows.len(),
                Err(e) => {
                    tracing::debug!(supplier = %supplier_ref, error = %e, "count fetch failed");
                    0
                }
            };
            (supplier_ref, count)
        });
    }

    let mut counts = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        if let Ok((supplier_ref, count)) = joined {
            counts.insert(supplier_ref, count);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendora_core::StoreId;

    fn supplier(slug: &str, name: &str, email: Option<&str>) -> Supplier {
        Supplier {
            supplier_id: slug.to_string(),
            id: None,
            name: name.to_string(),
            email: email.map(str::to_string),
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

    fn many(n: usize) -> Vec<Supplier> {
        (0..n)
            .map(|i| supplier(&format!("sup-{i}"), &format!("Vendor {i}"), None))
            .collect()
    }

    #[test]
    fn empty_term_passes_everything_through() {
        let suppliers = many(3);
        let view = SupplierListView::new();
        assert_eq!(view.filtered(&suppliers).len(), 3);
    }

    #[test]
    fn search_matches_each_field_case_insensitively() {
        let mut a = supplier("sup-1", "Acme Wholesale", Some("ops@acme.example"));
        a.phone = Some("+1-555-0101".to_string());
        a.address = Some("1 Main St, Springfield, IL 62704".to_string());
        let b = supplier("sup-2", "Globex", None);
        let suppliers = vec![a, b];

        let mut view = SupplierListView::new();
        for term in ["ACME", "ops@", "555-0101", "springfield"] {
            view.set_search(term);
            let hits = view.filtered(&suppliers);
            assert_eq!(hits.len(), 1, "term {term:?}");
            assert_eq!(hits[0].supplier_id, "sup-1");
        }
    }

    #[test]
    fn changing_the_search_resets_the_cursor() {
        let suppliers = many(25);
        let mut view = SupplierListView::new();
        view.set_cursor(3, suppliers.len());
        assert_eq!(view.cursor(), 3);

        view.set_search("Vendor 1");
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn visible_rows_are_one_client_page_with_running_index() {
        let suppliers = many(25);
        let mut view = SupplierListView::new();
        view.set_cursor(3, suppliers.len());

        let rows = view.visible_rows(&suppliers);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].display_index, 21);
        assert_eq!(rows[0].supplier.supplier_id, "sup-20");
    }

    #[test]
    fn immutable_rows_carry_a_disabled_reason() {
        let sample = supplier("Sample Vendor (seeded)", "Sample", None);
        let real = supplier("sup-1", "Acme", None);
        let view = SupplierListView::new();

        let suppliers = [sample, real];
        let rows = view.visible_rows(&suppliers);
        assert!(!rows[0].mutable);
        assert!(rows[0].disabled_reason.is_some());
        assert!(rows[1].mutable);
        assert!(rows[1].disabled_reason.is_none());
    }

    #[test]
    fn empty_states_distinguish_no_data_from_no_matches() {
        let mut view = SupplierListView::new();
        assert_eq!(view.empty_state(&[]), Some(EmptyState::NoSuppliers));

        let suppliers = many(2);
        assert_eq!(view.empty_state(&suppliers), None);

        view.set_search("no such vendor");
        assert_eq!(view.empty_state(&suppliers), Some(EmptyState::NoMatches));
    }

    #[test]
    fn cursor_is_clamped_to_the_filtered_page_count() {
        let suppliers = many(12);
        let mut view = SupplierListView::new();
        view.set_cursor(99, suppliers.len());
        assert_eq!(view.cursor(), 2);

        view.prev_page(suppliers.len());
        assert_eq!(view.cursor(), 1);
        view.prev_page(suppliers.len());
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn row_counts_track_loading_then_ready() {
        let mut counts = RowCounts::new();
        counts.mark_loading(&["sup-1".to_string(), "sup-2".to_string()]);
        assert_eq!(counts.get("sup-1"), Some(CountState::Loading));

        counts.apply(HashMap::from([("sup-1".to_string(), 4)]));
        assert_eq!(counts.get("sup-1"), Some(CountState::Ready(4)));
        assert_eq!(counts.get("sup-2"), Some(CountState::Loading));
        assert_eq!(counts.get("sup-3"), None);
    }
}
