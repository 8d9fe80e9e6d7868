use anyhow::Context;

use vendora_client::ApiClient;
use vendora_core::StoreId;
use vendora_store::{CancelToken, SupplierStore};
use vendora_views::{SupplierListView, count_ref, export_suppliers, fetch_row_counts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vendora_observability::init();

    let base_url = std::env::var("VENDORA_API_URL").unwrap_or_else(|_| {
        tracing::warn!("VENDORA_API_URL not set; using local dev default");
        "http://127.0.0.1:8080/api".to_string()
    });
    let token = std::env::var("VENDORA_API_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("VENDORA_API_TOKEN not set; requests will be unauthenticated");
        String::new()
    });
    let store_id: StoreId = std::env::var("VENDORA_STORE_ID")
        .context("VENDORA_STORE_ID must be set")?
        .parse()
        .context("VENDORA_STORE_ID is not a valid store id")?;

    let client = ApiClient::new(base_url, &token)?;
    let store = SupplierStore::new(client.clone());

    // Headless demo: first page, counts for the visible rows, CSV summary.
    let cancel = CancelToken::new();
    store.fetch_suppliers(store_id, 1, 10, &cancel).await?;

    let state = store.snapshot();
    tracing::info!(
        suppliers = state.suppliers.len(),
        total = state.page.total,
        pages = state.page.total_pages(),
        "fetched supplier list"
    );

    let list = SupplierListView::new();
    let refs: Vec<String> = list
        .visible_rows(&state.suppliers)
        .iter()
        .map(|row| count_ref(row.supplier).to_string())
        .collect();
    let counts = fetch_row_counts(&client, refs).await;
    for (supplier_ref, count) in &counts {
        tracing::info!(supplier = %supplier_ref, products = count, "assigned products");
    }

    match export_suppliers(&state.suppliers, chrono::Utc::now()) {
        Some(export) => tracing::info!(
            file = %export.filename,
            lines = export.content.lines().count(),
            "export ready"
        ),
        None => tracing::info!("nothing to export"),
    }

    Ok(())
}
