//! The API gateway client.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use vendora_core::{Page, StoreId};
use vendora_products::{AssignProductsRequest, AssignedProduct, Product};
use vendora_suppliers::{Supplier, SupplierDraft};

use crate::envelope;
use crate::error::ApiError;

/// One server page of suppliers plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct SupplierPage {
    pub suppliers: Vec<Supplier>,
    pub page: Page,
}

/// HTTP client for the `/api` surface.
///
/// The bearer token is attached as a default header; 401 handling (token
/// teardown, login redirect) is the caller's policy, not this client's.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, bearer_token: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|e| ApiError::Config(format!("bearer token: {e}")))?;
        headers.insert(AUTHORIZATION, value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, client })
    }

    /// `GET /supplier/list?storeId=&page=&limit=`
    #[tracing::instrument(skip(self))]
    pub async fn list_suppliers(
        &self,
        store_id: StoreId,
        page: u32,
        limit: u32,
    ) -> Result<SupplierPage, ApiError> {
        let response = self
            .client
            .get(format!("{}/supplier/list", self.base_url))
            .query(&[
                ("storeId", store_id.to_string()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        let value = Self::read_json(response).await?;
        let body = envelope::supplier_list(&value)?;

        // When the envelope carries no pagination block the total is
        // unknown; use a lower bound covering the rows already shown so
        // the requested page survives clamping.
        let page = match body.pagination {
            Some(meta) => Page::new(meta.page, meta.limit, meta.total),
            None => {
                let limit = limit.max(1);
                let seen = (page.max(1) as u64 - 1) * limit as u64
                    + body.suppliers.len() as u64;
                Page::new(page, limit, seen)
            }
        };

        Ok(SupplierPage {
            suppliers: body.suppliers,
            page,
        })
    }

    /// `GET /supplier/:id`
    #[tracing::instrument(skip(self))]
    pub async fn get_supplier(&self, id: &str) -> Result<Supplier, ApiError> {
        let response = self
            .client
            .get(format!("{}/supplier/{id}", self.base_url))
            .send()
            .await?;
        let value = Self::read_json(response).await?;
        envelope::single_supplier(&value)
    }

    /// `POST /supplier/create`
    ///
    /// The response body is intentionally ignored beyond success/failure:
    /// the caller refetches the list to pick up server-assigned identity.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_supplier(&self, draft: &SupplierDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/supplier/create", self.base_url))
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// `PUT /supplier/:id`
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_supplier(&self, id: &str, draft: &SupplierDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .put(format!("{}/supplier/{id}", self.base_url))
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// `DELETE /supplier/:id`
    #[tracing::instrument(skip(self))]
    pub async fn delete_supplier(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/supplier/{id}", self.base_url))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// `GET /supplier/:supplierId/products`
    ///
    /// A 404 here means "nothing assigned yet", not an error.
    #[tracing::instrument(skip(self))]
    pub async fn assigned_products(
        &self,
        supplier_id: &str,
    ) -> Result<Vec<AssignedProduct>, ApiError> {
        let response = self
            .client
            .get(format!("{}/supplier/{supplier_id}/products", self.base_url))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let value = Self::read_json(response).await?;
        envelope::assigned_products(&value)
    }

    /// `GET /product/list?storeId=`: the full catalog, unpaginated.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self, store_id: StoreId) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(format!("{}/product/list", self.base_url))
            .query(&[("storeId", store_id.to_string())])
            .send()
            .await?;
        let value = Self::read_json(response).await?;
        envelope::product_list(&value)
    }

    /// `POST /supplier/assign-products`
    #[tracing::instrument(skip(self, batch), fields(supplier_id = %batch.supplier_id, products = batch.products.len()))]
    pub async fn assign_products(&self, batch: &AssignProductsRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/supplier/assign-products", self.base_url))
            .json(batch)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}
