//! Orchestrates the two receipt use cases: submit (validate, store) and score (look up, compute).

use crate::domain::points::{self, PointsBreakdown};
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::domain::validate::{validate_receipt, ValidationErrors};
use crate::storage::ReceiptStore;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// Body could not be decoded as a receipt.
    #[error("malformed receipt: {0}")]
    Malformed(String),
    #[error("invalid receipt: {0}")]
    Invalid(#[from] ValidationErrors),
    /// Identifier missing, unparseable or unknown.
    #[error("receipt not found: {0}")]
    NotFound(String),
}

pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ReceiptStore> {
        &self.store
    }

    /// Decodes a raw JSON body and submits it.
    pub async fn submit_json(&self, body: &[u8]) -> Result<ReceiptId, ReceiptError> {
        let receipt: Receipt =
            serde_json::from_slice(body).map_err(|e| ReceiptError::Malformed(e.to_string()))?;
        self.submit(receipt).await
    }

    /// Validates `receipt` and, if every field passes, stores it under a new identifier.
    pub async fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        validate_receipt(&receipt)?;
        let retailer = receipt.retailer.clone();
        let items = receipt.items.len();
        let id = self.store.put(receipt).await;
        tracing::info!(%id, %retailer, items, "receipt accepted");
        Ok(id)
    }

    /// Per-rule breakdown for the receipt stored under `raw_id`.
    pub async fn breakdown(&self, raw_id: &str) -> Result<PointsBreakdown, ReceiptError> {
        let id = raw_id
            .parse::<ReceiptId>()
            .map_err(|e| ReceiptError::NotFound(e.to_string()))?;
        let receipt = self
            .store
            .get(&id)
            .await
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))?;

        let breakdown = points::score(&receipt);
        tracing::debug!(%id, ?breakdown, total = breakdown.total(), "scored receipt");
        Ok(breakdown)
    }

    /// Points for the receipt stored under `raw_id`.
    pub async fn points(&self, raw_id: &str) -> Result<u64, ReceiptError> {
        self.breakdown(raw_id).await.map(|b| b.total())
    }
}
