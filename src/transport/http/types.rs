use crate::app::ReceiptService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Body sent for any rejected submission (bad JSON, wrong method, failed validation).
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
/// Body sent when a points lookup cannot resolve its identifier.
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

#[derive(Clone)]
pub struct AppState {
    pub receipts: Arc<ReceiptService>,
}

impl AppState {
    pub fn new(receipts: ReceiptService) -> Self {
        Self {
            receipts: Arc::new(receipts),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProcessReceiptResponse {
    /// Identifier to pass to `GET /receipts/{id}/points`.
    #[schema(example = "7fb1377b-b223-49d9-a31a-5a02701dd310")]
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PointsResponse {
    #[schema(example = 32)]
    pub points: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of receipts currently stored.
    pub receipts: usize,
}
