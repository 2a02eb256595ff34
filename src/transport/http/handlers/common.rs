use crate::app::ReceiptError;
use crate::transport::http::types::{INVALID_RECEIPT_MESSAGE, RECEIPT_NOT_FOUND_MESSAGE};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

pub fn invalid_receipt() -> Response {
    (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response()
}

pub fn receipt_not_found() -> Response {
    (StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND_MESSAGE).into_response()
}

// Decode and validation failures share one client-facing message; the cause is only logged.
impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        match &self {
            ReceiptError::Malformed(_) | ReceiptError::Invalid(_) => {
                tracing::warn!(error = %self, "rejected receipt");
                invalid_receipt()
            }
            ReceiptError::NotFound(_) => {
                tracing::debug!(error = %self, "points lookup failed");
                receipt_not_found()
            }
        }
    }
}

/// True for paths shaped like `/receipts/<anything>/points`.
pub fn is_points_path(path: &str) -> bool {
    path.strip_prefix("/receipts/")
        .and_then(|rest| rest.strip_suffix("/points"))
        .is_some()
        || path == "/receipts/points"
}

/// Router-level fallback. Points lookups that did not route (e.g. an empty id segment)
/// still get the not-found message.
pub async fn unrouted_fallback(uri: Uri) -> Response {
    if is_points_path(uri.path()) {
        return receipt_not_found();
    }
    StatusCode::NOT_FOUND.into_response()
}
