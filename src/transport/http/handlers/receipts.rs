use crate::app::ReceiptError;
use crate::transport::http::handlers::common::invalid_receipt;
use crate::transport::http::types::{AppState, ProcessReceiptResponse};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = Receipt,
    responses(
        (status = 200, description = "Receipt accepted", body = ProcessReceiptResponse),
        (status = 400, description = "The receipt is invalid.", body = String, content_type = "text/plain")
    )
)]
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessReceiptResponse>, ReceiptError> {
    // Content-Type is not required; the body is always read as JSON.
    let body = body.map_err(|e| ReceiptError::Malformed(e.body_text()))?;
    let id = state.receipts.submit_json(&body).await?;
    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// Any method other than POST.
pub async fn process_method_fallback() -> Response {
    invalid_receipt()
}
