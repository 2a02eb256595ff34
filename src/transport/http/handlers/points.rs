use crate::app::ReceiptError;
use crate::transport::http::handlers::common::receipt_not_found;
use crate::transport::http::types::{AppState, PointsResponse};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Identifier returned by /receipts/process")
    ),
    responses(
        (status = 200, description = "Points awarded to the receipt", body = PointsResponse),
        (status = 404, description = "No receipt found for that ID.", body = String, content_type = "text/plain")
    )
)]
pub async fn get_points_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let Path(id) = id.map_err(|e| ReceiptError::NotFound(e.body_text()))?;
    let points = state.receipts.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// Any method other than GET.
pub async fn points_method_fallback() -> Response {
    receipt_not_found()
}
