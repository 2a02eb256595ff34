use crate::domain::receipt::{Item, Receipt};
use crate::transport::http::handlers::{common, health, points, receipts};
use crate::transport::http::types::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use axum::routing::{get, on, post, MethodFilter};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        receipts::process_receipt_handler,
        points::get_points_handler
    ),
    components(schemas(
        Receipt,
        Item,
        ProcessReceiptResponse,
        PointsResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/receipts/process",
            post(receipts::process_receipt_handler).fallback(receipts::process_method_fallback),
        )
        .route(
            "/receipts/:id/points",
            // GET only: HEAD goes to the fallback as well.
            on(MethodFilter::GET, points::get_points_handler)
                .fallback(points::points_method_fallback),
        )
        .fallback(common::unrouted_fallback)
        .with_state(app_state)
}
