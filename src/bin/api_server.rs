// src/bin/api_server.rs

use receipt_processor::infra::config::ServerConfig;
use receipt_processor::infra::logging::{self, LogFormat};
use receipt_processor::transport;
use receipt_processor::{InMemoryReceiptStore, ReceiptService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing(LogFormat::from_env())?;

    let config = ServerConfig::from_env()?;

    // --- Store + Service Initialization ---
    tracing::info!("Initializing in-memory receipt store");
    let store = Arc::new(InMemoryReceiptStore::new());
    let app_state = transport::http::AppState::new(ReceiptService::new(store));

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}
