use std::net::SocketAddr;

use axum::Router;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod extract;
mod middleware;
mod openai;
mod routes;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Noteify API",
        version = "0.1.0",
        description = "Summary generation for the Noteify CRM: turns free-text customer notes into a summary email, tags, and a suggested next step."
    ),
    paths(routes::health::health_check, routes::summary::generate_summary,),
    components(schemas(
        HealthResponse,
        noteify_core::error::ApiError,
        noteify_core::summary::SummaryRequest,
        noteify_core::summary::SummaryResult,
    ))
)]
struct ApiDoc;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noteify_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Completion backend; a missing key is surfaced per request, not at boot
    let openai = openai::OpenAiClient::from_env();
    if !openai.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; summary generation will fail");
    }

    let app_state = state::AppState { openai };

    // CORS
    let cors_layer = middleware::cors::build_cors_layer();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::health::router())
        .merge(routes::summary::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(app_state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Noteify API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
