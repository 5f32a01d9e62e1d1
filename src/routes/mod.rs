use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::{LoreStore, LoreWriter},
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::CocktailGenerator,
};

pub mod drinks;
pub mod lore;
pub mod recommendations;

/// Shared application state
pub struct AppState {
    /// Offline rule engine over the menu
    pub recommender: Arc<dyn CocktailGenerator>,
    /// Generator behind `/generate-cocktail`; the rule engine when no API key is set
    pub generator: Arc<dyn CocktailGenerator>,
    pub lore: Arc<dyn LoreStore>,
    pub lore_writer: LoreWriter,
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(recommendations::recommend))
        .route("/generate-cocktail", post(recommendations::generate_cocktail))
        .route("/drinks/rate", post(drinks::rate))
        .route("/drinks/stats", post(drinks::stats))
        .route("/lore", get(lore::get_lore).post(lore::add_lore))
        .route("/lore/fragment", get(lore::fragment))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
