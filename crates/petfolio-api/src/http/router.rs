//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Accounts
        .route("/register", post(handlers::account::register))
        .route("/login", post(handlers::account::login))
        .route("/updateProfile", post(handlers::account::update_profile))
        // Pets
        .route("/addPet", post(handlers::pet::add_pet))
        .route("/pets", get(handlers::pet::list_pets))
        // Chat
        .route("/llama3", post(handlers::chat::chat_turn))
        .route("/saveChat", post(handlers::chat::save_chat))
        .route("/chatHistory", get(handlers::chat::chat_history))
        .route("/admin/recentChats", get(handlers::chat::recent_chats));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
