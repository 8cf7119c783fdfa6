// File: server/src/web/server.rs
use crate::config::Config;
use crate::database::Store;
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(config: Arc<Config>, store: Arc<Store>) -> Result<()> {
    let state = AppState::new(store);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}

async fn root() -> &'static str {
    "WarmPaws Server is Running..."
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // === SERVICES ===
        .route("/api/services", get(handlers::get_services))
        .route("/api/services", post(handlers::create_service))
        .route("/api/services/{id}", get(handlers::get_service))
        .route("/api/services/{id}", put(handlers::update_service))
        .route("/api/services/{id}", delete(handlers::delete_service))
        // === BOOKINGS ===
        .route("/api/bookings", post(handlers::create_booking))
        .route(
            "/api/bookings/user/{user_id}",
            get(handlers::get_user_bookings),
        )
        .route("/api/bookings/{id}", patch(handlers::update_booking_status))
        // === REVIEWS ===
        .route("/api/reviews", post(handlers::create_review))
        .route(
            "/api/reviews/service/{service_id}",
            get(handlers::get_service_reviews),
        )
        .route(
            "/api/reviews/user/{user_id}",
            get(handlers::get_user_reviews),
        )
        // === USERS ===
        .route("/api/users", get(handlers::get_users))
        .route("/api/users", post(handlers::create_user))
        .route("/api/users/{id}", get(handlers::get_user))
        .route("/api/users/{id}", put(handlers::update_user))
        .route("/api/users/{id}", delete(handlers::delete_user))
        // === ADMIN ===
        .route("/api/admin/bookings", get(handlers::get_admin_bookings))
        .route(
            "/api/admin/bookings/recent",
            get(handlers::get_recent_bookings),
        )
        .route(
            "/api/admin/bookings/{id}",
            delete(handlers::delete_booking),
        )
        .route("/api/admin/reviews", get(handlers::get_admin_reviews))
        .route("/api/admin/counts", get(handlers::get_counts))
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
