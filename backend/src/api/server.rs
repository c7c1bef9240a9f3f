use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{system, users};
use crate::config::Config;
use crate::db::repo::UserStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserStore,
}

/// Build the full router around an existing store.
pub fn build_router(users: UserStore) -> Router {
    let state = Arc::new(AppState { users });

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/users/", post(users::create_user))
        .route("/debug/users/", get(users::debug_users))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let app = build_router(UserStore::new());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
