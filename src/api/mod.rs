use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::imgur::Client;

pub mod handlers;
pub mod views;

/// State shared by every request. The imgur client is immutable, so no
/// locking is needed.
pub struct AppState {
    pub imgur: Client,
}

pub fn create_router(state: Arc<AppState>, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/:place", get(handlers::overlay_handler))
        .with_state(state)
        // sprite and any other static files
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
