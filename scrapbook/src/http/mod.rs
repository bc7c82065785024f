//! HTTP surface
//!
//! - `/` lists collections
//! - `/{collection_id}` renders a scrapbook page
//! - `/api/...` serves the same data as JSON
//! - anything else is looked up in the assets directory

pub mod error;
pub mod handlers;

use crate::app::AppState;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/collections/{collection_id}",
            get(handlers::collection_json),
        )
        .route("/api/decorations/{moment_id}", get(handlers::decoration_json))
        // Single-segment asset, registered before the page route captures it
        .route_service("/globals.css", ServeFile::new(assets_dir.join("globals.css")))
        .route("/{collection_id}", get(handlers::collection_page))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
