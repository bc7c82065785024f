//! Request handlers

use crate::app::AppState;
use crate::database::{Collection, User};
use crate::decoration::MomentDecoration;
use crate::error::{AppError, Result};
use crate::render::{render_collection_page, render_index, render_not_found};
use crate::services::DecoratedMoment;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Links to every collection
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ids = state.loader.list_collection_ids().await;
    Html(render_index(&state.site, &ids))
}

/// The scrapbook page for one collection
pub async fn collection_page(
    State(state): State<AppState>,
    Path(collection_id): Path<String>,
) -> Response {
    match state.loader.load_page(&collection_id).await {
        Ok(page) => Html(render_collection_page(&state.site, &page, &state.engine)).into_response(),
        Err(AppError::CollectionNotFound(id)) => {
            tracing::info!("Collection not found: {}", id);
            (StatusCode::NOT_FOUND, Html(render_not_found(&state.site))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// JSON form of a collection page
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub collection: Collection,
    pub user: Option<User>,
    pub moments: Vec<DecoratedMoment>,
}

pub async fn collection_json(
    State(state): State<AppState>,
    Path(collection_id): Path<String>,
) -> Result<Json<CollectionResponse>> {
    let page = state.loader.load_page(&collection_id).await?;
    let moments = page.decorated_moments(&state.engine);

    Ok(Json(CollectionResponse {
        collection: page.collection,
        user: page.user,
        moments,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DecorationQuery {
    pub category: Option<String>,
}

/// Decoration for a moment id, without touching the store
pub async fn decoration_json(
    State(state): State<AppState>,
    Path(moment_id): Path<String>,
    Query(query): Query<DecorationQuery>,
) -> Json<MomentDecoration> {
    Json(state.engine.decorate(&moment_id, query.category.as_deref()))
}
