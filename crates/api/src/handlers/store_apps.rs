//! Handlers for the `/api/StoreApps` resource.
//!
//! Collections are returned as bare JSON arrays and single apps as bare
//! objects, always in the summary shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use storeapps_core::search::DEFAULT_TOP_N;
use storeapps_core::types::DbId;
use storeapps_db::models::store_app::CreateStoreApp;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::routes::store_apps::RESOURCE_ROOT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/StoreApps
///
/// List every store app in id order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let apps = state.store_apps.list().await?;
    Ok(Json(apps))
}

/// GET /api/StoreApps/{id}
///
/// Get a single store app. Unknown ids answer 404 with no body.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let app = state.store_apps.get_by_id(id).await?;
    Ok(Json(app))
}

/// GET /api/StoreApps/Search?SearchTerm=
///
/// Case-insensitive substring search over name and category.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = params
        .search_term
        .ok_or_else(|| AppError::BadRequest("SearchTerm query parameter is required".into()))?;
    let apps = state.store_apps.search(&term).await?;
    Ok(Json(apps))
}

/// GET /api/StoreApps/FirstTen
///
/// The first ten store apps by id.
pub async fn first_ten(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let apps = state.store_apps.top_n(DEFAULT_TOP_N).await?;
    Ok(Json(apps))
}

/// POST /api/StoreApps
///
/// Create a store app. Responds 201 with a `Location` pointing at the new
/// app; validation failures list every offending field.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateStoreApp>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let app = state.store_apps.create(input).await?;
    let location = format!("{RESOURCE_ROOT}/{}", app.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(app)))
}
