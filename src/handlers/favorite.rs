//! Favorite handlers: list, add, delete.

use crate::error::{ApiError, AppError};
use crate::handlers::parse_id;
use crate::records::NewFavorite;
use crate::response::{confirmation, keyed_list};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RecordService::list_favorites(&state.pool).await?;
    Ok(keyed_list("favorites", rows))
}

/// Malformed bodies and missing keys surface as an unhandled failure, not a 4xx.
pub async fn add_favorite(
    State(state): State<AppState>,
    body: Result<Json<NewFavorite>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new) = body?;
    let favorite = RecordService::add_favorite(&state.pool, &new).await?;
    tracing::info!(id = favorite.id, user_id = favorite.user_id, "favorite added");
    Ok(confirmation("Favorite added successfully"))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || ApiError::not_found("Favorite not found");
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    if !RecordService::delete_favorite(&state.pool, id).await? {
        return Err(not_found().into());
    }
    tracing::info!(id, "favorite deleted");
    Ok(confirmation("Favorite deleted successfully"))
}
