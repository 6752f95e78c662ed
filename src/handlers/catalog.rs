//! Read-only handlers for characters, planets and users.

use crate::error::{ApiError, AppError};
use crate::handlers::parse_id;
use crate::response::keyed_list;
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RecordService::list_characters(&state.pool).await?;
    Ok(keyed_list("characters", rows))
}

pub async fn get_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || ApiError::not_found("Character not found");
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    let character = RecordService::get_character(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok((StatusCode::OK, Json(character)))
}

pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RecordService::list_planets(&state.pool).await?;
    Ok(keyed_list("planets", rows))
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RecordService::list_users(&state.pool).await?;
    Ok(keyed_list("users", rows))
}
