//! Destructive maintenance endpoint.

use crate::state::AppState;
use crate::store::wipe_all;
use axum::{extract::State, http::StatusCode};

/// Drop every table and recreate an empty schema. Any failure yields a fixed 500 body.
pub async fn wipe_database(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match wipe_all(&state.pool, state.backend).await {
        Ok(()) => {
            tracing::info!("database wiped");
            (StatusCode::OK, "ok")
        }
        Err(e) => {
            tracing::warn!(error = %e, "database wipe failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "mec")
        }
    }
}
