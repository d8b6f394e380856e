use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{SeekerProfileRow, UpsertProfileRequest};
use crate::profiles::store::{get_profile, upsert_profile};
use crate::state::AppState;
use crate::validation::validate_profile;

/// GET /api/v1/profiles/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SeekerProfileRow>, AppError> {
    let row = get_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/profiles/:user_id
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<SeekerProfileRow>, AppError> {
    let validation = validate_profile(&req);
    if !validation.passed {
        return Err(AppError::InvalidForm(validation.errors));
    }
    Ok(Json(upsert_profile(&state.db, user_id, &req).await?))
}
