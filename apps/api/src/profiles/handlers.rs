use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileInput};
use crate::profiles::load_profile;
use crate::state::AppState;
use crate::validation::validate_profile;

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(load_profile(&state, id).await?))
}

/// PUT /api/v1/profiles/:id
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProfileInput>,
) -> Result<Json<Profile>, AppError> {
    let input = validate_profile(req)?;
    let saved = state.profiles.upsert_profile(input.into_profile(id)).await?;
    info!("Saved profile {id}");
    Ok(Json(saved))
}
