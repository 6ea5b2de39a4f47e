use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::fallback::with_fallback;
use crate::matching::recommender::Recommendations;
use crate::profiles::load_profile;
use crate::state::AppState;
use crate::store::placeholder;

/// GET /api/v1/profiles/:id/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Recommendations>, AppError> {
    let profile = load_profile(&state, id).await?;
    let listings = with_fallback(
        "listing store",
        state.listings.list_active().await,
        placeholder::listings,
    );
    Ok(Json(state.recommender.recommend(&profile, &listings).await))
}
