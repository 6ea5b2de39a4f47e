use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::fallback::with_fallback;
use crate::listings::catalog;
use crate::listings::enhance::enhance_description;
use crate::listings::filter::{self, FilterCriteria};
use crate::models::listing::{Listing, ListingPatch, NewListing};
use crate::state::AppState;
use crate::store::placeholder;
use crate::validation::{validate_listing_patch, validate_new_listing};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct EnhancedDescription {
    pub listing_id: Uuid,
    pub description: String,
}

/// Looks a listing up; a failed read is logged and treated as absent.
async fn find_listing(state: &AppState, id: Uuid) -> Result<Listing, AppError> {
    with_fallback("listing store", state.listings.get_listing(id).await, || None)
        .ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))
}

/// GET /api/v1/listings
pub async fn handle_list_listings(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
    criteria: Result<Query<FilterCriteria>, QueryRejection>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let Query(criteria) = criteria.map_err(|e| AppError::Validation(e.body_text()))?;
    let listings = with_fallback(
        "listing store",
        state.listings.list_active().await,
        placeholder::listings,
    );
    Ok(Json(filter::apply(&listings, &search.q, &criteria)))
}

/// POST /api/v1/listings
pub async fn handle_create_listing(
    State(state): State<AppState>,
    Json(req): Json<NewListing>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    let listing = validate_new_listing(req)?;
    let created = state.listings.create_listing(listing).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/listings/:id
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, AppError> {
    Ok(Json(find_listing(&state, id).await?))
}

/// PATCH /api/v1/listings/:id
pub async fn handle_update_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ListingPatch>,
) -> Result<Json<Listing>, AppError> {
    let patch = validate_listing_patch(req)?;
    let updated = state
        .listings
        .update_listing(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/listings/:id
pub async fn handle_delete_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.listings.delete_listing(id).await? {
        info!("Deleted listing {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Listing {id} not found")))
    }
}

/// GET /api/v1/listings/:id/enhanced-description
pub async fn handle_enhanced_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EnhancedDescription>, AppError> {
    let listing = find_listing(&state, id).await?;
    let description = enhance_description(state.llm.as_ref(), &listing).await;
    Ok(Json(EnhancedDescription {
        listing_id: listing.id,
        description,
    }))
}

/// GET /api/v1/catalog/categories
pub async fn handle_categories() -> Json<Vec<String>> {
    Json(catalog::categories())
}

/// GET /api/v1/catalog/skills
pub async fn handle_skill_suggestions() -> Json<Vec<String>> {
    Json(catalog::skill_suggestions())
}
