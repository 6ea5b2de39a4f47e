use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::fallback::with_fallback;
use crate::models::activity::{
    Application, NewApplication, NewNotification, NewSavedListing, Notification, SavedListing,
    StatusUpdate,
};
use crate::state::AppState;
use crate::store::placeholder;
use crate::validation::{validate_application, validate_notification, validate_saved};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SavedCheckQuery {
    pub user_id: Uuid,
    pub listing_id: Uuid,
}

#[derive(Serialize)]
pub struct SavedCheck {
    pub saved: bool,
}

#[derive(Serialize)]
pub struct UnreadCount {
    pub unread: usize,
}

fn no_content_or_not_found(found: bool, what: &str, id: Uuid) -> Result<StatusCode, AppError> {
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("{what} {id} not found")))
    }
}

// Applications

/// POST /api/v1/applications
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(req): Json<NewApplication>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    validate_application(&req)?;
    let application = state.applications.submit_application(req).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications?user_id=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Json<Vec<Application>> {
    Json(with_fallback(
        "application store",
        state.applications.applications_for_user(params.user_id).await,
        || placeholder::applications(params.user_id),
    ))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Application>, AppError> {
    let status = req.status;
    let updated = state
        .applications
        .update_application_status(id, req)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    info!("Application {id} is now {}", status.as_str());
    Ok(Json(updated))
}

// Saved listings

/// POST /api/v1/saved
pub async fn handle_save_listing(
    State(state): State<AppState>,
    Json(req): Json<NewSavedListing>,
) -> Result<(StatusCode, Json<SavedListing>), AppError> {
    validate_saved(&req)?;
    let saved = state.saved.save_listing(req).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/saved?user_id=
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Json<Vec<SavedListing>> {
    Json(with_fallback(
        "saved store",
        state.saved.saved_for_user(params.user_id).await,
        || placeholder::saved(params.user_id),
    ))
}

/// GET /api/v1/saved/check?user_id=&listing_id=
pub async fn handle_check_saved(
    State(state): State<AppState>,
    Query(params): Query<SavedCheckQuery>,
) -> Json<SavedCheck> {
    let saved = with_fallback(
        "saved store",
        state.saved.is_saved(params.user_id, params.listing_id).await,
        || false,
    );
    Json(SavedCheck { saved })
}

/// DELETE /api/v1/saved/:id
pub async fn handle_remove_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let found = state.saved.remove_saved(id).await?;
    no_content_or_not_found(found, "Saved listing", id)
}

// Notifications

/// POST /api/v1/notifications
pub async fn handle_create_notification(
    State(state): State<AppState>,
    Json(req): Json<NewNotification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    validate_notification(&req)?;
    let notification = state.notifications.create_notification(req).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

async fn notifications_for(state: &AppState, user_id: Uuid) -> Vec<Notification> {
    with_fallback(
        "notification store",
        state.notifications.notifications_for_user(user_id).await,
        || placeholder::notifications(user_id),
    )
}

/// GET /api/v1/notifications?user_id=
pub async fn handle_list_notifications(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Json<Vec<Notification>> {
    Json(notifications_for(&state, params.user_id).await)
}

/// GET /api/v1/notifications/unread-count?user_id=
pub async fn handle_unread_count(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Json<UnreadCount> {
    let unread = notifications_for(&state, params.user_id)
        .await
        .iter()
        .filter(|n| !n.read)
        .count();
    Json(UnreadCount { unread })
}

/// PATCH /api/v1/notifications/:id/read
pub async fn handle_mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let found = state.notifications.mark_read(id).await?;
    no_content_or_not_found(found, "Notification", id)
}

/// DELETE /api/v1/notifications/:id
pub async fn handle_delete_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let found = state.notifications.delete_notification(id).await?;
    no_content_or_not_found(found, "Notification", id)
}
