pub mod health;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::activity::handlers as activity;
use crate::listings::handlers as listings;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings
        .route(
            "/api/v1/listings",
            get(listings::handle_list_listings).post(listings::handle_create_listing),
        )
        .route(
            "/api/v1/listings/:id",
            get(listings::handle_get_listing)
                .patch(listings::handle_update_listing)
                .delete(listings::handle_delete_listing),
        )
        .route(
            "/api/v1/listings/:id/enhanced-description",
            get(listings::handle_enhanced_description),
        )
        .route("/api/v1/catalog/categories", get(listings::handle_categories))
        .route("/api/v1/catalog/skills", get(listings::handle_skill_suggestions))
        // Profiles and matching
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile).put(profiles::handle_put_profile),
        )
        .route(
            "/api/v1/profiles/:id/recommendations",
            get(matching::handle_recommendations),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(activity::handle_list_applications).post(activity::handle_submit_application),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(activity::handle_update_application_status),
        )
        // Saved listings
        .route(
            "/api/v1/saved",
            get(activity::handle_list_saved).post(activity::handle_save_listing),
        )
        .route("/api/v1/saved/check", get(activity::handle_check_saved))
        .route("/api/v1/saved/:id", delete(activity::handle_remove_saved))
        // Notifications
        .route(
            "/api/v1/notifications",
            get(activity::handle_list_notifications).post(activity::handle_create_notification),
        )
        .route(
            "/api/v1/notifications/unread-count",
            get(activity::handle_unread_count),
        )
        .route(
            "/api/v1/notifications/:id/read",
            patch(activity::handle_mark_read),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(activity::handle_delete_notification),
        )
        .with_state(state)
}
