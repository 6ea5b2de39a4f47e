//! Store seams for the external document store.
//!
//! Handlers only see these traits. `PgStore` implements all of them against
//! PostgreSQL; tests use the in-memory `MemoryStore`. Reads that feed the UI
//! are wrapped in `with_fallback` by the caller, with `placeholder` supplying
//! the substitute data.

use async_trait::async_trait;
use uuid::Uuid;

use crate::fallback::FetchError;
use crate::models::activity::{
    Application, NewApplication, NewNotification, NewSavedListing, Notification, SavedListing,
    StatusUpdate,
};
use crate::models::listing::{Listing, ListingPatch, NewListing};
use crate::models::profile::Profile;

#[cfg(test)]
pub mod memory;
pub mod placeholder;
pub mod postgres;

#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Active listings, newest first.
    async fn list_active(&self) -> Result<Vec<Listing>, FetchError>;
    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, FetchError>;
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, FetchError>;
    /// Returns `None` when no listing has this id.
    async fn update_listing(
        &self,
        id: Uuid,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, FetchError>;
    /// Returns `false` when no listing has this id.
    async fn delete_listing(&self, id: Uuid) -> Result<bool, FetchError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, FetchError>;
    async fn upsert_profile(&self, profile: Profile) -> Result<Profile, FetchError>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn submit_application(&self, application: NewApplication)
        -> Result<Application, FetchError>;
    /// Most recently applied first.
    async fn applications_for_user(&self, user_id: Uuid) -> Result<Vec<Application>, FetchError>;
    async fn update_application_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Option<Application>, FetchError>;
}

#[async_trait]
pub trait SavedStore: Send + Sync {
    async fn save_listing(&self, saved: NewSavedListing) -> Result<SavedListing, FetchError>;
    /// Most recently saved first.
    async fn saved_for_user(&self, user_id: Uuid) -> Result<Vec<SavedListing>, FetchError>;
    async fn remove_saved(&self, id: Uuid) -> Result<bool, FetchError>;
    async fn is_saved(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool, FetchError>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, FetchError>;
    /// Newest first.
    async fn notifications_for_user(&self, user_id: Uuid)
        -> Result<Vec<Notification>, FetchError>;
    async fn mark_read(&self, id: Uuid) -> Result<bool, FetchError>;
    async fn delete_notification(&self, id: Uuid) -> Result<bool, FetchError>;
}
