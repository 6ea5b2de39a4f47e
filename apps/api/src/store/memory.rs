//! In-memory fake of every store, plus a store that always fails.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::fallback::FetchError;
use crate::models::activity::{
    Application, ApplicationStatus, NewApplication, NewNotification, NewSavedListing,
    Notification, SavedListing, StatusUpdate,
};
use crate::models::listing::{Listing, ListingPatch, NewListing};
use crate::models::profile::Profile;
use crate::store::{ApplicationStore, ListingStore, NotificationStore, ProfileStore, SavedStore};

#[derive(Default)]
pub struct MemoryStore {
    pub listings: Mutex<Vec<Listing>>,
    pub profiles: Mutex<Vec<Profile>>,
    pub applications: Mutex<Vec<Application>>,
    pub saved: Mutex<Vec<SavedListing>>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl MemoryStore {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Mutex::new(listings),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn list_active(&self) -> Result<Vec<Listing>, FetchError> {
        let mut active: Vec<Listing> = self
            .listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, FetchError> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn create_listing(&self, new: NewListing) -> Result<Listing, FetchError> {
        let listing = Listing {
            id: Uuid::new_v4(),
            title: new.title,
            organization: new.organization,
            location: new.location,
            region: new.region,
            duration: new.duration,
            compensation: new.compensation,
            skills: new.skills,
            listing_type: new.listing_type,
            category: new.category,
            remote: new.remote,
            description: new.description,
            requirements: new.requirements,
            benefits: new.benefits,
            application_deadline: new.application_deadline,
            start_date: new.start_date,
            is_active: new.is_active,
            suitable_for_first_timers: new.suitable_for_first_timers,
            language_requirements: new.language_requirements,
            created_at: Utc::now(),
        };
        self.listings.lock().unwrap().push(listing.clone());
        Ok(listing)
    }

    async fn update_listing(
        &self,
        id: Uuid,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, FetchError> {
        let mut listings = self.listings.lock().unwrap();
        let Some(l) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        if let Some(v) = patch.title {
            l.title = v;
        }
        if let Some(v) = patch.organization {
            l.organization = v;
        }
        if let Some(v) = patch.location {
            l.location = v;
        }
        if let Some(v) = patch.region {
            l.region = v;
        }
        if let Some(v) = patch.duration {
            l.duration = v;
        }
        if let Some(v) = patch.compensation {
            l.compensation = v;
        }
        if let Some(v) = patch.skills {
            l.skills = v;
        }
        if let Some(v) = patch.listing_type {
            l.listing_type = v;
        }
        if let Some(v) = patch.category {
            l.category = v;
        }
        if let Some(v) = patch.remote {
            l.remote = v;
        }
        if let Some(v) = patch.description {
            l.description = v;
        }
        if let Some(v) = patch.requirements {
            l.requirements = v;
        }
        if let Some(v) = patch.benefits {
            l.benefits = v;
        }
        if let Some(v) = patch.application_deadline {
            l.application_deadline = v;
        }
        if let Some(v) = patch.start_date {
            l.start_date = v;
        }
        if let Some(v) = patch.is_active {
            l.is_active = v;
        }
        if let Some(v) = patch.suitable_for_first_timers {
            l.suitable_for_first_timers = v;
        }
        if let Some(v) = patch.language_requirements {
            l.language_requirements = v;
        }
        Ok(Some(l.clone()))
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, FetchError> {
        let mut listings = self.listings.lock().unwrap();
        let before = listings.len();
        listings.retain(|l| l.id != id);
        Ok(listings.len() < before)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, FetchError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<Profile, FetchError> {
        let mut profiles = self.profiles.lock().unwrap();
        profiles.retain(|p| p.id != profile.id);
        profiles.push(profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn submit_application(&self, new: NewApplication) -> Result<Application, FetchError> {
        let now = Utc::now();
        let application = Application {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            listing_id: new.listing_id,
            listing_title: new.listing_title,
            organization: new.organization,
            location: new.location,
            duration: new.duration,
            status: ApplicationStatus::Pending,
            applied_at: now,
            updated_at: now,
            notes: new.notes,
            resume_ref: new.resume_ref,
            cover_letter: new.cover_letter,
        };
        self.applications.lock().unwrap().push(application.clone());
        Ok(application)
    }

    async fn applications_for_user(&self, user_id: Uuid) -> Result<Vec<Application>, FetchError> {
        let mut found: Vec<Application> = self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(found)
    }

    async fn update_application_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Option<Application>, FetchError> {
        let mut applications = self.applications.lock().unwrap();
        Ok(applications.iter_mut().find(|a| a.id == id).map(|a| {
            a.status = update.status;
            a.notes = update.notes;
            a.updated_at = Utc::now();
            a.clone()
        }))
    }
}

#[async_trait]
impl SavedStore for MemoryStore {
    async fn save_listing(&self, new: NewSavedListing) -> Result<SavedListing, FetchError> {
        let saved = SavedListing {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            listing_id: new.listing_id,
            listing_title: new.listing_title,
            organization: new.organization,
            location: new.location,
            duration: new.duration,
            compensation: new.compensation,
            skills: new.skills,
            remote: new.remote,
            saved_at: Utc::now(),
        };
        self.saved.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn saved_for_user(&self, user_id: Uuid) -> Result<Vec<SavedListing>, FetchError> {
        let mut found: Vec<SavedListing> = self
            .saved
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(found)
    }

    async fn remove_saved(&self, id: Uuid) -> Result<bool, FetchError> {
        let mut saved = self.saved.lock().unwrap();
        let before = saved.len();
        saved.retain(|s| s.id != id);
        Ok(saved.len() < before)
    }

    async fn is_saved(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool, FetchError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.user_id == user_id && s.listing_id == listing_id))
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn create_notification(&self, new: NewNotification) -> Result<Notification, FetchError> {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            kind: new.kind,
            title: new.title,
            message: new.message,
            read: false,
            created_at: Utc::now(),
            action_url: new.action_url,
        };
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn notifications_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, FetchError> {
        let mut found: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn mark_read(&self, id: Uuid) -> Result<bool, FetchError> {
        let mut notifications = self.notifications.lock().unwrap();
        Ok(match notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        })
    }

    async fn delete_notification(&self, id: Uuid) -> Result<bool, FetchError> {
        let mut notifications = self.notifications.lock().unwrap();
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        Ok(notifications.len() < before)
    }
}

/// Every call fails, as if the database were unreachable.
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, FetchError> {
    Err(FetchError::Store(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl ListingStore for UnavailableStore {
    async fn list_active(&self) -> Result<Vec<Listing>, FetchError> {
        unavailable()
    }
    async fn get_listing(&self, _id: Uuid) -> Result<Option<Listing>, FetchError> {
        unavailable()
    }
    async fn create_listing(&self, _listing: NewListing) -> Result<Listing, FetchError> {
        unavailable()
    }
    async fn update_listing(
        &self,
        _id: Uuid,
        _patch: ListingPatch,
    ) -> Result<Option<Listing>, FetchError> {
        unavailable()
    }
    async fn delete_listing(&self, _id: Uuid) -> Result<bool, FetchError> {
        unavailable()
    }
}

#[async_trait]
impl ProfileStore for UnavailableStore {
    async fn get_profile(&self, _id: Uuid) -> Result<Option<Profile>, FetchError> {
        unavailable()
    }
    async fn upsert_profile(&self, _profile: Profile) -> Result<Profile, FetchError> {
        unavailable()
    }
}

#[async_trait]
impl ApplicationStore for UnavailableStore {
    async fn submit_application(&self, _new: NewApplication) -> Result<Application, FetchError> {
        unavailable()
    }
    async fn applications_for_user(&self, _user_id: Uuid) -> Result<Vec<Application>, FetchError> {
        unavailable()
    }
    async fn update_application_status(
        &self,
        _id: Uuid,
        _update: StatusUpdate,
    ) -> Result<Option<Application>, FetchError> {
        unavailable()
    }
}

#[async_trait]
impl SavedStore for UnavailableStore {
    async fn save_listing(&self, _new: NewSavedListing) -> Result<SavedListing, FetchError> {
        unavailable()
    }
    async fn saved_for_user(&self, _user_id: Uuid) -> Result<Vec<SavedListing>, FetchError> {
        unavailable()
    }
    async fn remove_saved(&self, _id: Uuid) -> Result<bool, FetchError> {
        unavailable()
    }
    async fn is_saved(&self, _user_id: Uuid, _listing_id: Uuid) -> Result<bool, FetchError> {
        unavailable()
    }
}

#[async_trait]
impl NotificationStore for UnavailableStore {
    async fn create_notification(&self, _new: NewNotification) -> Result<Notification, FetchError> {
        unavailable()
    }
    async fn notifications_for_user(
        &self,
        _user_id: Uuid,
    ) -> Result<Vec<Notification>, FetchError> {
        unavailable()
    }
    async fn mark_read(&self, _id: Uuid) -> Result<bool, FetchError> {
        unavailable()
    }
    async fn delete_notification(&self, _id: Uuid) -> Result<bool, FetchError> {
        unavailable()
    }
}
