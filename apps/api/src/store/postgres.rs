use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::fallback::FetchError;
use crate::models::activity::{
    Application, ApplicationRow, NewApplication, NewNotification, NewSavedListing, Notification,
    NotificationRow, SavedListing, StatusUpdate,
};
use crate::models::listing::{Listing, ListingPatch, ListingRow, NewListing};
use crate::models::profile::{Profile, ProfileRow};
use crate::store::{ApplicationStore, ListingStore, NotificationStore, ProfileStore, SavedStore};

/// All stores, backed by one PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Converts a batch of rows, logging and skipping any that fail so one bad
/// record does not hide the rest.
fn convert_rows<R, T>(
    rows: Vec<R>,
    convert: impl Fn(R) -> Result<T, FetchError>,
) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match convert(row) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping unreadable row: {e}");
                None
            }
        })
        .collect()
}

fn listing_from_row(row: ListingRow) -> Result<Listing, FetchError> {
    let id = row.id;
    Listing::try_from(row).map_err(|e| FetchError::Corrupt(format!("listing {id}: {e}")))
}

fn application_from_row(row: ApplicationRow) -> Result<Application, FetchError> {
    let id = row.id;
    Application::try_from(row).map_err(|e| FetchError::Corrupt(format!("application {id}: {e}")))
}

fn notification_from_row(row: NotificationRow) -> Result<Notification, FetchError> {
    let id = row.id;
    Notification::try_from(row)
        .map_err(|e| FetchError::Corrupt(format!("notification {id}: {e}")))
}

#[async_trait]
impl ListingStore for PgStore {
    async fn list_active(&self) -> Result<Vec<Listing>, FetchError> {
        let rows = sqlx::query_as::<_, ListingRow>(
            "SELECT * FROM listings WHERE is_active = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(convert_rows(rows, listing_from_row))
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, FetchError> {
        sqlx::query_as::<_, ListingRow>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(listing_from_row)
            .transpose()
    }

    async fn create_listing(&self, listing: NewListing) -> Result<Listing, FetchError> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            INSERT INTO listings
                (id, title, organization, location, region, duration, compensation,
                 skills, listing_type, category, remote, description, requirements,
                 benefits, application_deadline, start_date, is_active,
                 suitable_for_first_timers, language_requirements)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&listing.title)
        .bind(&listing.organization)
        .bind(&listing.location)
        .bind(&listing.region)
        .bind(listing.duration.to_string())
        .bind(&listing.compensation)
        .bind(&listing.skills)
        .bind(&listing.listing_type)
        .bind(&listing.category)
        .bind(listing.remote)
        .bind(&listing.description)
        .bind(&listing.requirements)
        .bind(&listing.benefits)
        .bind(listing.application_deadline)
        .bind(listing.start_date)
        .bind(listing.is_active)
        .bind(listing.suitable_for_first_timers)
        .bind(&listing.language_requirements)
        .fetch_one(&self.pool)
        .await?;

        info!("Created listing {} ({})", row.id, row.title);
        listing_from_row(row)
    }

    async fn update_listing(
        &self,
        id: Uuid,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, FetchError> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            UPDATE listings SET
                title                     = COALESCE($2, title),
                organization              = COALESCE($3, organization),
                location                  = COALESCE($4, location),
                region                    = COALESCE($5, region),
                duration                  = COALESCE($6, duration),
                compensation              = COALESCE($7, compensation),
                skills                    = COALESCE($8, skills),
                listing_type              = COALESCE($9, listing_type),
                category                  = COALESCE($10, category),
                remote                    = COALESCE($11, remote),
                description               = COALESCE($12, description),
                requirements              = COALESCE($13, requirements),
                benefits                  = COALESCE($14, benefits),
                application_deadline      = COALESCE($15, application_deadline),
                start_date                = COALESCE($16, start_date),
                is_active                 = COALESCE($17, is_active),
                suitable_for_first_timers = COALESCE($18, suitable_for_first_timers),
                language_requirements     = COALESCE($19, language_requirements)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.organization)
        .bind(patch.location)
        .bind(patch.region)
        .bind(patch.duration.map(|d| d.to_string()))
        .bind(patch.compensation)
        .bind(patch.skills)
        .bind(patch.listing_type)
        .bind(patch.category)
        .bind(patch.remote)
        .bind(patch.description)
        .bind(patch.requirements)
        .bind(patch.benefits)
        .bind(patch.application_deadline)
        .bind(patch.start_date)
        .bind(patch.is_active)
        .bind(patch.suitable_for_first_timers)
        .bind(patch.language_requirements)
        .fetch_optional(&self.pool)
        .await?;

        row.map(listing_from_row).transpose()
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, FetchError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, FetchError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .map(Profile::from),
        )
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<Profile, FetchError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (id, display_name, education_level, field_of_study, skills, interests,
                 region, preferred_duration, work_mode, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            ON CONFLICT (id) DO UPDATE SET
                display_name       = EXCLUDED.display_name,
                education_level    = EXCLUDED.education_level,
                field_of_study     = EXCLUDED.field_of_study,
                skills             = EXCLUDED.skills,
                interests          = EXCLUDED.interests,
                region             = EXCLUDED.region,
                preferred_duration = EXCLUDED.preferred_duration,
                work_mode          = EXCLUDED.work_mode,
                updated_at         = NOW()
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.display_name)
        .bind(&profile.education_level)
        .bind(&profile.field_of_study)
        .bind(&profile.skills)
        .bind(&profile.interests)
        .bind(&profile.region)
        .bind(profile.preferred_duration.map(|d| d.to_string()))
        .bind(profile.work_mode.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(Profile::from(row))
    }
}

#[async_trait]
impl ApplicationStore for PgStore {
    async fn submit_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, FetchError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications
                (id, user_id, listing_id, listing_title, organization, location, duration,
                 status, notes, resume_ref, cover_letter)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(application.user_id)
        .bind(application.listing_id)
        .bind(&application.listing_title)
        .bind(&application.organization)
        .bind(&application.location)
        .bind(&application.duration)
        .bind(&application.notes)
        .bind(&application.resume_ref)
        .bind(&application.cover_letter)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "User {} applied to listing {}",
            row.user_id, row.listing_id
        );
        application_from_row(row)
    }

    async fn applications_for_user(&self, user_id: Uuid) -> Result<Vec<Application>, FetchError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE user_id = $1 ORDER BY applied_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(convert_rows(rows, application_from_row))
    }

    async fn update_application_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Option<Application>, FetchError> {
        sqlx::query_as::<_, ApplicationRow>(
            r#"
            UPDATE applications
            SET status = $2, notes = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.status.as_str())
        .bind(&update.notes)
        .fetch_optional(&self.pool)
        .await?
        .map(application_from_row)
        .transpose()
    }
}

#[async_trait]
impl SavedStore for PgStore {
    async fn save_listing(&self, saved: NewSavedListing) -> Result<SavedListing, FetchError> {
        Ok(sqlx::query_as::<_, SavedListing>(
            r#"
            INSERT INTO saved_listings
                (id, user_id, listing_id, listing_title, organization, location, duration,
                 compensation, skills, remote)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(saved.user_id)
        .bind(saved.listing_id)
        .bind(&saved.listing_title)
        .bind(&saved.organization)
        .bind(&saved.location)
        .bind(&saved.duration)
        .bind(&saved.compensation)
        .bind(&saved.skills)
        .bind(saved.remote)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn saved_for_user(&self, user_id: Uuid) -> Result<Vec<SavedListing>, FetchError> {
        Ok(sqlx::query_as::<_, SavedListing>(
            "SELECT * FROM saved_listings WHERE user_id = $1 ORDER BY saved_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn remove_saved(&self, id: Uuid) -> Result<bool, FetchError> {
        let result = sqlx::query("DELETE FROM saved_listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_saved(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool, FetchError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM saved_listings WHERE user_id = $1 AND listing_id = $2)",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(&self.pool)
        .await?)
    }
}

#[async_trait]
impl NotificationStore for PgStore {
    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, FetchError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (id, user_id, kind, title, message, action_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(notification.user_id)
        .bind(notification.kind.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.action_url)
        .fetch_one(&self.pool)
        .await?;

        notification_from_row(row)
    }

    async fn notifications_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, FetchError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(convert_rows(rows, notification_from_row))
    }

    async fn mark_read(&self, id: Uuid) -> Result<bool, FetchError> {
        let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_notification(&self, id: Uuid) -> Result<bool, FetchError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
