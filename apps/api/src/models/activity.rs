use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            other => Err(format!("unknown application status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub organization: String,
    pub location: String,
    pub duration: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub resume_ref: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub organization: String,
    pub location: String,
    pub duration: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub resume_ref: Option<String>,
    pub cover_letter: Option<String>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = String;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(Application {
            id: row.id,
            user_id: row.user_id,
            listing_id: row.listing_id,
            listing_title: row.listing_title,
            organization: row.organization,
            location: row.location,
            duration: row.duration,
            status: row.status.parse()?,
            applied_at: row.applied_at,
            updated_at: row.updated_at,
            notes: row.notes,
            resume_ref: row.resume_ref,
            cover_letter: row.cover_letter,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub organization: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub resume_ref: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A bookmarked listing, denormalized so the saved list renders without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SavedListing {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub organization: String,
    pub location: String,
    pub duration: String,
    pub compensation: String,
    pub skills: Vec<String>,
    pub remote: bool,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSavedListing {
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub organization: String,
    pub location: String,
    pub duration: String,
    pub compensation: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub remote: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ApplicationUpdate,
    NewInternship,
    DeadlineReminder,
    System,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::ApplicationUpdate => "application_update",
            NotificationKind::NewInternship => "new_internship",
            NotificationKind::DeadlineReminder => "deadline_reminder",
            NotificationKind::System => "system",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application_update" => Ok(NotificationKind::ApplicationUpdate),
            "new_internship" => Ok(NotificationKind::NewInternship),
            "deadline_reminder" => Ok(NotificationKind::DeadlineReminder),
            "system" => Ok(NotificationKind::System),
            other => Err(format!("unknown notification kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub action_url: Option<String>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = String;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: row.id,
            user_id: row.user_id,
            kind: row.kind.parse()?,
            title: row.title,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
            action_url: row.action_url,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub action_url: Option<String>,
}
