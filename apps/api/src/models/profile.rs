use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::listing::DurationBucket;

/// Preferred way of working. Parsing is lenient: registration forms have
/// historically stored free text such as `office` or `work from home`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
    #[default]
    Any,
}

impl From<&str> for WorkMode {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "remote" | "work from home" | "wfh" => WorkMode::Remote,
            "onsite" | "on-site" | "on site" | "office" | "in-office" => WorkMode::Onsite,
            "hybrid" => WorkMode::Hybrid,
            _ => WorkMode::Any,
        }
    }
}

impl From<String> for WorkMode {
    fn from(value: String) -> Self {
        WorkMode::from(value.as_str())
    }
}

impl From<WorkMode> for String {
    fn from(value: WorkMode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkMode::Remote => "remote",
            WorkMode::Onsite => "onsite",
            WorkMode::Hybrid => "hybrid",
            WorkMode::Any => "any",
        };
        f.write_str(label)
    }
}

/// The attributes of a user that matching looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub display_name: String,
    pub education_level: String,
    pub field_of_study: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub region: String,
    #[serde(default)]
    pub preferred_duration: Option<DurationBucket>,
    #[serde(default)]
    pub work_mode: WorkMode,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub display_name: String,
    pub education_level: String,
    pub field_of_study: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub region: String,
    pub preferred_duration: Option<String>,
    pub work_mode: String,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            display_name: row.display_name,
            education_level: row.education_level,
            field_of_study: row.field_of_study,
            skills: row.skills,
            interests: row.interests,
            region: row.region,
            // An unparseable stored preference is treated as "no preference".
            preferred_duration: row
                .preferred_duration
                .and_then(|d| d.parse::<DurationBucket>().ok()),
            work_mode: WorkMode::from(row.work_mode),
        }
    }
}

/// Body of a profile upsert. The id comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    pub display_name: String,
    pub education_level: String,
    pub field_of_study: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub region: String,
    #[serde(default)]
    pub preferred_duration: Option<DurationBucket>,
    #[serde(default)]
    pub work_mode: WorkMode,
}

impl ProfileInput {
    pub fn into_profile(self, id: Uuid) -> Profile {
        Profile {
            id,
            display_name: self.display_name,
            education_level: self.education_level,
            field_of_study: self.field_of_study,
            skills: self.skills,
            interests: self.interests,
            region: self.region,
            preferred_duration: self.preferred_duration,
            work_mode: self.work_mode,
        }
    }
}
