use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Internship length, stored and serialized as `"N month(s)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationBucket {
    OneMonth,
    TwoMonths,
    ThreeMonths,
    FourMonths,
    FiveMonths,
    SixMonths,
}

impl DurationBucket {
    pub fn months(self) -> u8 {
        match self {
            DurationBucket::OneMonth => 1,
            DurationBucket::TwoMonths => 2,
            DurationBucket::ThreeMonths => 3,
            DurationBucket::FourMonths => 4,
            DurationBucket::FiveMonths => 5,
            DurationBucket::SixMonths => 6,
        }
    }

    fn from_months(months: u8) -> Option<Self> {
        match months {
            1 => Some(DurationBucket::OneMonth),
            2 => Some(DurationBucket::TwoMonths),
            3 => Some(DurationBucket::ThreeMonths),
            4 => Some(DurationBucket::FourMonths),
            5 => Some(DurationBucket::FiveMonths),
            6 => Some(DurationBucket::SixMonths),
            _ => None,
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months() {
            1 => write!(f, "1 month"),
            n => write!(f, "{n} months"),
        }
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    /// Accepts `"3 months"`, `"3 month"` and a bare `"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let number = trimmed
            .strip_suffix("months")
            .or_else(|| trimmed.strip_suffix("month"))
            .unwrap_or(&trimmed)
            .trim();

        number
            .parse::<u8>()
            .ok()
            .and_then(DurationBucket::from_months)
            .ok_or_else(|| format!("unknown duration '{s}' (expected 1 to 6 months)"))
    }
}

impl TryFrom<String> for DurationBucket {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationBucket> for String {
    fn from(value: DurationBucket) -> Self {
        value.to_string()
    }
}

/// An internship posting as consumed by filtering and matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: String,
    /// Normalized state name, e.g. `Karnataka`.
    pub region: String,
    pub duration: DurationBucket,
    pub compensation: String,
    pub skills: Vec<String>,
    pub listing_type: String,
    pub category: String,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub suitable_for_first_timers: bool,
    pub language_requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw `listings` row. Duration is kept as text in the store.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub region: String,
    pub duration: String,
    pub compensation: String,
    pub skills: Vec<String>,
    pub listing_type: String,
    pub category: String,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub suitable_for_first_timers: bool,
    pub language_requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = String;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        Ok(Listing {
            id: row.id,
            title: row.title,
            organization: row.organization,
            location: row.location,
            region: row.region,
            duration: row.duration.parse()?,
            compensation: row.compensation,
            skills: row.skills,
            listing_type: row.listing_type,
            category: row.category,
            remote: row.remote,
            description: row.description,
            requirements: row.requirements,
            benefits: row.benefits,
            application_deadline: row.application_deadline,
            start_date: row.start_date,
            is_active: row.is_active,
            suitable_for_first_timers: row.suitable_for_first_timers,
            language_requirements: row.language_requirements,
            created_at: row.created_at,
        })
    }
}

fn default_active() -> bool {
    true
}

/// Body of a listing create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub region: String,
    pub duration: DurationBucket,
    pub compensation: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub listing_type: String,
    pub category: String,
    #[serde(default)]
    pub remote: bool,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub suitable_for_first_timers: bool,
    #[serde(default)]
    pub language_requirements: Vec<String>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub duration: Option<DurationBucket>,
    pub compensation: Option<String>,
    pub skills: Option<Vec<String>>,
    pub listing_type: Option<String>,
    pub category: Option<String>,
    pub remote: Option<bool>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub application_deadline: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub suitable_for_first_timers: Option<bool>,
    pub language_requirements: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_parses_plural_and_singular() {
        assert_eq!(
            "3 months".parse::<DurationBucket>().unwrap(),
            DurationBucket::ThreeMonths
        );
        assert_eq!(
            "1 month".parse::<DurationBucket>().unwrap(),
            DurationBucket::OneMonth
        );
        assert_eq!(
            " 6 Months ".parse::<DurationBucket>().unwrap(),
            DurationBucket::SixMonths
        );
        assert_eq!(
            "4".parse::<DurationBucket>().unwrap(),
            DurationBucket::FourMonths
        );
    }

    #[test]
    fn test_duration_rejects_out_of_range() {
        assert!("12 months".parse::<DurationBucket>().is_err());
        assert!("0 months".parse::<DurationBucket>().is_err());
        assert!("a while".parse::<DurationBucket>().is_err());
    }

    #[test]
    fn test_duration_serializes_as_text() {
        let json = serde_json::to_string(&DurationBucket::FiveMonths).unwrap();
        assert_eq!(json, r#""5 months""#);
        let back: DurationBucket = serde_json::from_str(r#""1 month""#).unwrap();
        assert_eq!(back, DurationBucket::OneMonth);
    }

    #[test]
    fn test_patch_defaults_to_no_changes() {
        let patch: ListingPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none());
        assert!(patch.remote.is_none());
    }
}
