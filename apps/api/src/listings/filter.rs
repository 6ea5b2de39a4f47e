//! Free-text search and discrete filters over a listing snapshot.
//! Pure: input order is preserved and nothing is mutated.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use crate::models::listing::{DurationBucket, Listing};

/// Discrete criteria from the query string. Every present criterion narrows
/// by exact equality; blank values (`duration=`, `remote=`) count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub duration: Option<DurationBucket>,
    /// `None` keeps remote and on-site listings alike.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub remote: Option<bool>,
    pub category: Option<String>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl FilterCriteria {
    fn matches(&self, listing: &Listing) -> bool {
        equals(self.region.as_deref(), &listing.region)
            && equals(self.listing_type.as_deref(), &listing.listing_type)
            && equals(self.category.as_deref(), &listing.category)
            && self.duration.map_or(true, |d| d == listing.duration)
            && self.remote.map_or(true, |r| r == listing.remote)
    }
}

fn equals(wanted: Option<&str>, actual: &str) -> bool {
    match wanted.map(str::trim) {
        Some(w) if !w.is_empty() => w == actual,
        _ => true,
    }
}

fn matches_query(listing: &Listing, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(&listing.title)
        || hit(&listing.organization)
        || hit(&listing.location)
        || hit(&listing.category)
        || listing.skills.iter().any(|s| hit(s))
}

/// Returns the listings that satisfy the query and every criterion.
pub fn apply(listings: &[Listing], query: &str, criteria: &FilterCriteria) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|l| needle.is_empty() || matches_query(l, &needle))
        .filter(|l| criteria.matches(l))
        .cloned()
        .collect()
}
