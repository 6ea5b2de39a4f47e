//! Deterministic fallback scorer.
//!
//! Algorithm, per listing:
//! 1. base score 50
//! 2. +20 if any profile skill is a case-insensitive substring of a listing skill tag
//! 3. +20 if any profile interest is a case-insensitive substring of the listing type or title
//! 4. +10 if the profile prefers remote work and the listing is remote
//! 5. clamp to 100
//!
//! Every listing is scored; output is sorted by descending score, ties in
//! input order.

use async_trait::async_trait;

use crate::fallback::FetchError;
use crate::matching::{MatchResult, MatchScorer, MAX_SCORE};
use crate::models::listing::Listing;
use crate::models::profile::{Profile, WorkMode};

const BASE_SCORE: u8 = 50;
const SKILL_BONUS: u8 = 20;
const INTEREST_BONUS: u8 = 20;
const REMOTE_BONUS: u8 = 10;

const SKILL_RATIONALE: &str = "skills align with requirements";
const INTEREST_SUFFIX: &str = " and matches career interests";
const DEFAULT_RATIONALE: &str = "basic compatibility match";

pub struct HeuristicScorer;

#[async_trait]
impl MatchScorer for HeuristicScorer {
    async fn score(
        &self,
        profile: &Profile,
        listings: &[Listing],
    ) -> Result<Vec<MatchResult>, FetchError> {
        Ok(rank(profile, listings))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Scores and sorts every listing.
pub fn rank(profile: &Profile, listings: &[Listing]) -> Vec<MatchResult> {
    let skills = lowered_terms(&profile.skills);
    let interests = lowered_terms(&profile.interests);
    let wants_remote = profile.work_mode == WorkMode::Remote;

    let mut results: Vec<MatchResult> = listings
        .iter()
        .map(|listing| {
            let (score, rationale) = score_listing(&skills, &interests, wants_remote, listing);
            MatchResult {
                listing: listing.clone(),
                score,
                rationale,
            }
        })
        .collect();

    // sort_by is stable: equal scores keep input order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn score_listing(
    skills: &[String],
    interests: &[String],
    wants_remote: bool,
    listing: &Listing,
) -> (u8, String) {
    let mut score = BASE_SCORE;
    let mut rationale = DEFAULT_RATIONALE.to_string();

    let listing_skills: Vec<String> = listing.skills.iter().map(|s| s.to_lowercase()).collect();
    let skill_match = skills
        .iter()
        .any(|skill| listing_skills.iter().any(|tag| tag.contains(skill.as_str())));
    if skill_match {
        score += SKILL_BONUS;
        rationale = SKILL_RATIONALE.to_string();
    }

    let listing_type = listing.listing_type.to_lowercase();
    let title = listing.title.to_lowercase();
    let interest_match = interests
        .iter()
        .any(|i| listing_type.contains(i.as_str()) || title.contains(i.as_str()));
    if interest_match {
        score += INTEREST_BONUS;
        rationale.push_str(INTEREST_SUFFIX);
    }

    if wants_remote && listing.remote {
        score += REMOTE_BONUS;
    }

    (score.min(MAX_SCORE), rationale)
}

/// Lowercases terms and drops blanks. A blank term would be a substring of
/// everything.
fn lowered_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
