//! LLM-backed ranking.
//!
//! The prompt enumerates the candidate listings 1-based; the service answers
//! with those numbers, and `resolve` maps them back onto the same slice. The
//! enumeration order is the input order and must not change between building
//! the prompt and resolving the answer.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::fallback::FetchError;
use crate::llm_client::prompts::{AUDIENCE_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::matching::prompts::{RANKING_PROMPT_TEMPLATE, RANKING_SYSTEM_TEMPLATE};
use crate::matching::{MatchResult, MatchScorer, MAX_SCORE};
use crate::models::listing::Listing;
use crate::models::profile::Profile;

/// The service is asked for this many recommendations; extras are dropped.
pub const TOP_N: usize = 5;
const RANKING_MAX_TOKENS: u32 = 1500;

/// Expected shape of the service's answer.
#[derive(Debug, Deserialize)]
pub struct RankingResponse {
    pub recommendations: Vec<RankedEntry>,
}

/// One recommendation. Numeric fields accept numbers or numeric strings
/// (`2`, `2.0`, `"2"`); anything else deserializes to `None` and the entry is
/// dropped by `resolve` instead of rejecting the whole answer.
#[derive(Debug, Deserialize)]
pub struct RankedEntry {
    /// 1-based position in the enumerated prompt.
    #[serde(default, deserialize_with = "lenient_number")]
    pub id: Option<f64>,
    #[serde(rename = "matchScore", default, deserialize_with = "lenient_number")]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub reasoning: String,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

/// Zero-based index for a 1-based id; fractional or non-positive ids are invalid.
fn position(id: f64) -> Option<usize> {
    if id.fract() != 0.0 || id < 1.0 || id > usize::MAX as f64 {
        return None;
    }
    Some(id as usize - 1)
}

pub struct LlmRankingScorer {
    llm: LlmClient,
}

impl LlmRankingScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchScorer for LlmRankingScorer {
    async fn score(
        &self,
        profile: &Profile,
        listings: &[Listing],
    ) -> Result<Vec<MatchResult>, FetchError> {
        let prompt = build_prompt(profile, listings);
        let system = RANKING_SYSTEM_TEMPLATE
            .replace("{audience}", AUDIENCE_INSTRUCTION)
            .replace("{json_only}", JSON_ONLY_SYSTEM);

        let response: RankingResponse = self
            .llm
            .call_json(&prompt, &system, RANKING_MAX_TOKENS)
            .await?;

        let results = resolve(response, listings)?;
        info!(
            "LLM ranking returned {} recommendations for profile {}",
            results.len(),
            profile.id
        );
        Ok(results)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Renders the profile summary and the 1-based listing enumeration.
pub fn build_prompt(profile: &Profile, listings: &[Listing]) -> String {
    let duration = profile
        .preferred_duration
        .map(|d| d.to_string())
        .unwrap_or_else(|| "No preference".to_string());

    let profile_section = format!(
        "- Name: {}\n- Education: {} in {}\n- Skills: {}\n- Interests: {}\n- Location: {}\n- Preferred Duration: {}\n- Work Type Preference: {}",
        profile.display_name,
        profile.education_level,
        profile.field_of_study,
        profile.skills.join(", "),
        profile.interests.join(", "),
        profile.region,
        duration,
        profile.work_mode,
    );

    let listings_section = listings
        .iter()
        .enumerate()
        .map(|(index, l)| {
            format!(
                "{}. {} at {}\n   - Location: {}\n   - Duration: {}\n   - Skills Required: {}\n   - Type: {}\n   - Remote: {}\n   - Requirements: {}\n",
                index + 1,
                l.title,
                l.organization,
                l.location,
                l.duration,
                l.skills.join(", "),
                l.listing_type,
                if l.remote { "Yes" } else { "No" },
                l.requirements.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    RANKING_PROMPT_TEMPLATE
        .replace("{profile}", &profile_section)
        .replace("{listings}", &listings_section)
}

/// Maps the service's 1-based ids back onto `listings`.
///
/// Ids outside `1..=listings.len()` are dropped, as are repeats of an id
/// already seen. Scores are rounded and clamped to 0..=100. Output is sorted
/// by descending score (ties in enumeration order) and truncated to `TOP_N`.
/// An answer that resolves to nothing is a schema violation.
pub fn resolve(
    response: RankingResponse,
    listings: &[Listing],
) -> Result<Vec<MatchResult>, FetchError> {
    let mut seen = HashSet::new();
    let mut resolved: Vec<(usize, MatchResult)> = Vec::new();

    for entry in response.recommendations {
        let Some(raw_score) = entry.match_score else {
            debug!("Dropping recommendation {:?} without a numeric score", entry.id);
            continue;
        };
        let index = entry.id.and_then(position);
        let Some((index, listing)) = index.and_then(|i| listings.get(i).map(|l| (i, l))) else {
            debug!("Dropping recommendation with unknown id {:?}", entry.id);
            continue;
        };
        if !seen.insert(index) {
            continue;
        }
        resolved.push((
            index,
            MatchResult {
                listing: listing.clone(),
                score: clamp_score(raw_score),
                rationale: entry.reasoning,
            },
        ));
    }

    if resolved.is_empty() {
        return Err(FetchError::Schema(
            "no recommendation referenced an enumerated listing".to_string(),
        ));
    }

    resolved.sort_by(|(ia, a), (ib, b)| b.score.cmp(&a.score).then(ia.cmp(ib)));
    resolved.truncate(TOP_N);

    Ok(resolved.into_iter().map(|(_, result)| result).collect())
}

fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, MAX_SCORE as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{client_for, completion, unreachable_client};
    use crate::models::profile::WorkMode;
    use crate::test_fixtures::{five_listings, profile};
    use axum::http::StatusCode;
    use serde_json::json;

    fn entry(id: i64, score: f64) -> RankedEntry {
        RankedEntry {
            id: Some(id as f64),
            match_score: Some(score),
            reasoning: format!("reason {id}"),
        }
    }

    #[test]
    fn test_prompt_enumerates_listings_one_based_in_order() {
        let listings = five_listings();
        let prompt = build_prompt(&profile(&["Python"], &["AI"], WorkMode::Remote), &listings);

        let first = prompt.find("1. Software Development Intern at Org 1").unwrap();
        let fifth = prompt.find("5. Finance & Accounting Assistant at Org 5").unwrap();
        assert!(first < fifth);
        assert!(!prompt.contains("6. "));
        assert!(prompt.contains("- Skills: Python"));
        assert!(prompt.contains("- Work Type Preference: remote"));
        assert!(prompt.contains("- Remote: Yes"));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_prompt_handles_missing_duration_preference() {
        let mut p = profile(&[], &[], WorkMode::Any);
        p.preferred_duration = None;
        let prompt = build_prompt(&p, &five_listings());
        assert!(prompt.contains("- Preferred Duration: No preference"));
    }

    #[test]
    fn test_resolve_maps_ids_to_positions() {
        let listings = five_listings();
        let response = RankingResponse {
            recommendations: vec![entry(3, 90.0), entry(1, 80.0)],
        };
        let results = resolve(response, &listings).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].listing.id, listings[2].id);
        assert_eq!(results[0].rationale, "reason 3");
        assert_eq!(results[1].listing.id, listings[0].id);
    }

    #[test]
    fn test_resolve_drops_out_of_range_ids() {
        let listings = five_listings();
        let response = RankingResponse {
            recommendations: vec![entry(2, 85.0), entry(99, 99.0), entry(0, 70.0), entry(-4, 60.0)],
        };
        let results = resolve(response, &listings).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].listing.id, listings[1].id);
    }

    #[test]
    fn test_resolve_with_nothing_resolvable_is_schema_error() {
        let response = RankingResponse {
            recommendations: vec![entry(99, 95.0)],
        };
        let err = resolve(response, &five_listings()).unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn test_resolve_sorts_clamps_and_dedupes() {
        let listings = five_listings();
        let response = RankingResponse {
            recommendations: vec![
                entry(4, 60.0),
                entry(2, 140.0),
                entry(4, 99.0),
                entry(5, -10.0),
                entry(1, 60.4),
            ],
        };
        let results = resolve(response, &listings).unwrap();
        let scores: Vec<u8> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![100, 60, 60, 0]);
        // tie at 60: listing 1 precedes listing 4 in the enumeration
        assert_eq!(results[1].listing.id, listings[0].id);
        assert_eq!(results[2].listing.id, listings[3].id);
    }

    #[test]
    fn test_resolve_truncates_to_top_n() {
        let mut listings = five_listings();
        listings.extend(five_listings());
        let response = RankingResponse {
            recommendations: (1..=8).map(|id| entry(id, 50.0 + id as f64)).collect(),
        };
        let results = resolve(response, &listings).unwrap();
        assert_eq!(results.len(), TOP_N);
        assert_eq!(results[0].score, 58);
    }

    #[test]
    fn test_response_schema_requires_recommendations() {
        assert!(serde_json::from_value::<RankingResponse>(json!({ "results": [] })).is_err());
    }

    #[test]
    fn test_numeric_fields_accept_floats_and_strings() {
        let listings = five_listings();
        let response: RankingResponse = serde_json::from_value(json!({
            "recommendations": [
                { "id": 2.0, "matchScore": "91", "reasoning": "float id" },
                { "id": "4", "matchScore": 77.6, "reasoning": "string id" }
            ]
        }))
        .unwrap();

        let results = resolve(response, &listings).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].listing.id, listings[1].id);
        assert_eq!(results[0].score, 91);
        assert_eq!(results[1].listing.id, listings[3].id);
        assert_eq!(results[1].score, 78);
    }

    #[test]
    fn test_malformed_entries_are_dropped_individually() {
        let listings = five_listings();
        let response: RankingResponse = serde_json::from_value(json!({
            "recommendations": [
                { "id": "one", "matchScore": 90, "reasoning": "word id" },
                { "id": 1.5, "matchScore": 88, "reasoning": "fractional id" },
                { "id": 3, "matchScore": null, "reasoning": "no score" },
                { "id": 5, "matchScore": 64, "reasoning": "valid" }
            ]
        }))
        .unwrap();

        let results = resolve(response, &listings).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].listing.id, listings[4].id);
        assert_eq!(results[0].rationale, "valid");
    }

    #[test]
    fn test_only_malformed_entries_is_schema_error() {
        let response: RankingResponse = serde_json::from_value(json!({
            "recommendations": [{ "id": "one", "matchScore": 90, "reasoning": "x" }]
        }))
        .unwrap();
        assert!(matches!(
            resolve(response, &five_listings()),
            Err(FetchError::Schema(_))
        ));
    }

    #[tokio::test]
    async fn test_scorer_uses_service_answer() {
        let content = json!({
            "recommendations": [
                { "id": 2, "matchScore": 88, "reasoning": "Marketing interest" },
                { "id": 99, "matchScore": 97, "reasoning": "Hallucinated" }
            ]
        })
        .to_string();
        let scorer = LlmRankingScorer::new(client_for(StatusCode::OK, completion(&content)).await);
        let listings = five_listings();

        let results = scorer
            .score(&profile(&[], &["marketing"], WorkMode::Any), &listings)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].listing.id, listings[1].id);
        assert_eq!(results[0].score, 88);
        assert_eq!(scorer.backend(), "llm");
    }

    #[tokio::test]
    async fn test_scorer_reports_server_error() {
        let scorer = LlmRankingScorer::new(
            client_for(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await,
        );
        let err = scorer
            .score(&profile(&[], &[], WorkMode::Any), &five_listings())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_scorer_reports_non_json_content() {
        let scorer = LlmRankingScorer::new(
            client_for(StatusCode::OK, completion("Here are my top picks: 1, 3, 5")).await,
        );
        let err = scorer
            .score(&profile(&[], &[], WorkMode::Any), &five_listings())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_scorer_reports_unreachable_service() {
        let scorer = LlmRankingScorer::new(unreachable_client());
        assert!(scorer
            .score(&profile(&[], &[], WorkMode::Any), &five_listings())
            .await
            .is_err());
    }
}
