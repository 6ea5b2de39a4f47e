//! Match scoring: ranks listings against a profile.
//!
//! Two backends sit behind the `MatchScorer` trait:
//! - `HeuristicScorer`: deterministic point accumulation, scores every listing.
//! - `LlmRankingScorer`: asks the ranking service for its top 5.
//!
//! `Recommender` composes them: the LLM ranking when it is configured and
//! answers sensibly, the heuristic otherwise.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::fallback::FetchError;
use crate::models::listing::Listing;
use crate::models::profile::Profile;

pub mod handlers;
pub mod heuristic;
pub mod prompts;
pub mod ranking;
pub mod recommender;

pub const MAX_SCORE: u8 = 100;

/// A scored listing. `score` is always within 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub listing: Listing,
    pub score: u8,
    pub rationale: String,
}

/// Implement this to add a scoring backend without touching callers.
/// Implementations must not reorder or mutate the input slice; results are
/// sorted by descending score, ties in input order.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        profile: &Profile,
        listings: &[Listing],
    ) -> Result<Vec<MatchResult>, FetchError>;

    /// Short label reported to clients, e.g. `"heuristic"`.
    fn backend(&self) -> &'static str;
}
