use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::fallback::with_fallback;
use crate::matching::heuristic::{self, HeuristicScorer};
use crate::matching::{MatchResult, MatchScorer};
use crate::models::listing::Listing;
use crate::models::profile::Profile;

/// Ranked listings plus the backend that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub results: Vec<MatchResult>,
    pub scorer_backend: String,
}

/// Primary scorer with the heuristic behind it. Never fails.
#[derive(Clone)]
pub struct Recommender {
    primary: Option<Arc<dyn MatchScorer>>,
}

impl Recommender {
    pub fn new(primary: Option<Arc<dyn MatchScorer>>) -> Self {
        Self { primary }
    }

    /// Heuristic only; used when no ranking service is configured.
    pub fn heuristic_only() -> Self {
        Self { primary: None }
    }

    pub async fn recommend(&self, profile: &Profile, listings: &[Listing]) -> Recommendations {
        let fallback_backend = HeuristicScorer.backend().to_string();

        if listings.is_empty() {
            return Recommendations {
                results: Vec::new(),
                scorer_backend: fallback_backend,
            };
        }

        let Some(primary) = &self.primary else {
            return Recommendations {
                results: heuristic::rank(profile, listings),
                scorer_backend: fallback_backend,
            };
        };

        let mut backend = primary.backend().to_string();
        let results = with_fallback(
            "ranking service",
            primary.score(profile, listings).await,
            || {
                backend = fallback_backend;
                heuristic::rank(profile, listings)
            },
        );

        info!(
            "Scored {} listings for profile {} via {}",
            listings.len(),
            profile.id,
            backend
        );

        Recommendations {
            results,
            scorer_backend: backend,
        }
    }
}
