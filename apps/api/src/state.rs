use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::matching::recommender::Recommender;
use crate::store::{ApplicationStore, ListingStore, NotificationStore, ProfileStore, SavedStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is built once in `main`; tests swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<dyn ListingStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub saved: Arc<dyn SavedStore>,
    pub notifications: Arc<dyn NotificationStore>,
    pub recommender: Recommender,
    /// Used by the description enhancer. `None` when no API key is configured.
    pub llm: Option<LlmClient>,
}
