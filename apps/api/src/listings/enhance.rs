use tracing::debug;

use crate::fallback::{with_fallback, FetchError};
use crate::listings::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};
use crate::llm_client::prompts::AUDIENCE_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::listing::Listing;

const ENHANCE_MAX_TOKENS: u32 = 300;

/// Rewrites a listing description for first-time applicants.
/// Returns the stored description when no client is configured or the call fails.
pub async fn enhance_description(llm: Option<&LlmClient>, listing: &Listing) -> String {
    let Some(llm) = llm else {
        return listing.description.clone();
    };

    let prompt = ENHANCE_PROMPT_TEMPLATE
        .replace("{title}", &listing.title)
        .replace("{organization}", &listing.organization)
        .replace("{description}", &listing.description);

    let system = format!("{ENHANCE_SYSTEM} {AUDIENCE_INSTRUCTION}");

    let generated = llm
        .call_text(&prompt, &system, ENHANCE_MAX_TOKENS)
        .await
        .map_err(FetchError::from);

    debug!("Enhancing description for listing {}", listing.id);
    with_fallback("description enhancer", generated, || {
        listing.description.clone()
    })
}
