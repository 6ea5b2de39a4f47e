// Cross-cutting prompt fragments shared by every service that calls the LLM.
// Feature-specific prompts live next to the feature (matching/prompts.rs, listings/prompts.rs).

/// Appended to system prompts that expect a JSON object back.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Audience framing used by both the matcher and the description enhancer.
pub const AUDIENCE_INSTRUCTION: &str = "Focus on opportunities that would benefit \
    first-generation learners and students from diverse backgrounds.";
