// Prompt constants for the LLM ranking backend.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role instruction for ranking. `{audience}` and `{json_only}` are filled
/// from `llm_client::prompts` at call time.
pub const RANKING_SYSTEM_TEMPLATE: &str = "You are an AI career counselor for the PM Internship Scheme in India. \
    Your job is to match candidates with suitable internships based on their profiles. \
    Consider skills, interests, location preferences, education background, and career aspirations. \
    {audience} {json_only}";

/// Replace `{profile}` and `{listings}` before sending.
pub const RANKING_PROMPT_TEMPLATE: &str = r#"User Profile:
{profile}

Available Internships:
{listings}

Please analyze and rank the top 5 internships for this candidate. For each recommendation, provide:
1. Internship ID (use the number from the list)
2. Match Score (0-100)
3. Brief reasoning (2-3 sentences explaining why it's a good match)

Format your response as JSON:
{
  "recommendations": [
    {
      "id": 1,
      "matchScore": 95,
      "reasoning": "Excellent match because..."
    }
  ]
}"#;
