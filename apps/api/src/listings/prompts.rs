// Prompt constants for the description enhancer.

/// Role instruction for description rewriting.
pub const ENHANCE_SYSTEM: &str = "You are a career counselor helping students understand \
    internship opportunities. Provide clear, encouraging, and informative descriptions.";

/// Replace `{title}`, `{organization}` and `{description}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Enhance this internship description to be more appealing and informative for Indian students, especially first-generation learners:

Title: {title}
Company: {organization}
Current Description: {description}

Make it more engaging and explain what they'll learn and how it helps their career."#;
