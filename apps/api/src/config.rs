use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Without a key the matcher runs on the heuristic alone.
    pub openai_api_key: Option<String>,
    pub ranking_api_url: String,
    pub ranking_model: String,
    pub ranking_timeout: Duration,
    pub ranking_max_attempts: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            ranking_api_url: env_or("RANKING_API_URL", DEFAULT_API_URL),
            ranking_model: env_or("RANKING_MODEL", DEFAULT_MODEL),
            ranking_timeout: Duration::from_secs(
                env_or("RANKING_TIMEOUT_SECS", "5")
                    .parse::<u64>()
                    .context("RANKING_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            ranking_max_attempts: env_or("RANKING_MAX_ATTEMPTS", "1")
                .parse::<u32>()
                .context("RANKING_MAX_ATTEMPTS must be a positive integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Ranking-service settings, or `None` when no API key is configured.
    pub fn llm_settings(&self) -> Option<LlmSettings> {
        self.openai_api_key.as_ref().map(|key| LlmSettings {
            api_url: self.ranking_api_url.clone(),
            api_key: key.clone(),
            model: self.ranking_model.clone(),
            timeout: self.ranking_timeout,
            max_attempts: self.ranking_max_attempts,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
