use std::collections::HashMap;

use anyhow::{bail, Context, Result};

use crate::llm_client::OPENROUTER_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_api_url: String,
    /// Unset means the HTTP client's own default applies.
    pub llm_timeout_secs: Option<u64>,
    /// Bearer token -> user id.
    pub session_tokens: HashMap<String, String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = match std::env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?.trim().to_string(),
            openrouter_api_url: std::env::var("OPENROUTER_API_URL")
                .unwrap_or_else(|_| OPENROUTER_API_URL.to_string()),
            llm_timeout_secs,
            session_tokens: parse_session_tokens(
                &std::env::var("CAREERPAD_SESSION_TOKENS").unwrap_or_default(),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Parses `uid:token,uid:token` into a token -> uid map.
pub fn parse_session_tokens(raw: &str) -> Result<HashMap<String, String>> {
    let mut tokens = HashMap::new();

    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (uid, token) = pair
            .split_once(':')
            .with_context(|| format!("Session token entry '{pair}' must look like uid:token"))?;
        let (uid, token) = (uid.trim(), token.trim());
        if uid.is_empty() || token.is_empty() {
            bail!("Session token entry '{pair}' has an empty uid or token");
        }
        tokens.insert(token.to_string(), uid.to_string());
    }

    Ok(tokens)
}
