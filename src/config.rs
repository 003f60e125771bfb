// src/config.rs
use crate::errors::{GenError, Result};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_PORT: u16 = 5000;

/// Configuration for the OpenAI-compatible completion provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAIConfig,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; a missing key is a startup-time
    /// configuration error, not something to discover on the first request.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                GenError::Config(
                    "OPENAI_API_KEY is not set. The generator cannot start without it."
                        .to_string(),
                )
            })?;

        let api_base =
            lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| GenError::Config(format!("PORT is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            openai: OpenAIConfig {
                api_base,
                api_key,
                model,
            },
            port,
        })
    }
}
