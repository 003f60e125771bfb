// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::LlmProvider;
use crate::providers::openai::OpenAIProvider;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let provider: Arc<dyn LlmProvider> =
            Arc::new(OpenAIProvider::new(Client::new(), config.openai.clone()));
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Wires an arbitrary provider behind the HTTP surface. Integration
    /// tests use this to script provider behavior without a network.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
