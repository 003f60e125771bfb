// src/providers/mod.rs

use async_trait::async_trait;

use crate::errors::Result;
use crate::prompt::PromptPayload;

pub mod openai;

/// A completion backend for the generator.
///
/// Object-safe so the request handler can run against a scripted stub in
/// integration tests; production wires in `OpenAIProvider`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends one non-streaming completion request.
    ///
    /// # Returns
    /// The raw content text of the completion and the call latency in
    /// milliseconds. The latency is logged, never returned to clients.
    async fn generate(&self, prompt: &PromptPayload) -> Result<(String, u64)>;
}
