// src/generation.rs
use crate::errors::{GenError, Result};
use crate::models::{GenerationRequest, GenerationResult};
use crate::prompt;
use crate::providers::LlmProvider;
use crate::response;

/// Runs one generation end to end: validate input, build the prompt, call
/// the provider, shape the raw output.
///
/// All-or-nothing: the first failing step aborts the request and no partial
/// result escapes. A blank feature fails before any provider call.
pub async fn run_generation(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
) -> Result<GenerationResult> {
    if request.feature.trim().is_empty() {
        return Err(GenError::InvalidInput(
            "Feature description is required.".to_string(),
        ));
    }

    let payload = prompt::build_prompt(&request.feature, request.include_negative);
    let (raw, latency_ms) = provider.generate(&payload).await?;
    log::info!(
        "model responded in {}ms with {} byte(s) of content",
        latency_ms,
        raw.len()
    );

    response::shape_generation(&raw, &request.feature)
}
