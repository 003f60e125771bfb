// src/response.rs
use serde::Deserialize;

use crate::errors::{GenError, Result};
use crate::models::{GenerationResult, TestCase};
use crate::script;

/// Lenient view of the model's document: `testCases` may be absent and the
/// script may be absent, null, or blank without failing extraction.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeneration {
    #[serde(default)]
    test_cases: Vec<TestCase>,
    #[serde(default)]
    playwright_script: Option<String>,
}

/// Coerces raw model output into a well-formed `GenerationResult`.
///
/// Parse failure is a `MalformedResponse` carrying the offending text for
/// server-side logs. A missing or whitespace-only script is not an error:
/// the fallback generator repairs it locally, so the returned result always
/// has a non-empty `playwright_script`.
pub fn shape_generation(raw: &str, feature: &str) -> Result<GenerationResult> {
    let parsed: RawGeneration =
        serde_json::from_str(raw).map_err(|source| GenError::MalformedResponse {
            source,
            raw: raw.to_string(),
        })?;

    let playwright_script = match parsed.playwright_script {
        Some(script) if !script.trim().is_empty() => script,
        _ => {
            log::warn!(
                "model returned no usable playwrightScript; synthesizing fallback for {} test case(s)",
                parsed.test_cases.len()
            );
            script::fallback_script(feature, &parsed.test_cases)
        }
    };

    Ok(GenerationResult {
        test_cases: parsed.test_cases,
        playwright_script,
    })
}
