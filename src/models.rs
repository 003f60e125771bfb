// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Priority of a generated test case.
/// Models drift on casing ("high", "HIGH"), so deserialization is
/// case-insensitive; serialization always uses the canonical form.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let value = raw.trim();
        if value.eq_ignore_ascii_case("high") {
            Ok(Priority::High)
        } else if value.eq_ignore_ascii_case("medium") {
            Ok(Priority::Medium)
        } else if value.eq_ignore_ascii_case("low") {
            Ok(Priority::Low)
        } else {
            Err(serde::de::Error::unknown_variant(
                value,
                &["High", "Medium", "Low"],
            ))
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// A single structured QA scenario as produced by the model.
/// Identity is positional; instances are never mutated after shaping.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub title: String,
    pub priority: Priority,
    #[serde(default)]
    pub preconditions: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub expected: String,
}

/// The unit exchanged between server and client.
/// By the time this leaves the request handler, `playwright_script` is
/// guaranteed non-empty (see `response::shape_generation`).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub test_cases: Vec<TestCase>,
    pub playwright_script: String,
}

/// Body of `POST /generate`. Created per user action, consumed once.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub feature: String,
    #[serde(default)]
    pub include_negative: bool,
}

/// The only error body shape the API returns.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn priority_deserializes_case_insensitively() {
        for raw in ["\"High\"", "\"high\"", "\"HIGH\"", "\" high \""] {
            let p: Priority = serde_json::from_str(raw).unwrap();
            assert_eq!(p, Priority::High);
        }
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert!(serde_json::from_str::<Priority>("\"Critical\"").is_err());
    }

    #[test]
    fn priority_serializes_canonically() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_case_uses_camel_case_wire_names() {
        let tc: TestCase = serde_json::from_value(json!({
            "title": "Valid login",
            "priority": "High",
            "preconditions": "User exists",
            "steps": ["Open page", "Submit form"],
            "expected": "Dashboard shown"
        }))
        .unwrap();
        assert_eq!(tc.steps.len(), 2);

        let wire = serde_json::to_value(&tc).unwrap();
        assert!(wire.get("preconditions").is_some());
        assert!(wire.get("expected").is_some());
    }

    #[test]
    fn sparse_test_case_fields_default() {
        let tc: TestCase = serde_json::from_value(json!({
            "title": "Minimal",
            "priority": "Low"
        }))
        .unwrap();
        assert!(tc.preconditions.is_empty());
        assert!(tc.steps.is_empty());
        assert!(tc.expected.is_empty());
    }

    #[test]
    fn include_negative_defaults_to_false() {
        let req: GenerationRequest =
            serde_json::from_value(json!({ "feature": "Login" })).unwrap();
        assert!(!req.include_negative);
    }

    #[test]
    fn generation_result_round_trips_wire_names() {
        let result = GenerationResult {
            test_cases: vec![],
            playwright_script: "import { test } from '@playwright/test';".to_string(),
        };
        let wire = serde_json::to_value(&result).unwrap();
        assert!(wire.get("testCases").is_some());
        assert!(wire.get("playwrightScript").is_some());
    }
}
