// src/prompt.rs

/// The system/user instruction pair sent to the completion endpoint.
#[derive(Debug, Clone)]
pub struct PromptPayload {
    pub system: String,
    pub user: String,
}

const SYSTEM_PROMPT: &str = "You are a senior QA automation engineer. You write \
test plans as strictly valid JSON matching the schema the user provides. \
Always return a single JSON object and nothing else.";

/// Builds the instruction payload for one generation request.
///
/// The feature text is embedded verbatim. Whitespace and newlines inside it
/// are tolerated by the model and are not sanitized here.
pub fn build_prompt(feature: &str, include_negative: bool) -> PromptPayload {
    let negative_clause = if include_negative {
        "\nInclude negative and edge cases."
    } else {
        ""
    };

    let user = format!(
        r#"Generate QA test cases for the following feature:

"{feature}"

Return a single JSON object with exactly this shape:
{{
  "testCases": [
    {{
      "title": "",
      "priority": "High | Medium | Low",
      "preconditions": "",
      "steps": [],
      "expected": ""
    }}
  ],
  "playwrightScript": ""
}}

Produce between 4 and 6 test cases.
"playwrightScript" must contain real executable Playwright test code: exactly
one test() block per test case, all grouped inside a single
test.describe('{feature}') suite. The script must not be empty.
Do not include any text outside the JSON object.{negative_clause}"#
    );

    PromptPayload {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_feature_verbatim() {
        let prompt = build_prompt("User login\nwith email and password", false);
        assert!(prompt.user.contains("User login\nwith email and password"));
    }

    #[test]
    fn negative_clause_appears_only_when_requested() {
        let without = build_prompt("Checkout", false);
        let with = build_prompt("Checkout", true);
        assert!(!without.user.contains("negative and edge cases"));
        assert!(with.user.contains("negative and edge cases"));
    }

    #[test]
    fn schema_fields_are_all_named() {
        let prompt = build_prompt("Search", false);
        for field in [
            "testCases",
            "title",
            "priority",
            "preconditions",
            "steps",
            "expected",
            "playwrightScript",
        ] {
            assert!(prompt.user.contains(field), "missing field: {field}");
        }
    }

    #[test]
    fn requires_a_single_suite_and_forbids_empty_script() {
        let prompt = build_prompt("Password reset", false);
        assert!(prompt.user.contains("test.describe('Password reset')"));
        assert!(prompt.user.contains("must not be empty"));
        assert!(prompt.user.contains("between 4 and 6"));
    }

    #[test]
    fn system_prompt_pins_the_json_contract() {
        let prompt = build_prompt("Anything", false);
        assert!(prompt.system.contains("strictly valid JSON"));
        assert!(prompt.system.contains("QA automation"));
    }
}
