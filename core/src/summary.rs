use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the summary endpoint.
///
/// `name` and `email` are used only to personalize the generated email.
/// `notes` defaults to the empty string when the field is absent, so the
/// handler's own validation — not a serde rejection — produces the
/// missing-notes error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SummaryRequest {
    /// Free-text customer notes to summarize
    #[serde(default)]
    pub notes: String,
    /// Customer display name
    #[serde(default)]
    pub name: Option<String>,
    /// Customer email address
    #[serde(default)]
    pub email: Option<String>,
}

/// Structured output of the summary endpoint: a summary email, a
/// comma-separated tag list, and a suggested next step.
///
/// The struct is a total mapping over its three fields, but on the wire a
/// field absent from a successfully decoded completion stays absent —
/// `{"summary":"ok"}` in means `{"summary":"ok"}` out. Only the no-parse
/// fallback writes explicit empty strings for tags and next_steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResult {
    /// Generated summary email text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// 2-4 comma-separated labels, e.g. "follow-up, lead"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// One actionable follow-up sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
}

impl SummaryResult {
    /// Fallback shape for completions that are not valid JSON: the whole
    /// text becomes the summary, tags and next_steps are empty strings.
    pub fn from_raw_text(text: impl Into<String>) -> Self {
        Self {
            summary: Some(text.into()),
            tags: Some(String::new()),
            next_steps: Some(String::new()),
        }
    }
}

/// Normalize raw completion text into a [`SummaryResult`].
///
/// The completion service is an untrusted, format-agnostic text generator:
/// one strict decode attempt, one fallback shape, no retry and no decode
/// error escaping. Empty input yields the all-absent default (`{}` on the
/// wire), matching a service reply that carried no content at all.
pub fn normalize_completion(raw: &str) -> SummaryResult {
    let content = strip_code_fence(raw);
    if content.is_empty() {
        return SummaryResult::default();
    }
    serde_json::from_str(content).unwrap_or_else(|_| SummaryResult::from_raw_text(content))
}

/// Strip a wrapping markdown code fence, with or without a `json` language
/// tag. Unfenced text comes back trimmed but otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{SummaryRequest, SummaryResult, normalize_completion, strip_code_fence};

    #[test]
    fn valid_json_passes_fields_through_unchanged() {
        let result = normalize_completion(
            r#"{"summary": "Hi Ada", "tags": "lead, follow-up", "next_steps": "Call Tuesday."}"#,
        );

        assert_eq!(result.summary.as_deref(), Some("Hi Ada"));
        assert_eq!(result.tags.as_deref(), Some("lead, follow-up"));
        assert_eq!(result.next_steps.as_deref(), Some("Call Tuesday."));
    }

    #[test]
    fn partial_json_keeps_absent_fields_absent_on_the_wire() {
        let result = normalize_completion(r#"{"summary":"ok"}"#);

        assert_eq!(result.summary.as_deref(), Some("ok"));
        assert_eq!(result.tags, None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"summary": "ok"})
        );
    }

    #[test]
    fn fenced_json_matches_the_unfenced_result() {
        let plain = normalize_completion(r#"{"summary":"ok","tags":"bug report"}"#);
        let fenced = normalize_completion("```json\n{\"summary\":\"ok\",\"tags\":\"bug report\"}\n```");

        assert_eq!(fenced, plain);
    }

    #[test]
    fn bare_fence_without_language_tag_is_stripped() {
        let result = normalize_completion("```\n{\"summary\":\"ok\"}\n```");

        assert_eq!(result.summary.as_deref(), Some("ok"));
    }

    #[test]
    fn non_json_falls_back_to_raw_text_summary() {
        let result = normalize_completion("  Ada wants a demo next week.  ");

        assert_eq!(result.summary.as_deref(), Some("Ada wants a demo next week."));
        assert_eq!(result.tags.as_deref(), Some(""));
        assert_eq!(result.next_steps.as_deref(), Some(""));
    }

    #[test]
    fn fallback_serializes_explicit_empty_strings() {
        let result = normalize_completion("not json at all");

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"summary": "not json at all", "tags": "", "next_steps": ""})
        );
    }

    #[test]
    fn empty_content_yields_the_empty_object_default() {
        assert_eq!(normalize_completion(""), SummaryResult::default());
        assert_eq!(normalize_completion("   \n "), SummaryResult::default());
        assert_eq!(
            serde_json::to_value(normalize_completion("")).unwrap(),
            json!({})
        );
    }

    #[test]
    fn empty_fenced_block_falls_back_to_empty_summary() {
        let result = normalize_completion("```json\n```");

        assert_eq!(result.summary.as_deref(), None);
        assert_eq!(result, SummaryResult::default());
    }

    #[test]
    fn valid_json_of_the_wrong_shape_takes_the_text_fallback() {
        let result = normalize_completion("[1, 2, 3]");

        assert_eq!(result.summary.as_deref(), Some("[1, 2, 3]"));
        assert_eq!(result.tags.as_deref(), Some(""));
    }

    #[test]
    fn mistyped_field_takes_the_text_fallback() {
        let result = normalize_completion(r#"{"summary": 42}"#);

        assert_eq!(result.summary.as_deref(), Some(r#"{"summary": 42}"#));
    }

    #[test]
    fn unknown_extra_fields_are_ignored() {
        let result = normalize_completion(r#"{"summary":"ok","confidence":0.9}"#);

        assert_eq!(result.summary.as_deref(), Some("ok"));
        assert_eq!(result.tags, None);
    }

    #[test]
    fn strip_code_fence_handles_tagged_and_untagged_fences() {
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json{}```"), "{}");
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("plain text"), "plain text");
    }

    #[test]
    fn request_notes_default_to_empty_when_absent() {
        let req: SummaryRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(req.notes, "");
        assert_eq!(req.name, None);
        assert_eq!(req.email, None);
    }
}
