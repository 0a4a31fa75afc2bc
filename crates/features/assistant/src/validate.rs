//! Boundary validation for the assistant configuration submission.
//!
//! Normalization happens before the bounds checks: the instruction text is
//! trimmed and the knowledge list is trimmed entry-by-entry with blank
//! entries dropped, so a list of pure whitespace behaves as an empty list.

use serde::Serialize;
use serde_json::Value;

pub const AI_CONTEXT_MIN_LENGTH: usize = 30;
pub const AI_CONTEXT_MAX_LENGTH: usize = 1500;
pub const EMBEDDING_MIN_LENGTH: usize = 10;
pub const EMBEDDING_MAX_LENGTH: usize = 1000;
pub const MAX_EMBEDDINGS: usize = 20;

/// Rejections, in predicate order. The length messages name the minimum
/// regardless of which bound broke, and the per-entry message never
/// identifies the offending index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Assistant instructions are required")]
    MissingInstructions,

    #[error("Invalid data format")]
    InvalidShape,

    #[error("Assistant instructions must be at least {} characters long", AI_CONTEXT_MIN_LENGTH)]
    InstructionsLength,

    #[error("A maximum of {} knowledge entries is allowed", MAX_EMBEDDINGS)]
    TooManyEmbeddings,

    #[error("Each knowledge entry must be at least {} characters long", EMBEDDING_MIN_LENGTH)]
    EmbeddingLength,
}

/// A validated, normalized assistant configuration ready for forwarding.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfigSubmission {
    pub ai_context: String,
    pub embeddings: Vec<String>,
    pub company_id: Option<Value>,
}

/// The wire shape sent to the backend; `company_id` is omitted unless the
/// client supplied a usable one.
#[derive(Debug, Serialize)]
pub struct AssistantConfigPayload<'a> {
    pub ai_context: &'a str,
    pub embeddings: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<&'a Value>,
}

impl AssistantConfigSubmission {
    /// Parses and validates a raw JSON body.
    ///
    /// # Errors
    /// The first failing predicate, see [`ValidationError`].
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        if !is_truthy(body.get("ai_context")) {
            return Err(ValidationError::MissingInstructions);
        }

        let Some(ai_context) = body.get("ai_context").and_then(Value::as_str) else {
            return Err(ValidationError::InvalidShape);
        };
        let Some(embeddings) = body.get("embeddings").and_then(Value::as_array) else {
            return Err(ValidationError::InvalidShape);
        };

        let ai_context = ai_context.trim();
        let embeddings: Vec<&str> = embeddings
            .iter()
            .map(|entry| entry.as_str().ok_or(ValidationError::InvalidShape))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();

        let context_length = ai_context.chars().count();
        if !(AI_CONTEXT_MIN_LENGTH..=AI_CONTEXT_MAX_LENGTH).contains(&context_length) {
            return Err(ValidationError::InstructionsLength);
        }

        if embeddings.len() > MAX_EMBEDDINGS {
            return Err(ValidationError::TooManyEmbeddings);
        }

        for entry in &embeddings {
            let length = entry.chars().count();
            if !(EMBEDDING_MIN_LENGTH..=EMBEDDING_MAX_LENGTH).contains(&length) {
                return Err(ValidationError::EmbeddingLength);
            }
        }

        Ok(Self {
            ai_context: ai_context.to_owned(),
            embeddings: embeddings.into_iter().map(str::to_owned).collect(),
            company_id: passthrough_company_id(body),
        })
    }

    #[must_use]
    pub fn payload(&self) -> AssistantConfigPayload<'_> {
        AssistantConfigPayload {
            ai_context: &self.ai_context,
            embeddings: &self.embeddings,
            company_id: self.company_id.as_ref(),
        }
    }
}

/// The presence check keeps the original contract: `0`, `false`, `null`
/// and `""` all count as absent.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// `company_id` is an opaque pass-through, forwarded only when usable.
fn passthrough_company_id(body: &Value) -> Option<Value> {
    body.get("company_id").filter(|id| is_truthy(Some(id))).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VALID_CONTEXT: &str = "Answer politely and route pricing questions to sales.";

    fn valid_body() -> Value {
        json!({
            "ai_context": VALID_CONTEXT,
            "embeddings": ["Our office hours are 9:00-18:00.", "Delivery takes 2-3 business days."]
        })
    }

    #[test]
    fn a_valid_submission_is_normalized() {
        let mut body = valid_body();
        body["ai_context"] = json!(format!("  {VALID_CONTEXT}  "));
        body["embeddings"] = json!(["  Our office hours are 9:00-18:00.  ", "   "]);

        let submission = AssistantConfigSubmission::parse(&body).expect("valid");
        assert_eq!(submission.ai_context, VALID_CONTEXT);
        assert_eq!(submission.embeddings, vec!["Our office hours are 9:00-18:00."]);
        assert!(submission.company_id.is_none());
    }

    #[test]
    fn missing_or_falsy_instructions_are_required() {
        for absent in [Value::Null, json!(""), json!(0), json!(false)] {
            let mut body = valid_body();
            body["ai_context"] = absent.clone();
            assert_eq!(
                AssistantConfigSubmission::parse(&body).unwrap_err(),
                ValidationError::MissingInstructions,
                "{absent}"
            );
        }

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("ai_context");
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::MissingInstructions
        );
    }

    #[test]
    fn shape_violations_are_rejected() {
        // Present-but-non-string instructions.
        let mut body = valid_body();
        body["ai_context"] = json!(17);
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InvalidShape
        );

        // Embeddings not a list.
        let mut body = valid_body();
        body["embeddings"] = json!("not a list");
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InvalidShape
        );

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("embeddings");
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InvalidShape
        );

        // Non-string entries inside the list.
        let mut body = valid_body();
        body["embeddings"] = json!(["Our office hours are 9:00-18:00.", 5]);
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InvalidShape
        );
    }

    #[test]
    fn instruction_length_floor_is_inclusive() {
        let mut body = valid_body();
        body["ai_context"] = json!("x".repeat(29));
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InstructionsLength
        );

        let mut body = valid_body();
        body["ai_context"] = json!("x".repeat(30));
        assert!(AssistantConfigSubmission::parse(&body).is_ok());

        let mut body = valid_body();
        body["ai_context"] = json!("x".repeat(1500));
        assert!(AssistantConfigSubmission::parse(&body).is_ok());

        let mut body = valid_body();
        body["ai_context"] = json!("x".repeat(1501));
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::InstructionsLength
        );
    }

    #[test]
    fn the_count_check_fires_even_when_every_entry_is_valid() {
        let mut body = valid_body();
        body["embeddings"] = json!(vec!["A perfectly valid knowledge entry."; 25]);
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::TooManyEmbeddings
        );

        let mut body = valid_body();
        body["embeddings"] = json!(vec!["A perfectly valid knowledge entry."; 20]);
        assert!(AssistantConfigSubmission::parse(&body).is_ok());
    }

    #[test]
    fn whitespace_only_entries_filter_to_an_empty_accepted_list() {
        let mut body = valid_body();
        body["embeddings"] = json!(["   ", "\t", ""]);
        let submission = AssistantConfigSubmission::parse(&body).expect("valid");
        assert!(submission.embeddings.is_empty());
    }

    #[test]
    fn entry_length_bounds_after_trimming() {
        let mut body = valid_body();
        body["embeddings"] = json!(["too short"]);
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::EmbeddingLength
        );

        // Exactly at the floor once trimmed.
        let mut body = valid_body();
        body["embeddings"] = json!(["  1234567890  "]);
        assert!(AssistantConfigSubmission::parse(&body).is_ok());

        let mut body = valid_body();
        body["embeddings"] = json!(["x".repeat(1001)]);
        assert_eq!(
            AssistantConfigSubmission::parse(&body).unwrap_err(),
            ValidationError::EmbeddingLength
        );
    }

    #[test]
    fn company_id_passes_through_only_when_usable() {
        let mut body = valid_body();
        body["company_id"] = json!("acme-7");
        let submission = AssistantConfigSubmission::parse(&body).expect("valid");
        assert_eq!(submission.company_id, Some(json!("acme-7")));

        let mut body = valid_body();
        body["company_id"] = json!(42);
        let submission = AssistantConfigSubmission::parse(&body).expect("valid");
        assert_eq!(submission.company_id, Some(json!(42)));

        for unusable in [json!(""), json!(0), Value::Null] {
            let mut body = valid_body();
            body["company_id"] = unusable;
            let submission = AssistantConfigSubmission::parse(&body).expect("valid");
            assert!(submission.company_id.is_none());
        }
    }

    #[test]
    fn payload_omits_an_absent_company_id() {
        let submission = AssistantConfigSubmission::parse(&valid_body()).expect("valid");
        let payload = serde_json::to_value(submission.payload()).expect("serialize");
        assert!(payload.get("company_id").is_none());
        assert_eq!(payload["ai_context"], VALID_CONTEXT);
    }
}
