//! Gemini `generateContent` request and response types.

use serde::{Deserialize, Serialize};

/// A piece of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    pub text: String,
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Prompt contents.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from a prompt string.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate, if any.
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }

        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content (may be absent when generation was blocked).
    pub content: Option<Content>,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details.
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// HTTP status code echoed by the API.
    pub code: Option<i32>,
    /// Error message.
    pub message: String,
    /// Error status label (e.g., "RESOURCE_EXHAUSTED").
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::from_prompt("Write an email");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"parts": [{"text": "Write an email"}]}]
            })
        );
    }

    #[test]
    fn test_response_first_candidate_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Subject: Hi"}, {"text": "\nBody"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.first_candidate_text().unwrap(),
            "Subject: Hi\nBody"
        );
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn test_response_blocked_candidate() {
        let json = r#"{"candidates": [{}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn test_api_error_parsing() {
        let json = r#"{
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        }"#;
        let error: ApiError = serde_json::from_str(json).unwrap();

        assert_eq!(error.error.code, Some(429));
        assert_eq!(error.error.message, "Quota exceeded");
        assert_eq!(error.error.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }
}
