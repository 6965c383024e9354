//! Raw-text generator - parses a fixed model output.

use async_trait::async_trait;
use generator_core::{parse_draft, EmailDraft, EmailGenerator, GenerationRequest, GeneratorError};

/// A generator that runs a fixed raw model output through the shared
/// subject/body parser.
///
/// Useful for exercising the parsing heuristic end to end, including
/// malformed outputs.
#[derive(Debug, Clone)]
pub struct RawTextGenerator {
    text: String,
}

impl RawTextGenerator {
    /// Create a new RawTextGenerator returning the given raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl EmailGenerator for RawTextGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<EmailDraft, GeneratorError> {
        Ok(parse_draft(&self.text))
    }

    fn name(&self) -> &str {
        "RawTextGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generator_core::DEFAULT_SUBJECT;

    #[tokio::test]
    async fn test_raw_text_with_subject_line() {
        let generator = RawTextGenerator::new("Subject: Hello\nBody text");
        let request = GenerationRequest::new("Acme", "Jane Doe", "Retail", "intro");

        let draft = generator.generate(&request).await.unwrap();
        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.body, "Body text");
    }

    #[tokio::test]
    async fn test_raw_text_without_subject_line() {
        let generator = RawTextGenerator::new("Just a body");
        let request = GenerationRequest::new("Acme", "Jane Doe", "Retail", "intro");

        let draft = generator.generate(&request).await.unwrap();
        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "Just a body");
    }
}
