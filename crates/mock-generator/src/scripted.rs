//! Scripted generator - returns a fixed draft.

use async_trait::async_trait;
use generator_core::{EmailDraft, EmailGenerator, GenerationRequest, GeneratorError};

/// A generator that returns the same draft for every request.
///
/// Useful for testing the API flow without any AI processing.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    draft: EmailDraft,
}

impl ScriptedGenerator {
    /// Create a new ScriptedGenerator returning the given subject and body.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            draft: EmailDraft::new(subject, body),
        }
    }
}

#[async_trait]
impl EmailGenerator for ScriptedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<EmailDraft, GeneratorError> {
        Ok(self.draft.clone())
    }

    fn name(&self) -> &str {
        "ScriptedGenerator"
    }
}
